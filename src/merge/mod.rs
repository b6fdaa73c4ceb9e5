//! Merging update reports into a baseline report

mod merger;
mod outcome;

pub use merger::{MergeInputs, ReportMerger};
pub use outcome::{LeafUpdate, MergeOutcome};
