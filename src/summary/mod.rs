//! Merge run summary
//!
//! Records which reports went into a merge (with content digests), how many
//! metric records were compared and replaced, and where the result went.

mod merge_summary;

pub use merge_summary::{
    MergeSummary, ReportSource, MERGE_SUMMARY_SCHEMA_ID, MERGE_SUMMARY_SCHEMA_VERSION,
};
