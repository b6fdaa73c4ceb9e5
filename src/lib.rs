//! Stencil report merge
//!
//! Reconciles a baseline stencil benchmark report with one or more update
//! reports. Every metric record that exactly one update report changed takes
//! that report's `time` and `rms`; records changed by two or more update
//! reports abort the merge.

pub mod config;
pub mod error;
pub mod logging;
pub mod merge;
pub mod report;
pub mod summary;

pub use config::MergeConfig;
pub use error::{ExitCode, FailureKind, MergeError};
pub use merge::{LeafUpdate, MergeInputs, MergeOutcome, ReportMerger};
pub use report::{BenchmarkReport, LeafPath, MetricRecord};
pub use summary::{MergeSummary, ReportSource};
