//! Result of merging update reports into a baseline

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::path::PathBuf;

use crate::report::{BenchmarkReport, LeafPath};

/// A metric record replaced by the single update report that changed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafUpdate {
    /// Coordinates of the replaced record
    pub path: LeafPath,

    /// Position of the update report on the command line (0-based)
    pub update_index: usize,

    /// Update report that supplied the new values
    pub source: PathBuf,

    /// New `time`
    pub time: Number,

    /// New `rms`
    pub rms: Number,
}

impl fmt::Display for LeafUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found update for :{} in report {}",
            self.path,
            self.source.display()
        )
    }
}

/// Merged report plus the list of records that changed
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Deep copy of the baseline with updates applied
    pub merged: BenchmarkReport,

    /// Applied updates in traversal order
    pub updates: Vec<LeafUpdate>,

    /// Number of metric records compared
    pub leaves_compared: usize,
}

impl MergeOutcome {
    /// True when no update changed any record
    pub fn is_unchanged(&self) -> bool {
        self.updates.is_empty()
    }
}
