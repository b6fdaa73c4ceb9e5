//! Merge summary with input provenance

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::merge::{LeafUpdate, MergeInputs, MergeOutcome};

/// Schema version for the merge summary
pub const MERGE_SUMMARY_SCHEMA_VERSION: u32 = 1;

/// Schema identifier for the merge summary
pub const MERGE_SUMMARY_SCHEMA_ID: &str = "stencil-report-merge/merge_summary@1";

/// A report that contributed to a merge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSource {
    /// File path as given on the command line
    pub path: PathBuf,

    /// SHA-256 digest of raw file bytes
    pub digest: String,
}

/// Summary of a completed merge run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSummary {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When the summary was created
    pub created_at: DateTime<Utc>,

    /// Baseline report
    pub baseline: ReportSource,

    /// Update reports in command-line order
    pub updates: Vec<ReportSource>,

    /// Metric records compared
    pub leaves_compared: usize,

    /// Metric records replaced
    pub leaves_updated: usize,

    /// Replaced records in traversal order
    pub applied: Vec<LeafUpdate>,

    /// Where the merged report was written
    pub output: PathBuf,

    /// Human-readable summary
    pub human_summary: String,
}

impl MergeSummary {
    /// Summarize a merge whose result was written to `output`
    pub fn new(inputs: &MergeInputs, outcome: &MergeOutcome, output: PathBuf) -> Self {
        let leaves_updated = outcome.updates.len();
        let human_summary = Self::generate_human_summary(
            leaves_updated,
            outcome.leaves_compared,
            inputs.update_sources.len(),
        );

        Self {
            schema_version: MERGE_SUMMARY_SCHEMA_VERSION,
            schema_id: MERGE_SUMMARY_SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            baseline: inputs.baseline_source.clone(),
            updates: inputs.update_sources.clone(),
            leaves_compared: outcome.leaves_compared,
            leaves_updated,
            applied: outcome.updates.clone(),
            output,
            human_summary,
        }
    }

    fn generate_human_summary(updated: usize, compared: usize, reports: usize) -> String {
        let noun = if reports == 1 { "report" } else { "reports" };
        if updated == 0 {
            format!("No changes: {} leaves unchanged across {} update {}", compared, reports, noun)
        } else {
            format!("{} of {} leaves updated from {} update {}", updated, compared, reports, noun)
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
