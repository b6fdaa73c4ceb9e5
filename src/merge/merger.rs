//! Single-owner-wins merge of update reports into a baseline

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::outcome::{LeafUpdate, MergeOutcome};
use crate::config::MergeConfig;
use crate::error::MergeError;
use crate::report::BenchmarkReport;
use crate::summary::{MergeSummary, ReportSource};

/// Reports loaded for one merge run
#[derive(Debug, Clone)]
pub struct MergeInputs {
    pub baseline: BenchmarkReport,
    pub baseline_source: ReportSource,
    /// Update reports in command-line order
    pub updates: Vec<BenchmarkReport>,
    pub update_sources: Vec<ReportSource>,
}

/// Merges update reports into a baseline report.
///
/// A metric record is replaced when exactly one update report has a different
/// `time` for it. Two or more differing updates at the same record abort the
/// whole run; nothing is written unless every record merged cleanly.
#[derive(Debug, Clone, Default)]
pub struct ReportMerger {
    config: MergeConfig,
}

impl ReportMerger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Load the baseline, then each update report in order.
    ///
    /// An empty update list is rejected after the baseline is read and
    /// before any update file is touched.
    pub fn load(&self, baseline: &Path, updates: &[PathBuf]) -> Result<MergeInputs, MergeError> {
        let (baseline_report, digest) = BenchmarkReport::load(baseline)?;
        let baseline_source = ReportSource {
            path: baseline.to_path_buf(),
            digest,
        };

        if updates.is_empty() {
            return Err(MergeError::missing_updates());
        }

        let mut update_reports = Vec::with_capacity(updates.len());
        let mut update_sources = Vec::with_capacity(updates.len());
        for path in updates {
            let (report, digest) = BenchmarkReport::load(path)?;
            update_reports.push(report);
            update_sources.push(ReportSource {
                path: path.clone(),
                digest,
            });
        }

        Ok(MergeInputs {
            baseline: baseline_report,
            baseline_source,
            updates: update_reports,
            update_sources,
        })
    }

    /// Merge in memory. The inputs are only read; the result is a deep copy.
    pub fn merge(&self, inputs: &MergeInputs) -> Result<MergeOutcome, MergeError> {
        let mut merged = inputs.baseline.clone();
        let leaves = inputs.baseline.leaf_paths(&self.config.targets)?;
        let mut applied = Vec::new();

        for (path, reference) in &leaves {
            let mut winner: Option<LeafUpdate> = None;

            for (index, update) in inputs.updates.iter().enumerate() {
                let candidate = update.metric(path)?;
                let rms = candidate.rms.clone().ok_or_else(|| {
                    update.mismatch(&path.keys(), "missing numeric `rms`".to_string())
                })?;

                if !candidate.time_differs(reference) {
                    continue;
                }

                if let Some(first) = &winner {
                    return Err(MergeError::Conflict {
                        path: path.clone(),
                        first: first.source.clone(),
                        second: update.source().to_path_buf(),
                    });
                }

                winner = Some(LeafUpdate {
                    path: path.clone(),
                    update_index: index,
                    source: update.source().to_path_buf(),
                    time: candidate.time,
                    rms,
                });
            }

            match winner {
                Some(update) => {
                    info!(
                        path = %update.path,
                        report = %update.source.display(),
                        time = %update.time,
                        "applying update"
                    );
                    merged.set_metric(&update.path, update.time.clone(), update.rms.clone())?;
                    applied.push(update);
                }
                None => debug!(path = %path, "unchanged"),
            }
        }

        Ok(MergeOutcome {
            merged,
            updates: applied,
            leaves_compared: leaves.len(),
        })
    }

    /// Write the merged report, replacing any previous output atomically
    pub fn write(&self, outcome: &MergeOutcome) -> Result<PathBuf, MergeError> {
        let path = self.config.output_path();
        let write_error = |reason: String| MergeError::Write {
            path: path.clone(),
            reason,
        };

        let json = outcome
            .merged
            .to_pretty_json()
            .map_err(|e| write_error(format!("JSON serialization failed: {}", e)))?;

        // Uniquely named temp file next to the output; dropped (and removed) on failure
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(&json).map_err(|e| write_error(e.to_string()))?;
        temp.persist(&path).map_err(|e| write_error(e.error.to_string()))?;

        debug!(path = %path.display(), bytes = json.len(), "wrote merged report");
        Ok(path)
    }

    /// Load, merge and write in one step
    pub fn run(&self, baseline: &Path, updates: &[PathBuf]) -> Result<MergeSummary, MergeError> {
        let inputs = self.load(baseline, updates)?;
        let outcome = self.merge(&inputs)?;
        let output = self.write(&outcome)?;
        Ok(MergeSummary::new(&inputs, &outcome, output))
    }
}
