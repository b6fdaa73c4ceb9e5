//! Built-in merge defaults
//!
//! Nothing on the command line or in the environment overrides these; the
//! library takes a [`MergeConfig`] so tests can redirect the output.

use std::path::{Path, PathBuf};

/// File name of the merged report
pub const MERGED_FILENAME: &str = "stencils.json.merge";

/// Targets whose metrics are compared; other target keys pass through untouched
pub const COMPARED_TARGETS: &[&str] = &["cpu", "gpu"];

/// Merge configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MergeConfig {
    /// Directory the merged report is written into (default: working directory)
    pub output_dir: PathBuf,

    /// File name of the merged report (default: "stencils.json.merge")
    pub output_name: String,

    /// Second-level keys treated as targets (default: cpu, gpu)
    pub targets: Vec<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::new(),
            output_name: MERGED_FILENAME.to_string(),
            targets: COMPARED_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl MergeConfig {
    /// Defaults, writing into `dir` instead of the working directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Full path of the merged report
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }
}
