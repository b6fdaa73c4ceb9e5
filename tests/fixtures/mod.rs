//! Report fixtures shared by the integration tests
//!
//! `reports/stencils.json` is the baseline. Relative to it:
//! - `update1.json` changes nothing compared (only `meta` and `2` → `2.0`)
//! - `update2.json` changes heat/cpu/double/std1/t4/d128 and drops `meta`
//! - `update3.json` changes wave/cpu/float/std2/t8/d64 and drops `meta`
//! - `update_conflict.json` changes heat/cpu/double/std1/t4/d128 differently
//! - `update_missing.json` lacks the `wave` stencil

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Path to a report fixture
pub fn report_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/reports")
        .join(name)
}

/// Path to the baseline report
pub fn baseline_path() -> PathBuf {
    report_path("stencils.json")
}

/// Paths to several update fixtures, in order
pub fn update_paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|name| report_path(name)).collect()
}

/// Parse a JSON file
pub fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("read fixture");
    serde_json::from_str(&text).expect("parse fixture")
}
