//! Benchmark report documents
//!
//! A report is kept as an owned JSON tree so every key, and every field this
//! tool does not interpret, serializes back in the order it was read. Typed
//! access goes through two routines shared by baseline and update reports:
//! [`BenchmarkReport::leaf_paths`] enumerates metric records and
//! [`BenchmarkReport::metric`] looks one up by path.

use serde::Serialize;
use serde_json::{Number, Value};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::metric::{kind, MetricRecord, RMS_KEY, TIME_KEY};
use super::path::{location, LeafPath};
use crate::error::MergeError;

/// Top-level key holding the stencil tree
pub const STENCILS_KEY: &str = "stencils";

/// Number of key levels between `stencils` and a metric record
const LEAF_DEPTH: usize = 6;

/// Level at which keys are filtered against the compared targets
const TARGET_DEPTH: usize = 1;

/// A parsed benchmark report
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    source: PathBuf,
    root: Value,
}

impl BenchmarkReport {
    /// Load a report file, returning it with the SHA-256 digest of its raw bytes
    pub fn load(path: &Path) -> Result<(Self, String), MergeError> {
        let bytes = fs::read(path).map_err(|e| MergeError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let root: Value = serde_json::from_slice(&bytes).map_err(|e| MergeError::Load {
            path: path.to_path_buf(),
            reason: format!("JSON parse error: {}", e),
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "loaded report");
        Ok((Self::from_value(path, root), digest))
    }

    /// Wrap an already-parsed document
    pub fn from_value(source: impl Into<PathBuf>, root: Value) -> Self {
        Self {
            source: source.into(),
            root,
        }
    }

    /// File the report was read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Enumerate every metric record whose target is one of `targets`.
    ///
    /// Keys at the target level that are not listed are skipped along with
    /// everything beneath them. Records come back in document order.
    pub fn leaf_paths(
        &self,
        targets: &[String],
    ) -> Result<Vec<(LeafPath, MetricRecord)>, MergeError> {
        let stencils = self.root.get(STENCILS_KEY).ok_or_else(|| {
            self.mismatch::<&str>(&[], format!("missing top-level key `{}`", STENCILS_KEY))
        })?;

        let mut leaves = Vec::new();
        let mut prefix = Vec::with_capacity(LEAF_DEPTH);
        self.collect(stencils, &mut prefix, targets, &mut leaves)?;
        Ok(leaves)
    }

    fn collect(
        &self,
        node: &Value,
        prefix: &mut Vec<String>,
        targets: &[String],
        leaves: &mut Vec<(LeafPath, MetricRecord)>,
    ) -> Result<(), MergeError> {
        if let Some(path) = LeafPath::from_keys(prefix) {
            let record = MetricRecord::from_value(node)
                .map_err(|reason| self.mismatch(&prefix[..], reason))?;
            leaves.push((path, record));
            return Ok(());
        }

        let map = node.as_object().ok_or_else(|| {
            self.mismatch(&prefix[..], format!("expected an object, found {}", kind(node)))
        })?;

        if prefix.len() == TARGET_DEPTH && !map.keys().any(|k| targets.contains(k)) {
            warn!(
                report = %self.source.display(),
                stencil = %prefix[0],
                "stencil has no compared targets"
            );
        }

        for (key, child) in map {
            if prefix.len() == TARGET_DEPTH && !targets.contains(key) {
                debug!(stencil = %prefix[0], target = %key, "skipping target");
                continue;
            }
            prefix.push(key.clone());
            self.collect(child, prefix, targets, leaves)?;
            prefix.pop();
        }

        Ok(())
    }

    /// Look up the metric record at `path`.
    ///
    /// A missing key at any level is a structure mismatch, never a skip.
    pub fn metric(&self, path: &LeafPath) -> Result<MetricRecord, MergeError> {
        let keys = path.keys();
        let mut node = self.root.get(STENCILS_KEY).ok_or_else(|| {
            self.mismatch::<&str>(&[], format!("missing top-level key `{}`", STENCILS_KEY))
        })?;

        for (depth, key) in keys.iter().enumerate() {
            let map = node.as_object().ok_or_else(|| {
                self.mismatch(&keys[..depth], format!("expected an object, found {}", kind(node)))
            })?;
            node = map
                .get(*key)
                .ok_or_else(|| self.mismatch(&keys[..depth], format!("missing key `{}`", key)))?;
        }

        MetricRecord::from_value(node).map_err(|reason| self.mismatch(&keys, reason))
    }

    /// Overwrite `time` and `rms` of the record at `path`, leaving its other fields alone
    pub fn set_metric(
        &mut self,
        path: &LeafPath,
        time: Number,
        rms: Number,
    ) -> Result<(), MergeError> {
        let Self { source, root } = self;
        let keys = path.keys();

        let mut node = root.get_mut(STENCILS_KEY);
        for key in keys {
            node = node.and_then(|n| n.get_mut(key));
        }

        let record = node
            .and_then(Value::as_object_mut)
            .ok_or_else(|| MergeError::StructureMismatch {
                document: source.clone(),
                location: location(&keys),
                reason: "metric record not found".to_string(),
            })?;

        record.insert(TIME_KEY.to_string(), Value::Number(time));
        record.insert(RMS_KEY.to_string(), Value::Number(rms));
        Ok(())
    }

    /// Pretty-print with 4-space indentation and `": "` after keys
    pub fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut ser)?;
        Ok(buf)
    }

    pub(crate) fn mismatch<S: AsRef<str>>(&self, keys: &[S], reason: String) -> MergeError {
        MergeError::StructureMismatch {
            document: self.source.clone(),
            location: location(keys),
            reason,
        }
    }
}
