//! Six-level coordinates of a metric record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Full key tuple identifying one metric record under `stencils`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeafPath {
    pub stencil: String,
    pub target: String,
    pub precision: String,
    pub standard: String,
    pub thread: String,
    pub domain: String,
}

impl LeafPath {
    pub fn new(
        stencil: impl Into<String>,
        target: impl Into<String>,
        precision: impl Into<String>,
        standard: impl Into<String>,
        thread: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            stencil: stencil.into(),
            target: target.into(),
            precision: precision.into(),
            standard: standard.into(),
            thread: thread.into(),
            domain: domain.into(),
        }
    }

    /// Build a path from exactly six keys
    pub(crate) fn from_keys(keys: &[String]) -> Option<Self> {
        match keys {
            [stencil, target, precision, standard, thread, domain] => Some(Self::new(
                stencil.as_str(),
                target.as_str(),
                precision.as_str(),
                standard.as_str(),
                thread.as_str(),
                domain.as_str(),
            )),
            _ => None,
        }
    }

    /// Keys in traversal order, outermost first
    pub fn keys(&self) -> [&str; 6] {
        [
            &self.stencil,
            &self.target,
            &self.precision,
            &self.standard,
            &self.thread,
            &self.domain,
        ]
    }
}

impl fmt::Display for LeafPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys().join(","))
    }
}

/// Render a key prefix as a dotted location under `stencils`
pub(crate) fn location<S: AsRef<str>>(keys: &[S]) -> String {
    let mut out = String::from("stencils");
    for key in keys {
        out.push('.');
        out.push_str(key.as_ref());
    }
    out
}
