//! Benchmark report model
//!
//! Reports nest six levels of keys under `stencils`:
//! stencil → target → precision → standard → thread count → domain size,
//! ending in a metric record `{"time": .., "rms": .., ...}`.

mod document;
mod metric;
mod path;

pub use document::{BenchmarkReport, STENCILS_KEY};
pub use metric::{MetricRecord, RMS_KEY, TIME_KEY};
pub use path::LeafPath;
