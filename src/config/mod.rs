//! Merge configuration
//!
//! Only built-in defaults exist: the output location and the compared targets
//! are fixed for the command-line tool.

mod defaults;

pub use defaults::{MergeConfig, COMPARED_TARGETS, MERGED_FILENAME};
