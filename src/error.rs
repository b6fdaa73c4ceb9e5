//! Failure taxonomy and stable exit codes for a merge run

use std::path::PathBuf;

use crate::report::LeafPath;

/// Errors that abort a merge run
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    #[error("Structure mismatch in {} at {location}: {reason}", .document.display())]
    StructureMismatch {
        document: PathBuf,
        location: String,
        reason: String,
    },

    #[error(
        "Multiple update reports modify the same token of metrics at {path}: {} and {}",
        .first.display(),
        .second.display()
    )]
    Conflict {
        path: LeafPath,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

impl MergeError {
    /// Usage error raised when no update reports were given
    pub fn missing_updates() -> Self {
        MergeError::Usage(
            "Need to provide at least one update json report with --updates".to_string(),
        )
    }

    /// Categorize this error
    pub fn kind(&self) -> FailureKind {
        match self {
            MergeError::Usage(_) => FailureKind::Usage,
            MergeError::Load { .. } => FailureKind::Load,
            MergeError::StructureMismatch { .. } => FailureKind::StructureMismatch,
            MergeError::Conflict { .. } => FailureKind::Conflict,
            MergeError::Write { .. } => FailureKind::Write,
        }
    }

    /// Stable process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        self.kind().exit_code()
    }
}

/// Failure kind - categorizes the cause of an aborted run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing or malformed command-line input
    Usage,
    /// Report file missing or not valid JSON
    Load,
    /// Update report lacks a key path present in the baseline
    StructureMismatch,
    /// Two or more updates modify the same leaf
    Conflict,
    /// Merged report could not be written
    Write,
}

impl FailureKind {
    /// Get the stable exit code for this failure kind
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FailureKind::Usage => ExitCode::Usage,
            FailureKind::Load => ExitCode::Load,
            FailureKind::StructureMismatch => ExitCode::StructureMismatch,
            FailureKind::Conflict => ExitCode::Conflict,
            FailureKind::Write => ExitCode::Write,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            FailureKind::Usage => "Invalid invocation",
            FailureKind::Load => "Report could not be loaded",
            FailureKind::StructureMismatch => "Report structure does not match the baseline",
            FailureKind::Conflict => "Conflicting update reports",
            FailureKind::Write => "Merged report could not be written",
        }
    }
}

/// Stable exit codes for the `merge-updates` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Merged report written
    Success = 0,
    /// Usage error (matches clap's own exit code)
    Usage = 2,
    /// Load failure
    Load = 3,
    /// Structure mismatch
    StructureMismatch = 4,
    /// Conflicting updates
    Conflict = 5,
    /// Output write failure
    Write = 6,
}

impl ExitCode {
    /// Get the integer value of the exit code
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Create from integer value
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(ExitCode::Success),
            2 => Some(ExitCode::Usage),
            3 => Some(ExitCode::Load),
            4 => Some(ExitCode::StructureMismatch),
            5 => Some(ExitCode::Conflict),
            6 => Some(ExitCode::Write),
            _ => None,
        }
    }
}
