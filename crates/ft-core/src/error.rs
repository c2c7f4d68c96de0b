//! Error types for fortune lookups.

use std::path::PathBuf;

use thiserror::Error;

/// Message shown to the user for any number that cannot be resolved.
pub const OUT_OF_RANGE_MESSAGE: &str = "Number out of range (0-9999)";

/// Result type for fortune operations.
pub type FortuneResult<T> = Result<T, FortuneError>;

/// Errors that can occur while loading tables or resolving a fortune.
#[derive(Debug, Error)]
pub enum FortuneError {
    /// A table file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the table file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A table file is not a valid array of records.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path of the table file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The input could not be resolved to a fortune.
    ///
    /// Bad numbers and inconsistent tables are reported the same way; the
    /// carried input is kept for logging only.
    #[error("Number out of range (0-9999)")]
    NotFound(String),

    /// Unknown session command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl FortuneError {
    /// Whether this error is a failed lookup (as opposed to a load failure).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
