//! Error types for the exporters
//!
//! Every failure an export can hit is surfaced to the caller; nothing is
//! swallowed or turned into a partially written file.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for shape export operations
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid export options: {0}")]
    Config(String),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Helper to convert serde_json errors
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Config(err.to_string())
    }
}
