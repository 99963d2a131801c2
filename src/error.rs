//! Error types shared by the serializers, exporters and the application driver.

use std::path::PathBuf;
use thiserror::Error;

/// A target path a handler refused to use.
///
/// These are soft failures: handlers log them as warnings and return `Ok(None)`
/// instead of propagating them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathValidationError {
    #[error("no file path received, please provide a correct file path")]
    Missing,
    #[error("invalid file type {path:?}, please provide a file path with \"{expected}\" file format")]
    WrongExtension { path: PathBuf, expected: String },
    #[error("file not found: {0:?}")]
    NotFound(PathBuf),
}

/// Failures raised while reading, writing or converting record data.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that abort a run of the application.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("unknown format {name:?}, supported formats are: {supported}")]
    UnknownFormat { name: String, supported: String },
    #[error("{format} round-trip produced different records than were written to {path:?}")]
    RoundTripMismatch { format: &'static str, path: PathBuf },
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl RunError {
    /// Process exit code for this error.
    ///
    /// * `1` - invalid user input (missing fields, unknown format)
    /// * `2` - I/O or encoding failure
    /// * `3` - decoded data did not match what was encoded
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Validation(_) | RunError::UnknownFormat { .. } => 1,
            RunError::Format(_) => 2,
            RunError::RoundTripMismatch { .. } => 3,
        }
    }
}
