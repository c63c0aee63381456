//! Error types and handling for the cleanup pipelines
//! Author: kartik4091
//!
//! Every variant is scoped to a single input file. The batch driver in
//! `pipeline` catches them, records them in the report and moves on.

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for cleanup operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for cleanup operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("No such file or directory '{}'", .0.display())]
    InputNotFound(PathBuf),

    #[error("'{}' is not a valid container: {reason}", .path.display())]
    NotAContainer { path: PathBuf, reason: String },

    #[error("'{}' has no '{member}' member", .path.display())]
    MissingRequiredMember { path: PathBuf, member: String },

    #[error("'{}' already exists", .0.display())]
    DestinationExists(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed content: {0}")]
    MalformedContent(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Archive error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    #[error("Wave error: {0}")]
    WaveError(#[from] hound::Error),

    #[error("Failed to write '{}': {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },

    #[error(
        "Failed to move '{}' to '{}': {reason}; the cleaned file was left at '{}'",
        .temp.display(), .path.display(), .temp.display()
    )]
    ReplaceFailure { path: PathBuf, temp: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl Error {
    /// Wraps any displayable failure raised while producing output
    pub fn write_failure(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::WriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Raised when the finished output could not be moved over its destination.
    /// By then the original may already be in the trash.
    pub fn replace_failure(path: impl Into<PathBuf>, temp: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::ReplaceFailure {
            path: path.into(),
            temp: temp.into(),
            reason: reason.to_string(),
        }
    }

    /// Failures that happened after the source was read but before it was replaced.
    /// The original file is guaranteed untouched for these.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Error::WriteFailure { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}
