//! Conversion error types.
//!
//! Structured errors for rendering, writing, and re-reading zone documents.
//! File-level errors carry the path involved.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a zone record to a document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The rendered JSON was not valid UTF-8.
    #[error("rendered document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Reading or writing a document file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A written document did not parse back.
    #[error("verification of {path} failed: {detail}")]
    Verification { path: PathBuf, detail: String },
}

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
