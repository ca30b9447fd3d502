//! Lab engine error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain or parse the lab catalog document.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no top-level `popups` object")]
    MissingPopups,

    #[error("catalog schema could not be compiled: {0}")]
    Schema(String),
}

/// Failure inside a registered computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("missing input '{0}'")]
    MissingInput(String),

    #[error("input '{id}' must be numeric, got '{value}'")]
    NotNumeric { id: String, value: String },

    #[error("input '{id}' is out of range: {reason}")]
    OutOfRange { id: String, reason: String },
}
