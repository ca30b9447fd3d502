//! Progress store error types.

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters the backend cannot represent.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// The backend refused the operation (quota, disabled storage, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Internal failure of a progress operation. Never crosses the public
/// [`ProgressManager`](crate::ProgressManager) API.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Module(#[from] fsa_core::CoreError),
}
