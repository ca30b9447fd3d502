//! Cross-cutting error types.
//!
//! Domain-specific errors (`StorageError`, `LabError`, ...) live in their own
//! crates. `CoreError` covers failures that any of them can surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A module id outside the fixed 1..=10 range.
    #[error("Unknown module id: {0}")]
    UnknownModule(u32),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
