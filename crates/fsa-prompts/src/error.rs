use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Module(#[from] fsa_core::CoreError),
}
