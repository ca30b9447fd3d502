//! Durable key-value storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_dir() -> PathBuf {
    PathBuf::from(".fsa/storage")
}

fn default_namespace() -> String {
    "fsa".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory backing the file store (one file per key).
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Prefix of every storage key (`<namespace>-progress`, ...).
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            namespace: default_namespace(),
        }
    }
}
