//! Prompt builder output configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_out_dir() -> PathBuf {
    PathBuf::from("mcp/prompts")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromptsConfig {
    /// Directory receiving the generated `<name>.txt` prompt files.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}
