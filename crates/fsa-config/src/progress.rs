//! Progress store configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn default_cache_ttl_ms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressConfig {
    /// How long a loaded or saved record is served from memory.
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
}

impl ProgressConfig {
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: default_cache_ttl_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttl_is_five_seconds() {
        assert_eq!(ProgressConfig::default().cache_ttl(), Duration::from_secs(5));
    }
}
