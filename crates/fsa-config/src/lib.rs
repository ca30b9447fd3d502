//! # fsa-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FSA_*` prefix, `__` as separator)
//! 2. Project-level `.fsa/config.toml`
//! 3. User-level `~/.config/fsa/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FSA_STORAGE__DIR` -> `storage.dir`,
//! `FSA_PROGRESS__CACHE_TTL_MS` -> `progress.cache_ttl_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fsa_config::FsaConfig;
//!
//! let config = FsaConfig::load_with_dotenv().expect("config");
//! println!("catalog: {}", config.labs.catalog);
//! ```

mod error;
mod labs;
mod progress;
mod prompts;
mod storage;

pub use error::ConfigError;
pub use labs::{CatalogLocation, LabsConfig};
pub use progress::ProgressConfig;
pub use prompts::PromptsConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FsaConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub labs: LabsConfig,
    #[serde(default)]
    pub prompts: PromptsConfig,
}

impl FsaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".fsa/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("FSA_").split("__"))
    }

    /// Reject values that would break the runtime invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a storage namespace that is
    /// empty or cannot form a store key, a zero cache TTL, or a blank
    /// catalog location.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.namespace.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.namespace".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.storage.namespace.starts_with('.')
            || !self
                .storage
                .namespace
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
        {
            return Err(ConfigError::InvalidValue {
                field: "storage.namespace".into(),
                reason: "may only use ASCII letters, digits, '-', '_' and '.', and must not start with '.'"
                    .into(),
            });
        }
        if self.progress.cache_ttl_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "progress.cache_ttl_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.labs.catalog.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "labs.catalog".into(),
                reason: "must name a file or URL".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fsa").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FsaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.namespace, "fsa");
        assert_eq!(config.progress.cache_ttl_ms, 5_000);
    }

    #[test]
    fn figment_builds_without_files() {
        let config: FsaConfig = FsaConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.labs.catalog, "data/popups.json");
    }

    #[test]
    fn validate_rejects_empty_namespace() {
        let mut config = FsaConfig::default();
        config.storage.namespace = "  ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "storage.namespace"
        ));
    }

    #[test]
    fn validate_rejects_namespace_outside_key_charset() {
        for namespace in ["my academy", ".hidden", "fsa/progress", "caf\u{e9}"] {
            let mut config = FsaConfig::default();
            config.storage.namespace = namespace.into();
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidValue { field, .. }) if field == "storage.namespace"
                ),
                "{namespace:?} should be rejected"
            );
        }

        let mut config = FsaConfig::default();
        config.storage.namespace = "my-academy_1.v2".into();
        assert!(config.validate().is_ok());
    }
}
