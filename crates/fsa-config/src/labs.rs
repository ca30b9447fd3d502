//! Popup lab catalog configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_catalog() -> String {
    "data/popups.json".to_string()
}

const fn default_fetch_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabsConfig {
    /// File path or `http(s)://` URL of the catalog JSON document.
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Timeout for fetching a remote catalog.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// Where the catalog lives, decided from the configured string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    File(PathBuf),
    Url(String),
}

impl LabsConfig {
    #[must_use]
    pub fn location(&self) -> CatalogLocation {
        let catalog = self.catalog.trim();
        if catalog.starts_with("http://") || catalog.starts_with("https://") {
            CatalogLocation::Url(catalog.to_string())
        } else {
            CatalogLocation::File(PathBuf::from(catalog))
        }
    }
}

impl Default for LabsConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_detects_urls() {
        let config = LabsConfig {
            catalog: "https://example.org/data/popups.json".into(),
            ..LabsConfig::default()
        };
        assert_eq!(
            config.location(),
            CatalogLocation::Url("https://example.org/data/popups.json".into())
        );
    }

    #[test]
    fn location_defaults_to_file() {
        assert_eq!(
            LabsConfig::default().location(),
            CatalogLocation::File(PathBuf::from("data/popups.json"))
        );
    }
}
