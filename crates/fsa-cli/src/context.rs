use std::time::Duration;

use fsa_config::{CatalogLocation, FsaConfig};
use fsa_labs::{AnyCatalogSource, FileCatalogSource, HttpCatalogSource, PopupLabs};
use fsa_progress::{FileStore, ProgressManager};

/// Everything a command handler needs, built from the loaded config.
pub struct AppContext {
    pub config: FsaConfig,
}

impl AppContext {
    pub const fn new(config: FsaConfig) -> Self {
        Self { config }
    }

    /// Progress manager over the file store in `storage.dir`.
    pub fn progress(&self) -> ProgressManager<FileStore> {
        let store = FileStore::new(self.config.storage.dir.clone());
        ProgressManager::new(store)
            .with_namespace(&self.config.storage.namespace)
            .with_cache_ttl(self.config.progress.cache_ttl())
    }

    /// Lab engine reading the configured catalog file or URL.
    pub fn labs(&self) -> anyhow::Result<PopupLabs<AnyCatalogSource>> {
        let source: AnyCatalogSource = match self.config.labs.location() {
            CatalogLocation::File(path) => FileCatalogSource::new(path).into(),
            CatalogLocation::Url(url) => HttpCatalogSource::new(
                url,
                Duration::from_secs(self.config.labs.fetch_timeout_secs),
            )?
            .into(),
        };
        Ok(PopupLabs::new(source))
    }
}
