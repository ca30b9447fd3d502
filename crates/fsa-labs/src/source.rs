//! Where the catalog document comes from.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::LabError;

/// Default timeout of [`HttpCatalogSource`].
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Produces the raw catalog document.
pub trait CatalogSource {
    /// Fetch the whole document as text.
    ///
    /// # Errors
    ///
    /// Returns [`LabError`] when the document cannot be obtained.
    fn fetch(&self) -> impl Future<Output = Result<String, LabError>> + Send;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Catalog read from a local file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<String, LabError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LabError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog fetched over HTTP. Non-success statuses are errors.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
    http: reqwest::Client,
}

impl HttpCatalogSource {
    /// # Errors
    ///
    /// Returns [`LabError::Http`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LabError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fsa/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<String, LabError> {
        let resp = self.http.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(LabError::Status {
                url: self.url.clone(),
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Catalog held in memory.
#[derive(Debug, Clone)]
pub struct InlineCatalogSource {
    document: String,
}

impl InlineCatalogSource {
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl CatalogSource for InlineCatalogSource {
    async fn fetch(&self) -> Result<String, LabError> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "inline".to_string()
    }
}

/// Any of the built-in sources, chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyCatalogSource {
    File(FileCatalogSource),
    Http(HttpCatalogSource),
    Inline(InlineCatalogSource),
}

impl CatalogSource for AnyCatalogSource {
    async fn fetch(&self) -> Result<String, LabError> {
        match self {
            Self::File(source) => source.fetch().await,
            Self::Http(source) => source.fetch().await,
            Self::Inline(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(source) => source.describe(),
            Self::Http(source) => source.describe(),
            Self::Inline(source) => source.describe(),
        }
    }
}

impl From<FileCatalogSource> for AnyCatalogSource {
    fn from(source: FileCatalogSource) -> Self {
        Self::File(source)
    }
}

impl From<HttpCatalogSource> for AnyCatalogSource {
    fn from(source: HttpCatalogSource) -> Self {
        Self::Http(source)
    }
}

impl From<InlineCatalogSource> for AnyCatalogSource {
    fn from(source: InlineCatalogSource) -> Self {
        Self::Inline(source)
    }
}
