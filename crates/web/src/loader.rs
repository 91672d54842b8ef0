//! Catalog loading from HTTP or the local filesystem.

use std::future::Future;

use thiserror::Error;

use cardcompare_core::CatalogError;
use cardcompare_products::{Catalog, CatalogDocument};

/// Why the catalog could not be loaded.
///
/// The `Display` text is shown to the user after "Could not load data.".
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid data address: {0}")]
    Address(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("Failed to load card data (HTTP {0})")]
    Status(u16),
    #[error("card data is not valid JSON: {0}")]
    Decode(String),
    #[error("could not read card data: {0}")]
    Io(String),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err.to_string())
    }
}

/// Somewhere a catalog document can be read from.
pub trait DataSource {
    /// Human-readable location, for logs.
    fn location(&self) -> &str;

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>>;
}

/// Resolve a data source against the page it is served from.
///
/// Relative sources (`./data/cards.json`) land next to the page; absolute
/// URLs are returned as given.
pub fn resolve_data_url(page: &str, source: &str) -> Result<String, LoadError> {
    let base = url::Url::parse(page).map_err(|e| LoadError::Address(format!("{page}: {e}")))?;
    let url = base
        .join(source)
        .map_err(|e| LoadError::Address(format!("{source}: {e}")))?;
    Ok(url.into())
}

/// Single GET of a catalog document.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl DataSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(LoadError::Status(resp.status().as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        Ok(body.to_vec())
    }
}

/// Catalog document on local disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: std::path::PathBuf,
    display: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DataSource for FileSource {
    fn location(&self) -> &str {
        &self.display
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Io(format!("{}: {e}", self.display)))
    }
}

/// Fetch, decode and validate a catalog. One attempt, no retry.
pub async fn load_catalog<S: DataSource>(source: &S) -> Result<Catalog, LoadError> {
    tracing::info!(source = source.location(), "loading catalog");
    let bytes = source.fetch().await?;
    let document = CatalogDocument::from_json(&bytes)?;
    let catalog = Catalog::from_document(document)?;
    Ok(catalog)
}
