//! Where the GeoJSON document comes from.
//!
//! A source is fetched exactly once per bootstrap. There is no retry and no
//! cancellation; a failed fetch becomes a [`LoadError`].

use std::future::Future;
use std::path::PathBuf;

use reqwest::Url;
use tracing::debug;

use super::LoadError;

/// One-shot provider of the raw GeoJSON text.
pub trait GeoJsonSource {
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;

    /// Retrieves the document text.
    fn fetch(&self) -> impl Future<Output = Result<String, LoadError>> + Send;
}

/// Document on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GeoJsonSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        debug!(path = %self.path.display(), "reading GeoJSON file");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Document served over HTTP(S).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    url: Url,
}

impl HttpSource {
    /// Creates an HTTP source.
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

impl GeoJsonSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        debug!(url = %self.url, "requesting GeoJSON document");
        let http_error = |source| LoadError::Http {
            url: self.url.to_string(),
            source,
        };

        let response = reqwest::get(self.url.clone()).await.map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(http_error)
    }
}

/// Document already held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    /// Wraps document text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl GeoJsonSource for InlineSource {
    fn describe(&self) -> String {
        "<inline>".to_string()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.text.clone())
    }
}

/// Source chosen from a configured location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Local file path.
    File(FileSource),
    /// `http://` or `https://` URL.
    Http(HttpSource),
}

impl SourceLocation {
    /// Picks HTTP for `http(s)://` locations and the filesystem otherwise.
    pub fn parse(location: &str) -> Result<Self, LoadError> {
        let location = location.trim();
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(location).map_err(|e| LoadError::InvalidLocation {
                location: location.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Self::Http(HttpSource::new(url)))
        } else {
            Ok(Self::File(FileSource::new(location)))
        }
    }
}

impl GeoJsonSource for SourceLocation {
    fn describe(&self) -> String {
        match self {
            Self::File(source) => source.describe(),
            Self::Http(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        match self {
            Self::File(source) => source.fetch().await,
            Self::Http(source) => source.fetch().await,
        }
    }
}
