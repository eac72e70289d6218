//! Index sources: where the raw `search-index.json` bytes come from.
//!
//! A source knows how to fetch and parse the payload once; the load-once
//! lifecycle (dedup, fail-silent degradation) lives in
//! [`IndexLoader`](crate::loader::IndexLoader).

use std::future::Future;
use std::path::PathBuf;

use quickdex_core::{ParseError, SearchIndex};
use reqwest::header::CACHE_CONTROL;

/// Why a fetch could not produce an index.
///
/// The loader logs these and degrades to an empty index; nothing downstream
/// renders them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid index url {0:?}")]
    Url(String),
    #[error("index request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("index request returned status {0}")]
    Status(u16),
    #[error("failed to read index file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// One place a search index can be fetched from.
pub trait IndexSource: Send + Sync + 'static {
    /// Fetch and parse the full index. The loader calls this at most once per
    /// process, however many times the UI asks.
    fn fetch(&self) -> impl Future<Output = Result<SearchIndex, LoadError>> + Send;
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// Fetches the index over http(s).
pub struct HttpSource {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, LoadError> {
        let url = reqwest::Url::parse(url).map_err(|_| LoadError::Url(url.to_string()))?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("quickdex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

impl IndexSource for HttpSource {
    async fn fetch(&self) -> Result<SearchIndex, LoadError> {
        let response = self
            .client
            .get(self.url.clone())
            // The catalog changes rarely; a day-old cached copy is fine.
            .header(CACHE_CONTROL, "max-stale=86400")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(SearchIndex::from_json_bytes(&body)?)
    }
}

// ---------------------------------------------------------------------------
// Local file
// ---------------------------------------------------------------------------

/// Reads the index from a local JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IndexSource for FileSource {
    async fn fetch(&self) -> Result<SearchIndex, LoadError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(SearchIndex::from_json_bytes(&bytes)?)
    }
}

// ---------------------------------------------------------------------------
// URL resolution
// ---------------------------------------------------------------------------

/// Resolve an entry's (possibly site-relative) URL against the index
/// location.
///
/// Catalog entries routinely carry hrefs like `/bmi` or `bmi.html`; opening
/// them needs an absolute URL. Anything that cannot be resolved (no usable
/// base, such as a local file path) passes through unchanged.
pub fn resolve_url(index_location: &str, href: &str) -> String {
    match reqwest::Url::parse(index_location).and_then(|base| base.join(href)) {
        Ok(resolved) => resolved.into(),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_hrefs_against_the_index_url() {
        let base = "https://example.com/assets/search-index.json";
        assert_eq!(resolve_url(base, "/bmi"), "https://example.com/bmi");
        assert_eq!(
            resolve_url(base, "loan.html"),
            "https://example.com/assets/loan.html"
        );
    }

    #[test]
    fn absolute_hrefs_win_over_the_base() {
        assert_eq!(
            resolve_url("https://example.com/search-index.json", "https://other.dev/x"),
            "https://other.dev/x"
        );
    }

    #[test]
    fn file_path_bases_pass_hrefs_through() {
        assert_eq!(resolve_url("/tmp/index.json", "/bmi"), "/bmi");
        assert_eq!(resolve_url("", "relative.html"), "relative.html");
    }

    #[test]
    fn http_source_rejects_garbage_urls() {
        assert!(matches!(
            HttpSource::new("not a url"),
            Err(LoadError::Url(_))
        ));
    }
}
