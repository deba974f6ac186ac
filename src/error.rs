// src/error.rs
use thiserror::Error;

/// Everything the scraping core can fail with.
///
/// Missing fields on a page are not errors (they become placeholders);
/// a missing listing container is, since the page is then not the kind
/// we expected at all.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },

    #[error("{page} page has no `{selector}` container; site format may have changed")]
    MissingContainer { page: &'static str, selector: String },

    #[error("cache entry `{key}` holds {found}, expected {expected}")]
    CacheKind {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("no geolocation API key configured (set MAPQUEST_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("{site} has no postal code to search around")]
    NoPostalCode { site: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
