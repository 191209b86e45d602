//! Page fetching and article text extraction
//!
//! [`HttpFetcher`] performs a single blocking GET with a timeout;
//! [`extract::ParagraphExtractor`] pulls the text of `<p>` elements out of
//! the returned HTML.

pub mod extract;

use crate::errors::{Result, SummarizeError};
use crate::pipeline::traits::PageFetcher;
use crate::types::DEFAULT_FETCH_TIMEOUT_SECS;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("news-textrank/", env!("CARGO_PKG_VERSION"));

/// Parse an article URL; only http and https can be fetched
pub fn parse_article_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SummarizeError::UnsupportedScheme(other.to_string())),
    }
}

/// Blocking HTTP fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Fetcher with the default 15 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))
    }

    /// Fetcher with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(SummarizeError::HttpClient)?;
        Ok(Self { client, timeout })
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        tracing::info!(%url, timeout_secs = self.timeout.as_secs(), "fetching article");

        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SummarizeError::fetch(url.as_str(), e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SummarizeError::fetch(url.as_str(), e))?;

        tracing::debug!(%status, bytes = body.len(), "fetched article");
        Ok(body)
    }
}
