//! Error types for news_textrank

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Everything that can go wrong between a URL and a rendered chart.
///
/// Empty articles are not errors: they flow through the pipeline and produce
/// an empty summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The article URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but cannot be fetched over HTTP
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),

    /// The HTTP request failed, timed out, or returned a non-2xx status
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Writing the chart failed
    #[error("failed to render chart: {0}")]
    Render(#[from] std::io::Error),

    /// Encoding the summary as JSON failed
    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SummarizeError {
    /// Create an invalid-configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SummarizeError::InvalidConfig(message.into())
    }

    /// Create a fetch error for the given URL
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        SummarizeError::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Whether the error comes from bad user input rather than a runtime failure
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            SummarizeError::InvalidUrl(_) | SummarizeError::UnsupportedScheme(_)
        )
    }
}
