//! Page retrieval
//!
//! Design: fetching sits behind the [`Fetcher`] trait so the scrape
//! operations can run against any source of HTML. [`HttpFetcher`] is the
//! reqwest-backed implementation used by default.

use crate::error::FetchError;
use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// Default fetch timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Binary content type prefixes
const BINARY_PREFIXES: &[&str] = &[
    "image/",
    "audio/",
    "video/",
    "application/octet-stream",
    "application/pdf",
    "application/zip",
    "application/gzip",
    "application/x-tar",
    "application/x-rar",
    "application/x-7z",
    "application/vnd.ms-",
    "application/vnd.openxmlformats",
    "font/",
];

/// Accept header sent with every request
const ACCEPT_HTML: &str = "text/html, application/xhtml+xml, */*;q=0.8";

/// Options for a single fetch
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Upper bound on the whole fetch: connect, status and body
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Source of HTML documents
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Identifier for logging
    fn name(&self) -> &'static str;

    /// Retrieve the document at `url` as text
    ///
    /// Fails with [`FetchError`] on invalid URLs, connection failures,
    /// timeouts and non-2xx statuses; never returns partial content.
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<String, FetchError>;
}

/// HTTP/HTTPS fetcher
pub struct HttpFetcher;

impl HttpFetcher {
    /// Create a new HTTP fetcher
    pub fn new() -> Self {
        Self
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<String, FetchError> {
        validate_url(url)?;

        // Build headers
        let mut headers = HeaderMap::new();
        let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()
            .map_err(FetchError::ClientBuildError)?;

        let timeout = options.timeout;
        debug!(url, timeout_secs = timeout.as_secs_f64(), "Fetching page");

        let request = async {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::from_reqwest(e, timeout))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus(status.as_u16()));
            }

            if let Some(ct) = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
            {
                if is_binary_content_type(ct) {
                    return Err(FetchError::UnsupportedContentType(ct.to_string()));
                }
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::from_reqwest(e, timeout))
        };

        let body = tokio::time::timeout(timeout, request)
            .await
            .map_err(|_| FetchError::Timeout(timeout))??;

        debug!(url, size = body.len(), "Fetched page");
        Ok(body)
    }
}

/// Reject empty, unparsable and non-HTTP URLs before any network activity
///
/// The scheme is matched case-insensitively, so `HTTPS://host` is accepted.
pub(crate) fn validate_url(url: &str) -> Result<(), FetchError> {
    if url.is_empty() {
        return Err(FetchError::MissingUrl);
    }
    let parsed = url::Url::parse(url).map_err(FetchError::InvalidUrl)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrlScheme);
    }
    Ok(())
}

/// Check if content type indicates binary content
fn is_binary_content_type(content_type: &str) -> bool {
    let ct_lower = content_type.to_lowercase();
    BINARY_PREFIXES
        .iter()
        .any(|prefix| ct_lower.starts_with(prefix))
}
