//! Error types for ScrapeKit

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while retrieving a page
///
/// Every variant is terminal for the operation that produced it: no partial
/// or degraded HTML is handed to the extractors.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL is missing
    #[error("Missing required parameter: url")]
    MissingUrl,

    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// URL does not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[source] url::ParseError),

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// The fetch did not complete within the configured timeout
    #[error("Request timed out after {} seconds", .0.as_secs_f64())]
    Timeout(Duration),

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    ConnectError(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    /// Server answered with content that is not a document
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// Other request error
    #[error("Request failed: {0}")]
    RequestError(String),
}

impl FetchError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout)
        } else if err.is_connect() {
            FetchError::ConnectError(err)
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus(status.as_u16())
        } else {
            FetchError::RequestError(err.to_string())
        }
    }
}

/// Errors surfaced by the named-tool layer
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool with the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's input schema
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[source] serde_json::Error),

    /// The page could not be retrieved
    #[error(transparent)]
    Scrape(#[from] FetchError),

    /// Result could not be rendered as JSON
    #[error("Failed to serialize result")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::MissingUrl.to_string(),
            "Missing required parameter: url"
        );
        assert_eq!(
            FetchError::InvalidUrlScheme.to_string(),
            "Invalid URL: must start with http:// or https://"
        );
        assert_eq!(
            FetchError::InvalidUrl(url::ParseError::EmptyHost).to_string(),
            "Invalid URL: empty host"
        );
        assert_eq!(
            FetchError::Timeout(Duration::from_secs(30)).to_string(),
            "Request timed out after 30 seconds"
        );
        assert_eq!(
            FetchError::HttpStatus(404).to_string(),
            "HTTP error: status 404"
        );
        assert_eq!(
            FetchError::UnsupportedContentType("image/png".to_string()).to_string(),
            "Unsupported content type: image/png"
        );
    }

    #[test]
    fn test_tool_error_wraps_fetch_error() {
        let err: ToolError = FetchError::HttpStatus(500).into();
        assert_eq!(err.to_string(), "HTTP error: status 500");
        assert_eq!(
            ToolError::UnknownTool("crawl".to_string()).to_string(),
            "Unknown tool: crawl"
        );
    }
}
