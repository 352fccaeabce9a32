//! Scrape operations for ScrapeKit
//!
//! Each operation fetches one page, parses it into a [`Document`] and runs a
//! single extractor. The document is built after the fetch completes and is
//! dropped before the operation returns, so nothing is shared between calls.

use crate::document::Document;
use crate::error::FetchError;
use crate::extract::{extract_links, extract_metadata, extract_structured, extract_text};
use crate::fetcher::{FetchOptions, Fetcher, HttpFetcher};
use crate::types::{Link, Metadata, StructureKind, StructuredRecord};
use std::sync::Arc;
use tracing::debug;

/// Fetches pages and extracts views of them
#[derive(Clone)]
pub struct Scraper {
    fetcher: Arc<dyn Fetcher>,
    options: FetchOptions,
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new(FetchOptions::default())
    }
}

impl std::fmt::Debug for Scraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scraper")
            .field("fetcher", &self.fetcher.name())
            .field("options", &self.options)
            .finish()
    }
}

impl Scraper {
    /// Create a scraper backed by [`HttpFetcher`]
    pub fn new(options: FetchOptions) -> Self {
        Self::with_fetcher(Arc::new(HttpFetcher::new()), options)
    }

    /// Create a scraper with a custom fetcher
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, options: FetchOptions) -> Self {
        Self { fetcher, options }
    }

    /// Options used for every fetch
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(fetcher = self.fetcher.name(), url, "Using fetcher");
        self.fetcher.fetch(url, &self.options).await
    }

    /// Visible text of the page, optionally scoped by a CSS selector
    pub async fn scrape_text(&self, url: &str, selector: Option<&str>) -> Result<String, FetchError> {
        let html = self.fetch(url).await?;
        let doc = Document::parse(&html);
        Ok(extract_text(&doc, selector))
    }

    /// All links on the page, resolved against `url`
    pub async fn scrape_links(&self, url: &str) -> Result<Vec<Link>, FetchError> {
        let html = self.fetch(url).await?;
        let doc = Document::parse(&html);
        let links = extract_links(&doc, url);
        debug!(url, count = links.len(), "Extracted links");
        Ok(links)
    }

    /// Title, meta and Open Graph fields of the page
    pub async fn scrape_metadata(&self, url: &str) -> Result<Metadata, FetchError> {
        let html = self.fetch(url).await?;
        let doc = Document::parse(&html);
        Ok(extract_metadata(&doc))
    }

    /// Tables, headings or lists of the page
    pub async fn scrape_structured(
        &self,
        url: &str,
        kind: StructureKind,
    ) -> Result<Vec<StructuredRecord>, FetchError> {
        let html = self.fetch(url).await?;
        let doc = Document::parse(&html);
        let records = extract_structured(&doc, kind);
        debug!(url, %kind, count = records.len(), "Extracted structured data");
        Ok(records)
    }
}

/// Fetch `url` and return its visible text
///
/// Uses [`HttpFetcher`] with default options. For custom options, use
/// [`Scraper`].
pub async fn scrape_text(url: &str, selector: Option<&str>) -> Result<String, FetchError> {
    Scraper::default().scrape_text(url, selector).await
}

/// Fetch `url` and return its links
pub async fn scrape_links(url: &str) -> Result<Vec<Link>, FetchError> {
    Scraper::default().scrape_links(url).await
}

/// Fetch `url` and return its metadata
pub async fn scrape_metadata(url: &str) -> Result<Metadata, FetchError> {
    Scraper::default().scrape_metadata(url).await
}

/// Fetch `url` and return its structured content of the given kind
pub async fn scrape_structured(
    url: &str,
    kind: StructureKind,
) -> Result<Vec<StructuredRecord>, FetchError> {
    Scraper::default().scrape_structured(url, kind).await
}
