//! ScrapeKit - AI-friendly web page scraping library
//!
//! This crate fetches a single web page and derives structured views of it:
//! plain text (optionally scoped by a CSS selector), the outbound links,
//! page metadata, and tables, headings or lists.
//!
//! ## Pipeline
//!
//! Every operation runs the same three steps:
//! 1. a [`Fetcher`] retrieves the HTML ([`HttpFetcher`] by default)
//! 2. [`Document::parse`] builds a tree, recovering from malformed markup
//! 3. one extractor from [`extract`] reads the tree
//!
//! Only the fetch can fail. Missing tags, attributes or selector matches
//! produce empty values.

pub mod client;
mod document;
mod error;
pub mod extract;
mod fetcher;
mod tool;
mod types;

pub use client::{scrape_links, scrape_metadata, scrape_structured, scrape_text, Scraper};
pub use document::Document;
pub use error::{FetchError, ToolError};
pub use fetcher::{FetchOptions, Fetcher, HttpFetcher, DEFAULT_TIMEOUT};
pub use tool::{
    ScrapeTextArgs, StructuredArgs, Tool, ToolBuilder, ToolDefinition, UrlArgs,
    EXTRACT_LINKS, EXTRACT_METADATA, EXTRACT_STRUCTURED_DATA, SCRAPE_URL,
};
pub use types::{
    HeadingRecord, Link, ListRecord, Metadata, StructureKind, StructuredRecord, TableRecord,
};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Everruns ScrapeKit/1.0";

/// Short description of the tool set for LLM consumption
pub const TOOL_DESCRIPTION: &str = r#"Scrapes a single web page into text, links, metadata or structured content.

- Text extraction with optional CSS selector scoping
- Link extraction with absolute URLs
- Title, meta and Open Graph metadata
- Tables, headings and lists as JSON"#;

/// Extended documentation for LLM consumption (llmtxt)
pub const TOOL_LLMTXT: &str = r#"# ScrapeKit Tools

Fetches one web page per call and extracts a structured view of it.

## Tools

### scrape_url
Extract visible text. With `selector`, returns the text of every matching
element separated by blank lines. Without it, drops script, style, nav,
header and footer content and returns the remaining text, one text run per line.
- `url` (required): The URL to scrape (http:// or https://)
- `selector` (optional): CSS selector, e.g. `.article-content`, `#main`, `p.description`

### extract_links
List every `<a href>` in document order.
- `url` (required)
Output: `[{"url", "text", "title"}]` with `url` resolved to an absolute URL.

### extract_metadata
- `url` (required)
Output: `{"title", "description", "keywords", "author", "og_title", "og_description", "og_image"}`.
Missing fields are empty strings.

### extract_structured_data
- `url` (required)
- `type` (required): `tables`, `headings` or `lists`
Output:
- tables: `[{"table_index", "data": [[cell, ...], ...]}]`
- headings: `[{"level": "h1".."h6", "text"}]`
- lists: `[{"type": "ul"|"ol", "items": [...]}]` (direct items only)

## Examples

### Article text
```json
{"url": "https://example.com/post", "selector": "article"}
```

### Tables
```json
{"url": "https://example.com/stats", "type": "tables"}
```

## Error Handling
- Invalid URLs, connection failures, timeouts (30 seconds by default) and
  non-2xx statuses fail the call
- Binary content types fail the call
- Everything missing from the page yields empty values, never an error
"#;
