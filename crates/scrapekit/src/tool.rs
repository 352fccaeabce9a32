//! Tool builder and contract for ScrapeKit
//!
//! Exposes the scrape operations as named tools taking JSON arguments and
//! returning framed text, ready for an LLM tool-call layer such as MCP.

use crate::client::Scraper;
use crate::error::ToolError;
use crate::fetcher::{FetchOptions, DEFAULT_TIMEOUT};
use crate::types::StructureKind;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Tool name for text extraction
pub const SCRAPE_URL: &str = "scrape_url";
/// Tool name for link extraction
pub const EXTRACT_LINKS: &str = "extract_links";
/// Tool name for metadata extraction
pub const EXTRACT_METADATA: &str = "extract_metadata";
/// Tool name for structured content extraction
pub const EXTRACT_STRUCTURED_DATA: &str = "extract_structured_data";

/// Arguments for `scrape_url`
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScrapeTextArgs {
    /// The URL to scrape
    pub url: String,

    /// Optional CSS selector to extract specific elements (e.g. '.article-content', '#main', 'p.description')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// Arguments for `extract_links` and `extract_metadata`
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UrlArgs {
    /// The URL to extract from
    pub url: String,
}

/// Arguments for `extract_structured_data`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StructuredArgs {
    /// The URL to scrape
    pub url: String,

    /// Type of structured data to extract
    #[serde(rename = "type")]
    pub kind: StructureKind,
}

/// Name, description and input schema of one tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Builder for configuring the ScrapeKit tools
#[derive(Debug, Clone)]
pub struct ToolBuilder {
    /// Custom User-Agent
    user_agent: Option<String>,
    /// Fetch timeout
    timeout: Duration,
}

impl Default for ToolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolBuilder {
    /// Create a new tool builder with default options
    pub fn new() -> Self {
        Self {
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set fetch timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the tool
    pub fn build(self) -> Tool {
        Tool {
            scraper: Scraper::new(FetchOptions {
                user_agent: self.user_agent,
                timeout: self.timeout,
            }),
        }
    }
}

/// Configured ScrapeKit tool set
#[derive(Debug, Clone, Default)]
pub struct Tool {
    scraper: Scraper,
}

impl Tool {
    /// Create a new tool builder
    pub fn builder() -> ToolBuilder {
        ToolBuilder::new()
    }

    /// Wrap an existing scraper
    pub fn with_scraper(scraper: Scraper) -> Self {
        Self { scraper }
    }

    /// Definitions of all tools, in a stable order
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: SCRAPE_URL,
                description: "Fetch and extract text content from a URL. Can optionally use CSS selectors to target specific elements.",
                input_schema: schema_value(schema_for!(ScrapeTextArgs)),
            },
            ToolDefinition {
                name: EXTRACT_LINKS,
                description: "Extract all links from a webpage with their text and titles.",
                input_schema: schema_value(schema_for!(UrlArgs)),
            },
            ToolDefinition {
                name: EXTRACT_METADATA,
                description: "Extract metadata from a webpage including title, description, and Open Graph tags.",
                input_schema: schema_value(schema_for!(UrlArgs)),
            },
            ToolDefinition {
                name: EXTRACT_STRUCTURED_DATA,
                description: "Extract structured data like tables, headings, or lists from a webpage.",
                input_schema: schema_value(schema_for!(StructuredArgs)),
            },
        ]
    }

    /// Execute a tool by name and return its framed text result
    pub async fn execute(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        match name {
            SCRAPE_URL => {
                let args: ScrapeTextArgs = parse_args(arguments)?;
                let text = self
                    .scraper
                    .scrape_text(&args.url, args.selector.as_deref())
                    .await?;
                Ok(format!("Content from {}:\n\n{}", args.url, text))
            }
            EXTRACT_LINKS => {
                let args: UrlArgs = parse_args(arguments)?;
                let links = self.scraper.scrape_links(&args.url).await?;
                Ok(format!(
                    "Found {} links on {}:\n\n{}",
                    links.len(),
                    args.url,
                    to_pretty_json(&links)?
                ))
            }
            EXTRACT_METADATA => {
                let args: UrlArgs = parse_args(arguments)?;
                let metadata = self.scraper.scrape_metadata(&args.url).await?;
                Ok(format!(
                    "Metadata from {}:\n\n{}",
                    args.url,
                    to_pretty_json(&metadata)?
                ))
            }
            EXTRACT_STRUCTURED_DATA => {
                let args: StructuredArgs = parse_args(arguments)?;
                let records = self.scraper.scrape_structured(&args.url, args.kind).await?;
                Ok(format!(
                    "Extracted {} from {}:\n\n{}",
                    args.kind,
                    args.url,
                    to_pretty_json(&records)?
                ))
            }
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}

fn schema_value(schema: schemars::schema::RootSchema) -> Value {
    serde_json::to_value(schema).unwrap_or_default()
}

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(ToolError::InvalidArguments)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(ToolError::Serialize)
}
