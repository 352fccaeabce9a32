//! Core types for ScrapeKit

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A hyperlink found on a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Link {
    /// Absolute URL, resolved against the page URL
    pub url: String,
    /// Trimmed visible text of the anchor (empty for image-only links)
    pub text: String,
    /// Value of the `title` attribute, empty if absent
    pub title: String,
}

/// Document-level metadata
///
/// All seven fields are always present; absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    /// Text of the `<title>` element
    pub title: String,
    /// `<meta name="description">`
    pub description: String,
    /// `<meta name="keywords">`
    pub keywords: String,
    /// `<meta name="author">`
    pub author: String,
    /// `<meta property="og:title">`
    pub og_title: String,
    /// `<meta property="og:description">`
    pub og_description: String,
    /// `<meta property="og:image">`
    pub og_image: String,
}

/// Kind of structured content to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    /// `<table>` elements
    Tables,
    /// `<h1>` through `<h6>`
    Headings,
    /// `<ul>` and `<ol>` elements
    Lists,
}

impl StructureKind {
    /// Lowercase name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureKind::Tables => "tables",
            StructureKind::Headings => "headings",
            StructureKind::Lists => "lists",
        }
    }
}

impl FromStr for StructureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tables" => Ok(StructureKind::Tables),
            "headings" => Ok(StructureKind::Headings),
            "lists" => Ok(StructureKind::Lists),
            _ => Err("Invalid type: must be tables, headings or lists".to_string()),
        }
    }
}

impl std::fmt::Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<table>` with its rows of cell text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableRecord {
    /// Zero-based position among all tables in the document
    pub table_index: usize,
    /// Rows, each an ordered list of cell text
    pub data: Vec<Vec<String>>,
}

/// One heading element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HeadingRecord {
    /// Tag name, `h1` to `h6`
    pub level: String,
    /// Trimmed visible text
    pub text: String,
}

/// One `<ul>` or `<ol>` with its direct items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListRecord {
    /// `ul` or `ol`
    #[serde(rename = "type")]
    pub list_type: String,
    /// Trimmed text of the direct `<li>` children
    pub items: Vec<String>,
}

/// A structured content record, shaped by the requested [`StructureKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StructuredRecord {
    Table(TableRecord),
    Heading(HeadingRecord),
    List(ListRecord),
}
