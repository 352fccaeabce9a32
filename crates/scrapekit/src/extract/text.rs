//! Plain text extraction

use crate::document::{text_of, Document};

/// Tags removed before whole-document text extraction
pub const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Extract visible text from a document
///
/// With a non-empty `selector`, returns the trimmed text of every matching
/// element joined by a blank line (empty when nothing matches). Without one,
/// drops [`NOISE_TAGS`] subtrees from a working copy and joins the remaining
/// non-blank text nodes, each trimmed, with newlines.
pub fn extract_text(doc: &Document, selector: Option<&str>) -> String {
    match selector.filter(|s| !s.trim().is_empty()) {
        Some(selector) => doc
            .select(selector)
            .into_iter()
            .map(text_of)
            .collect::<Vec<_>>()
            .join("\n\n"),
        None => doc
            .without(NOISE_TAGS)
            .text_nodes()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
