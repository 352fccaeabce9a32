//! Parsed HTML document
//!
//! Thin wrapper over [`scraper::Html`]. Parsing goes through html5ever, which
//! recovers from malformed markup the way browsers do (implicit `<html>`,
//! `<head>`, `<body>` and `<tbody>`, auto-closed tags, misnested elements),
//! so [`Document::parse`] never fails. Scripting is off while parsing, so
//! `<noscript>` content becomes ordinary elements instead of raw markup text.
//!
//! A `Document` is built once per operation and dropped when it returns.
//! It is not `Send`; parse it after the last await point.

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::warn;

/// An in-memory HTML tree
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        Self {
            html: html5ever::parse_document(Html::new_document(), opts).one(html),
        }
    }

    /// Select all elements matching a CSS selector, in document order
    ///
    /// A selector that fails to parse matches nothing.
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(err) => {
                warn!(selector, error = ?err, "Ignoring unparsable selector");
                Vec::new()
            }
        }
    }

    /// Find all elements with one of the given tag names, in document order
    pub fn find_all(&self, tags: &[&str]) -> Vec<ElementRef<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.contains(&el.value().name()))
            .collect()
    }

    /// First element with the given tag name
    pub fn find(&self, tag: &str) -> Option<ElementRef<'_>> {
        self.find_all(&[tag]).into_iter().next()
    }

    /// Copy of this document with every element of the given tags removed,
    /// subtree included
    pub fn without(&self, tags: &[&str]) -> Document {
        let ids: Vec<_> = self.find_all(tags).iter().map(|el| el.id()).collect();
        let mut copy = self.html.clone();
        for id in ids {
            if let Some(mut node) = copy.tree.get_mut(id) {
                node.detach();
            }
        }
        Document { html: copy }
    }

    /// All text nodes reachable from the root, in document order
    pub fn text_nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) => Some(&**text),
                _ => None,
            })
    }
}

/// Direct element children of `el` with the given tag name
pub fn children_named<'a>(el: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == tag)
        .collect()
}

/// Descendants of `el` (excluding `el`) with one of the given tag names
pub fn descendants_named<'a>(el: ElementRef<'a>, tags: &[&str]) -> Vec<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|child| tags.contains(&child.value().name()))
        .collect()
}

/// Concatenated descendant text of `el`, with surrounding whitespace trimmed
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Attribute value, if present
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
