//! Page metadata extraction

use crate::document::{attr, Document};
use crate::types::Metadata;

/// Extract title, standard meta tags and Open Graph tags
pub fn extract_metadata(doc: &Document) -> Metadata {
    let metas = doc.find_all(&["meta"]);

    // First tag whose `key` attribute equals `value`; its content, or "".
    let lookup = |key: &str, value: &str| -> String {
        metas
            .iter()
            .find(|meta| attr(**meta, key) == Some(value))
            .and_then(|meta| attr(*meta, "content"))
            .unwrap_or_default()
            .to_string()
    };

    Metadata {
        title: doc
            .find("title")
            .map(|title| title.text().collect::<String>())
            .unwrap_or_default(),
        description: lookup("name", "description"),
        keywords: lookup("name", "keywords"),
        author: lookup("name", "author"),
        og_title: lookup("property", "og:title"),
        og_description: lookup("property", "og:description"),
        og_image: lookup("property", "og:image"),
    }
}
