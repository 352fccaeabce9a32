//! Hyperlink extraction

use crate::document::{attr, text_of, Document};
use crate::types::Link;
use tracing::debug;
use url::Url;

/// Extract every `<a>` with a non-empty `href`, in document order
///
/// Relative hrefs are resolved against `base_url` with standard relative
/// resolution. Absolute hrefs, hrefs that cannot be resolved, and hrefs on a
/// page whose base does not parse are kept as written. Links are not
/// deduplicated.
pub fn extract_links(doc: &Document, base_url: &str) -> Vec<Link> {
    let base = Url::parse(base_url).ok();
    if base.is_none() {
        debug!(base_url, "Base URL does not parse, keeping hrefs as written");
    }

    doc.find_all(&["a"])
        .into_iter()
        .filter_map(|anchor| {
            let href = attr(anchor, "href").filter(|href| !href.is_empty())?;
            Some(Link {
                url: resolve(base.as_ref(), href),
                text: text_of(anchor),
                title: attr(anchor, "title").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

fn resolve(base: Option<&Url>, href: &str) -> String {
    // Absolute hrefs are kept byte for byte: no case folding, port or slash changes
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    let Some(base) = base else {
        return href.to_string();
    };
    match base.join(href) {
        Ok(url) => url.to_string(),
        Err(err) => {
            debug!(href, error = %err, "Keeping unresolvable href");
            href.to_string()
        }
    }
}
