//! Extractors over a parsed [`Document`](crate::Document)
//!
//! Every extractor is a pure function of the document: no I/O, no mutation,
//! results in document order. Structural absence (missing tags, attributes or
//! selector matches) yields empty values rather than errors.

mod links;
mod metadata;
mod structured;
mod text;

pub use links::extract_links;
pub use metadata::extract_metadata;
pub use structured::{extract_headings, extract_lists, extract_structured, extract_tables};
pub use text::{extract_text, NOISE_TAGS};
