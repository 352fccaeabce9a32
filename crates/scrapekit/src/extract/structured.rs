//! Structured content extraction: tables, headings and lists

use crate::document::{children_named, descendants_named, text_of, Document};
use crate::types::{HeadingRecord, ListRecord, StructureKind, StructuredRecord, TableRecord};

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Extract all records of the requested kind, in document order
pub fn extract_structured(doc: &Document, kind: StructureKind) -> Vec<StructuredRecord> {
    match kind {
        StructureKind::Tables => extract_tables(doc)
            .into_iter()
            .map(StructuredRecord::Table)
            .collect(),
        StructureKind::Headings => extract_headings(doc)
            .into_iter()
            .map(StructuredRecord::Heading)
            .collect(),
        StructureKind::Lists => extract_lists(doc)
            .into_iter()
            .map(StructuredRecord::List)
            .collect(),
    }
}

/// Tables with at least one row
///
/// `table_index` counts every `<table>`, including skipped ones. Rows with no
/// `<td>`/`<th>` cells are dropped; rows of empty cells are kept.
pub fn extract_tables(doc: &Document) -> Vec<TableRecord> {
    doc.find_all(&["table"])
        .into_iter()
        .enumerate()
        .filter_map(|(table_index, table)| {
            let data: Vec<Vec<String>> = descendants_named(table, &["tr"])
                .into_iter()
                .map(|row| {
                    descendants_named(row, &["td", "th"])
                        .into_iter()
                        .map(text_of)
                        .collect::<Vec<_>>()
                })
                .filter(|cells| !cells.is_empty())
                .collect();
            (!data.is_empty()).then_some(TableRecord { table_index, data })
        })
        .collect()
}

/// Every `h1`..`h6`, levels interleaved in document order
pub fn extract_headings(doc: &Document) -> Vec<HeadingRecord> {
    doc.find_all(HEADING_TAGS)
        .into_iter()
        .map(|heading| HeadingRecord {
            level: heading.value().name().to_string(),
            text: text_of(heading),
        })
        .collect()
}

/// Every `<ul>`/`<ol>` with at least one direct `<li>` child
///
/// Items of nested lists belong to the nested list's own record.
pub fn extract_lists(doc: &Document) -> Vec<ListRecord> {
    doc.find_all(&["ul", "ol"])
        .into_iter()
        .filter_map(|list| {
            let items: Vec<String> = children_named(list, "li")
                .into_iter()
                .map(text_of)
                .collect();
            (!items.is_empty()).then(|| ListRecord {
                list_type: list.value().name().to_string(),
                items,
            })
        })
        .collect()
}
