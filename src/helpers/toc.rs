//! Table of contents helpers

use indexmap::IndexMap;
use serde::Serialize;

use crate::content::Heading;

/// One entry of the "Table of Contents" card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    pub href: String,
}

/// Entries for every heading at `level`, in document order. A label in
/// `labels` replaces the heading text for that id.
pub fn toc_entries(
    headings: &[Heading],
    level: usize,
    labels: &IndexMap<String, String>,
) -> Vec<TocEntry> {
    headings
        .iter()
        .filter(|h| h.level == level)
        .map(|h| TocEntry {
            id: h.id.clone(),
            text: labels.get(&h.id).unwrap_or(&h.text).clone(),
            href: format!("#{}", h.id),
        })
        .collect()
}
