//! The in-memory search index and the substring matcher.

use serde_json::Value;

use crate::entry::SearchEntry;
use crate::normalize::normalize;

/// Hard cap on hits returned by a single scan. The dropdown never shows more,
/// so the scan stops as soon as this many are collected.
pub const MAX_RESULTS: usize = 12;

/// Why a raw index payload could not be parsed at all.
///
/// Per-entry problems are not errors; bad entries are dropped during parsing
/// and the rest of the catalog survives.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("index payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("index payload is not a JSON array")]
    NotAnArray,
}

/// The full parsed catalog, in payload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// An index with no entries. Every query misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    /// Parse a raw `search-index.json` payload.
    ///
    /// The payload must be a JSON array; anything else is a [`ParseError`].
    /// Individual elements that fail validation are silently dropped.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_slice(bytes)?;
        let Some(items) = value.as_array() else {
            return Err(ParseError::NotAnArray);
        };
        let entries = items.iter().filter_map(SearchEntry::from_value).collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries whose blob contains the normalized query, in index order,
    /// capped at [`MAX_RESULTS`].
    ///
    /// Callers gate out queries that are empty after trimming; an empty
    /// needle is contained in everything, so a symbols-only query like `"!!!"`
    /// deliberately returns the first [`MAX_RESULTS`] entries.
    pub fn matches(&self, query: &str) -> Vec<&SearchEntry> {
        let needle = normalize(query);
        self.entries
            .iter()
            .filter(|entry| entry.search_blob().contains(&needle))
            .take(MAX_RESULTS)
            .collect()
    }
}
