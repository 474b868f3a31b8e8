use std::path::PathBuf;
use std::sync::Arc;

use eikana_core::dictionary::DictionaryEntry;
use eikana_core::preprocess::normalize;
use eikana_core::{ConversionRecord, ConvertOptions};

use crate::index::IndexedDictionary;
use crate::results::process_scored_results;
use crate::search::SearchEngine;

/// Where the loaded entries came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryOrigin {
    File(PathBuf),
    Sample,
    Memory,
}

/// English → katakana conversion over one immutable index
pub struct KatakanaConverter {
    index: Arc<IndexedDictionary>,
    origin: DictionaryOrigin,
}

impl KatakanaConverter {
    pub fn new(index: Arc<IndexedDictionary>, origin: DictionaryOrigin) -> Self {
        Self { index, origin }
    }

    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        Self::new(
            Arc::new(IndexedDictionary::build(entries)),
            DictionaryOrigin::Memory,
        )
    }

    pub fn index(&self) -> &Arc<IndexedDictionary> {
        &self.index
    }

    pub fn origin(&self) -> &DictionaryOrigin {
        &self.origin
    }

    /// Ranked katakana readings for `text`.
    ///
    /// With `fuzzy` set, approximate key matching is tried only when direct lookup finds nothing.
    pub fn convert(&self, text: &str, options: &ConvertOptions) -> Vec<ConversionRecord> {
        let query = normalize(text);
        if query.is_empty() {
            return Vec::new();
        }

        let engine = SearchEngine::new(&self.index);
        let mut candidates = engine.find_scored_matches(&query, options.mode);

        if candidates.is_empty() && options.fuzzy {
            tracing::debug!("No direct match for {query:?}, trying fuzzy search");
            candidates = engine.find_fuzzy_matches(&query, options.mode, options.max_results);
        }

        let mut records = process_scored_results(&candidates);
        records.truncate(options.max_results);

        tracing::debug!(
            "Converted {query:?} ({}): {} candidates, {} records",
            options.mode,
            candidates.len(),
            records.len()
        );

        records
    }

    /// "Did you mean" keys for a partial query
    pub fn search_suggestions(&self, partial: &str, limit: usize) -> Vec<String> {
        SearchEngine::new(&self.index).get_suggestions(partial, limit)
    }
}
