use std::collections::{BTreeSet, HashMap};

use eikana_core::SearchMode;
use eikana_core::preprocess::normalize;

use crate::fuzzy;
use crate::index::{IndexTier, IndexedDictionary, ScoredCandidate};

/// Multiplier applied to every score reached through fuzzy key matching
pub const FUZZY_PENALTY: f64 = 0.7;

/// Queries against one immutable index
pub struct SearchEngine<'a> {
    index: &'a IndexedDictionary,
}

impl<'a> SearchEngine<'a> {
    pub fn new(index: &'a IndexedDictionary) -> Self {
        Self { index }
    }

    fn hits(&self, term: &str, mode: SearchMode) -> impl Iterator<Item = &'a ScoredCandidate> {
        let index = self.index;
        IndexTier::for_mode(mode)
            .iter()
            .filter_map(move |tier| index.tier(*tier).get(term))
            .flatten()
    }

    /// Exact key lookups across the tiers `mode` allows, one candidate per entry
    pub fn find_scored_matches(&self, query: &str, mode: SearchMode) -> Vec<ScoredCandidate> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        let matches = best_per_entry(self.hits(&query, mode).cloned());
        tracing::debug!("{} scored matches for {query:?} ({mode})", matches.len());
        matches
    }

    /// Approximate key matching with a flat score penalty, at most `max_candidates` entries
    pub fn find_fuzzy_matches(
        &self,
        query: &str,
        mode: SearchMode,
        max_candidates: usize,
    ) -> Vec<ScoredCandidate> {
        let query = normalize(query);
        if query.is_empty() || max_candidates == 0 {
            return Vec::new();
        }

        let keys: BTreeSet<&str> = IndexTier::for_mode(mode)
            .iter()
            .flat_map(|tier| self.index.tier(*tier).keys())
            .map(String::as_str)
            .collect();

        let matched_keys = fuzzy::rank_keys(&query, keys, max_candidates.saturating_mul(2));
        tracing::debug!(
            "Fuzzy keys for {query:?}: {:?}",
            matched_keys.iter().map(|m| m.key).collect::<Vec<_>>()
        );

        let penalized = matched_keys.iter().flat_map(|m| {
            self.hits(m.key, mode).map(|candidate| ScoredCandidate {
                score: penalize(candidate.score),
                ..candidate.clone()
            })
        });

        let mut matches = best_per_entry(penalized);
        matches.truncate(max_candidates);
        matches
    }

    /// Index keys starting with `partial`, exact-tier keys first, returned sorted
    pub fn get_suggestions(&self, partial: &str, max_results: usize) -> Vec<String> {
        let prefix = normalize(partial);
        if prefix.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let mut suggestions: Vec<String> = Vec::new();
        for tier in [IndexTier::Exact, IndexTier::Compound] {
            let keys = self
                .index
                .tier(tier)
                .range(prefix.clone()..)
                .map(|(key, _)| key)
                .take_while(|key| key.starts_with(&prefix));

            for key in keys {
                if suggestions.len() >= max_results {
                    break;
                }
                if !suggestions.contains(key) {
                    suggestions.push(key.clone());
                }
            }
        }

        suggestions.sort();
        suggestions
    }
}

pub fn penalize(score: u8) -> u8 {
    (f64::from(score) * FUZZY_PENALTY).round() as u8
}

/// Collapse candidates to the highest-scoring one per entry, best first.
/// Equal scores keep the candidate seen first; ties in the output are ordered by entry id.
pub fn best_per_entry(
    candidates: impl IntoIterator<Item = ScoredCandidate>,
) -> Vec<ScoredCandidate> {
    let mut best: HashMap<String, ScoredCandidate> = HashMap::new();

    for candidate in candidates {
        match best.get_mut(&candidate.entry.id) {
            Some(existing) if existing.score >= candidate.score => {}
            Some(existing) => *existing = candidate,
            None => {
                best.insert(candidate.entry.id.clone(), candidate);
            }
        }
    }

    let mut result: Vec<ScoredCandidate> = best.into_values().collect();
    result.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });
    result
}
