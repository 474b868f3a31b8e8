use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use std::time::SystemTime;

use eikana_core::SearchMode;
use eikana_core::dictionary::DictionaryEntry;
use eikana_core::preprocess::normalize;
use serde::Serialize;

use crate::kana::is_katakana;

pub const EXACT_SCORE: u8 = 100;
pub const PRIMARY_SCORE: u8 = 80;
pub const COMPOUND_SCORE: u8 = 60;
pub const DESCRIPTION_SCORE: u8 = 20;

/// Tokens this short carry no meaning on their own
const MIN_TOKEN_CHARS: usize = 3;

const GLOSS_SEPARATORS: &[char] = &[',', ';', '(', ')', '[', ']'];
const DESCRIPTION_SEPARATORS: &[char] = &[',', ';'];

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
];

/// Why a term points at an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// The whole gloss is this one word
    Exact,
    /// First word of a multi-word gloss
    Primary,
    /// Any later word of a multi-word gloss
    Compound,
    /// Word inside a parenthesized note
    Description,
}

/// The three index partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexTier {
    Exact,
    Compound,
    Description,
}

impl IndexTier {
    /// Partitions a search in `mode` may read, narrowest first
    pub fn for_mode(mode: SearchMode) -> &'static [IndexTier] {
        match mode {
            SearchMode::Strict => &[IndexTier::Exact],
            SearchMode::Normal => &[IndexTier::Exact, IndexTier::Compound],
            SearchMode::Broad => &[IndexTier::Exact, IndexTier::Compound, IndexTier::Description],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub entry: Arc<DictionaryEntry>,
    pub score: u8,
    pub tier: MatchTier,
    /// Index key that produced this candidate
    pub term: String,
}

pub type TermIndex = BTreeMap<String, Vec<ScoredCandidate>>;

/// Read-only search index over one set of dictionary entries.
///
/// Rebuilding means constructing a new value; nothing here mutates after `build`.
#[derive(Debug)]
pub struct IndexedDictionary {
    entries: BTreeMap<String, Arc<DictionaryEntry>>,
    exact: TermIndex,
    compound: TermIndex,
    description: TermIndex,
    katakana_forms: BTreeSet<String>,
    built_at: SystemTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub entries: usize,
    pub exact_keys: usize,
    pub compound_keys: usize,
    pub description_keys: usize,
    pub katakana_forms: usize,
    /// Seconds since the Unix epoch
    pub built_at: u64,
}

impl IndexedDictionary {
    pub fn empty() -> Self {
        Self::build(Vec::new())
    }

    pub fn build(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut builder = IndexBuilder::default();
        for entry in entries {
            builder.add(entry);
        }
        builder.finish()
    }

    pub fn entry(&self, id: &str) -> Option<&Arc<DictionaryEntry>> {
        self.entries.get(id)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn tier(&self, tier: IndexTier) -> &TermIndex {
        match tier {
            IndexTier::Exact => &self.exact,
            IndexTier::Compound => &self.compound,
            IndexTier::Description => &self.description,
        }
    }

    pub fn katakana_forms(&self) -> &BTreeSet<String> {
        &self.katakana_forms
    }

    pub fn built_at(&self) -> SystemTime {
        self.built_at
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.entries.len(),
            exact_keys: self.exact.len(),
            compound_keys: self.compound.len(),
            description_keys: self.description.len(),
            katakana_forms: self.katakana_forms.len(),
            built_at: self
                .built_at
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
        }
    }
}

/// Collects entries, then indexes them in one pass.
///
/// A repeated id replaces the earlier entry in place, so every candidate points at an entry
/// that is still in the id map.
#[derive(Default)]
pub struct IndexBuilder {
    order: Vec<Arc<DictionaryEntry>>,
    positions: HashMap<String, usize>,
}

impl IndexBuilder {
    pub fn add(&mut self, entry: DictionaryEntry) {
        let entry = Arc::new(entry);
        match self.positions.get(&entry.id) {
            Some(&pos) => {
                tracing::debug!("Duplicate dictionary id {}, keeping the later entry", entry.id);
                self.order[pos] = entry;
            }
            None => {
                self.positions.insert(entry.id.clone(), self.order.len());
                self.order.push(entry);
            }
        }
    }

    pub fn finish(self) -> IndexedDictionary {
        let mut index = IndexedDictionary {
            entries: BTreeMap::new(),
            exact: TermIndex::new(),
            compound: TermIndex::new(),
            description: TermIndex::new(),
            katakana_forms: BTreeSet::new(),
            built_at: SystemTime::now(),
        };

        for entry in self.order {
            index_entry(&mut index, entry);
        }

        tracing::info!(
            "Built index: {} entries, {} exact / {} compound / {} description keys, {} katakana forms",
            index.entries.len(),
            index.exact.len(),
            index.compound.len(),
            index.description.len(),
            index.katakana_forms.len()
        );

        index
    }
}

fn index_entry(index: &mut IndexedDictionary, entry: Arc<DictionaryEntry>) {
    index.entries.insert(entry.id.clone(), Arc::clone(&entry));

    for kana in &entry.kana {
        if is_katakana(&kana.text) {
            index.katakana_forms.insert(kana.text.clone());
        }
    }

    for gloss in entry.sense.iter().flat_map(|s| &s.gloss) {
        if !gloss.is_english() {
            continue;
        }

        let tokens = gloss_tokens(&gloss.text);
        match tokens.as_slice() {
            [] => {}
            [single] => push(&mut index.exact, single, &entry, EXACT_SCORE, MatchTier::Exact),
            [first, rest @ ..] => {
                push(&mut index.compound, first, &entry, PRIMARY_SCORE, MatchTier::Primary);
                for token in rest {
                    push(&mut index.compound, token, &entry, COMPOUND_SCORE, MatchTier::Compound);
                }
            }
        }

        for token in description_tokens(&gloss.text) {
            push(
                &mut index.description,
                &token,
                &entry,
                DESCRIPTION_SCORE,
                MatchTier::Description,
            );
        }
    }
}

fn push(map: &mut TermIndex, term: &str, entry: &Arc<DictionaryEntry>, score: u8, tier: MatchTier) {
    map.entry(term.to_string())
        .or_default()
        .push(ScoredCandidate {
            entry: Arc::clone(entry),
            score,
            tier,
            term: term.to_string(),
        });
}

fn is_meaningful(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS && !STOP_WORDS.contains(&token)
}

/// Normalized gloss split into meaningful words
pub fn gloss_tokens(gloss: &str) -> Vec<String> {
    normalize(gloss)
        .split(|c: char| c.is_whitespace() || GLOSS_SEPARATORS.contains(&c))
        .filter(|t| is_meaningful(t))
        .map(str::to_string)
        .collect()
}

/// Meaningful words of the first `(...)` segment in the raw gloss
pub fn description_tokens(gloss: &str) -> Vec<String> {
    let Some(open) = gloss.find('(') else {
        return Vec::new();
    };
    let inner = &gloss[open + 1..];
    let Some(close) = inner.find(')') else {
        return Vec::new();
    };

    normalize(&inner[..close])
        .split(|c: char| c.is_whitespace() || DESCRIPTION_SEPARATORS.contains(&c))
        .filter(|t| is_meaningful(t))
        .map(str::to_string)
        .collect()
}
