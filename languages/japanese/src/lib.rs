pub mod converter;
pub mod fuzzy;
pub mod index;
pub mod kana;
pub mod loader;
pub mod results;
pub mod search;
pub mod service;

#[cfg(test)]
mod tests;

pub use converter::{DictionaryOrigin, KatakanaConverter};
pub use index::{IndexStats, IndexTier, IndexedDictionary, MatchTier, ScoredCandidate};
pub use loader::JMdictLoader;
pub use results::process_scored_results;
pub use search::SearchEngine;
pub use service::{ConverterService, ServiceError};
