use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How far a search reaches into the tiered index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Exact single-word glosses only
    #[default]
    Strict,
    /// Exact and compound-phrase members
    Normal,
    /// Everything, including parenthetical descriptions
    Broad,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Strict, SearchMode::Normal, SearchMode::Broad];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Strict => "strict",
            SearchMode::Normal => "normal",
            SearchMode::Broad => "broad",
        }
    }

    fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(SearchMode::Strict),
            "normal" => Ok(SearchMode::Normal),
            "broad" => Ok(SearchMode::Broad),
            _ => Err(ConfigError::InvalidSearchMode {
                value: s.to_string(),
                valid: Self::valid_values(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub mode: SearchMode,
    pub fuzzy: bool,
    pub max_results: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            mode: SearchMode::Strict,
            fuzzy: false,
            max_results: 10,
        }
    }
}

/// One katakana reading of one dictionary entry, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub katakana: String,
    pub hiragana: String,
    pub romaji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kanji: Option<String>,
    pub meaning: String,
    pub common: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid search mode `{value}` (valid values: {valid})")]
    InvalidSearchMode { value: String, valid: String },

    #[error("Failed to read config file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
