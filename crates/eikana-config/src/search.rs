use eikana_core::{ConvertOptions, SearchMode};
use serde::{Deserialize, Serialize};

fn default_max_results() -> usize {
    10
}

fn default_suggestions() -> usize {
    5
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub fuzzy: bool,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// How many "did you mean" keys to offer when nothing matches
    #[serde(default = "default_suggestions")]
    pub suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            fuzzy: false,
            max_results: default_max_results(),
            suggestions: default_suggestions(),
        }
    }
}

impl SearchConfig {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            mode: self.mode,
            fuzzy: self.fuzzy,
            max_results: self.max_results,
        }
    }
}
