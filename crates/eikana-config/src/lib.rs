use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use eikana_core::{ConfigError, SearchMode};
use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::search::SearchConfig;

pub mod dictionary;
pub mod search;

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub search: SearchConfig,
    /// Upper bound for one whole convert call, dictionary loading included
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            search: SearchConfig::default(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Read a JSON config file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file_error = |source: std::io::Error| ConfigError::File {
            path: path.display().to_string(),
            source,
        };
        let file = File::open(path).map_err(file_error)?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| file_error(e.into()))?;
        config.with_overrides(|key| env::var(key).ok())
    }

    /// Apply `EIKANA_*` overrides from any key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("EIKANA_DICT_PATH").filter(|v| !v.is_empty()) {
            self.dictionary.path = Some(PathBuf::from(path));
        }
        if let Some(url) = lookup("EIKANA_DICT_URL").filter(|v| !v.is_empty()) {
            self.dictionary.url = url;
        }
        if let Some(dir) = lookup("EIKANA_CACHE_DIR").filter(|v| !v.is_empty()) {
            self.dictionary.cache_dir = PathBuf::from(dir);
        }
        if let Some(offline) = lookup("EIKANA_OFFLINE") {
            self.dictionary.offline = matches!(offline.as_str(), "1" | "true" | "yes");
        }

        // An unknown mode is rejected rather than silently replaced
        if let Some(mode) = lookup("EIKANA_SEARCH_MODE") {
            self.search.mode = mode.parse::<SearchMode>()?;
        }

        self.search.max_results = lookup("EIKANA_MAX_RESULTS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.search.max_results);

        self.timeout_seconds = lookup("EIKANA_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.timeout_seconds);

        Ok(self)
    }
}
