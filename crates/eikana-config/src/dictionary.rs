use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DICT_URL: &str =
    "https://github.com/scriptin/jmdict-simplified/releases/latest/download/jmdict-eng.json";

pub const DEFAULT_FILE_NAME: &str = "jmdict-eng.json";

fn default_url() -> String {
    DEFAULT_DICT_URL.to_string()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

/// Platform cache directory, or a dot-directory under the working dir when none exists
fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("eikana"))
        .unwrap_or_else(|| PathBuf::from(".eikana"))
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Explicit dictionary file; skips the download cache entirely
    pub path: Option<PathBuf>,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Never touch the network, use the cache or the built-in sample
    #[serde(default)]
    pub offline: bool,
    /// Extra dictionaries merged on top, later ids win
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            url: default_url(),
            cache_dir: default_cache_dir(),
            file_name: default_file_name(),
            offline: false,
            additional_paths: vec![],
        }
    }
}

impl DictionaryConfig {
    pub fn cached_path(&self) -> PathBuf {
        self.cache_dir.join(&self.file_name)
    }
}
