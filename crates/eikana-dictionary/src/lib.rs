pub mod sample;
pub mod sources;
pub mod types;

use eikana_config::dictionary::DictionaryConfig;

pub use sources::{LocalDictionary, RemoteDictionary};
pub use types::{AcquireError, DictionarySource};

/// Pick the source the configuration asks for: an explicit file wins over the download cache
pub fn source_from_config(config: &DictionaryConfig) -> Box<dyn DictionarySource> {
    match &config.path {
        Some(path) => Box::new(LocalDictionary::new(path)),
        None => Box::new(RemoteDictionary::from_config(config)),
    }
}
