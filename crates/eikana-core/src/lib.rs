pub mod dictionary;
pub mod preprocess;
pub mod types;

pub use dictionary::{DictionaryEntry, Gloss, KanaElement, KanjiElement, LoadError, Sense};
pub use types::{ConfigError, ConversionRecord, ConvertOptions, SearchMode};
