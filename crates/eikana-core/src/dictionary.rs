use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One lexical unit in jmdict-simplified shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: String,
    #[serde(default)]
    pub kanji: Vec<KanjiElement>,
    #[serde(default)]
    pub kana: Vec<KanaElement>,
    #[serde(default)]
    pub sense: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanjiElement {
    pub text: String,
    #[serde(default)]
    pub common: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanaElement {
    pub text: String,
    #[serde(default)]
    pub common: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
    /// Kanji spellings this reading is restricted to. `["*"]` or empty means all.
    #[serde(rename = "appliesToKanji", default)]
    pub applies_to_kanji: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Vec<String>,
    #[serde(default)]
    pub gloss: Vec<Gloss>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gloss {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl Gloss {
    /// English or untagged glosses are the only ones indexed and displayed
    pub fn is_english(&self) -> bool {
        match self.lang.as_deref() {
            None => true,
            Some(lang) => lang.is_empty() || lang == "eng" || lang == "en",
        }
    }
}

impl KanaElement {
    /// Whether this reading may be paired with the given kanji spelling
    pub fn applies_to(&self, kanji: &str) -> bool {
        self.applies_to_kanji.is_empty()
            || self.applies_to_kanji.iter().any(|k| k == "*" || k == kanji)
    }
}

impl DictionaryEntry {
    /// True when any kana reading carries the common flag
    pub fn is_common(&self) -> bool {
        self.kana.iter().any(|k| k.common)
    }

    /// English glosses of the first sense, joined for display
    pub fn meaning(&self) -> String {
        self.sense
            .first()
            .map(|sense| {
                sense
                    .gloss
                    .iter()
                    .filter(|g| g.is_english())
                    .map(|g| g.text.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    }

    /// First kanji spelling the reading is allowed to pair with
    pub fn kanji_for(&self, kana: &KanaElement) -> Option<&str> {
        self.kanji
            .iter()
            .find(|k| kana.applies_to(&k.text))
            .map(|k| k.text.as_str())
    }
}

/// Top-level `{ "words": [...] }` wrapper used by jmdict-simplified releases
#[derive(Debug, Deserialize)]
struct WordsFile {
    words: Vec<DictionaryEntry>,
}

/// Parse a dictionary document.
///
/// Two shapes are accepted: a bare array of entries, or an object with a `words` array.
pub fn parse_entries(json: &str) -> Result<Vec<DictionaryEntry>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(ref map) if map.get("words").is_some_and(|w| w.is_array()) => {
            let file: WordsFile = serde_json::from_value(value)?;
            Ok(file.words)
        }
        serde_json::Value::Object(_) => Err(LoadError::UnsupportedFormat(
            "object without a `words` array".to_string(),
        )),
        other => Err(LoadError::UnsupportedFormat(format!(
            "top-level {} value",
            json_kind(&other)
        ))),
    }
}

/// Read and parse a dictionary file from disk
pub fn read_entries(path: &Path) -> Result<Vec<DictionaryEntry>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let json = fs::read_to_string(path)?;
    parse_entries(&json)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported dictionary format: {0}")]
    UnsupportedFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
