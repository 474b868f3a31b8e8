use std::collections::HashMap;
use std::path::Path;

use eikana_core::LoadError;
use eikana_core::dictionary::{self, DictionaryEntry};
use eikana_dictionary::sample::SAMPLE_JSON;

pub struct JMdictLoader;

impl JMdictLoader {
    /// Load the built-in sample corpus
    pub fn load_sample() -> Result<Vec<DictionaryEntry>, LoadError> {
        tracing::info!("Loading built-in sample dictionary...");
        let entries = dictionary::parse_entries(SAMPLE_JSON)?;
        tracing::info!("Loaded {} sample entries", entries.len());
        Ok(entries)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<Vec<DictionaryEntry>, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        let entries = dictionary::read_entries(path)?;
        tracing::info!("Loaded {} dictionary entries from file", entries.len());
        Ok(entries)
    }

    /// Merge two entry lists. Entries from `additional` replace same-id entries in place,
    /// new ids are appended.
    pub fn merge(
        mut base: Vec<DictionaryEntry>,
        additional: Vec<DictionaryEntry>,
    ) -> Vec<DictionaryEntry> {
        let mut positions: HashMap<String, usize> = base
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.id.clone(), pos))
            .collect();

        for entry in additional {
            match positions.get(&entry.id) {
                Some(&pos) => base[pos] = entry,
                None => {
                    positions.insert(entry.id.clone(), base.len());
                    base.push(entry);
                }
            }
        }

        base
    }

    /// Load one additional dictionary and merge it on top of `base`.
    /// A missing file is skipped; a file that fails to parse is an error.
    pub fn merge_file(
        base: Vec<DictionaryEntry>,
        path: &Path,
    ) -> Result<Vec<DictionaryEntry>, LoadError> {
        match Self::load_from_file(path) {
            Ok(additional) => {
                tracing::info!("Merging additional dictionary from: {}", path.display());
                Ok(Self::merge(base, additional))
            }
            Err(LoadError::FileNotFound(_)) => {
                tracing::warn!("Additional dictionary {} not found, skipping", path.display());
                Ok(base)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::entry;

    #[test]
    fn test_merge_overrides_by_id() {
        let base = vec![
            entry("1", &[("パン", true)], &["bread"]),
            entry("2", &[("テレビ", true)], &["television"]),
        ];
        let additional = vec![
            entry("1", &[("パン", true)], &["pastry"]),
            entry("3", &[("ラジオ", true)], &["radio"]),
        ];
        let merged = JMdictLoader::merge(base, additional);
        let ids: Vec<_> = merged.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(merged[0].meaning(), "pastry");
    }

    #[test]
    fn test_merge_file_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("extra.json");
        std::fs::write(
            &good,
            r#"[{ "id": "9", "kana": [{ "text": "ピザ", "common": true }],
                 "sense": [{ "gloss": [{ "lang": "eng", "text": "pizza" }] }] }]"#,
        )
        .unwrap();

        let base = vec![entry("1", &[("パン", true)], &["bread"])];
        let merged = JMdictLoader::merge_file(base, &dir.path().join("missing.json")).unwrap();
        assert_eq!(merged.len(), 1);

        let merged = JMdictLoader::merge_file(merged, &good).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].id, "9");
    }

    #[test]
    fn test_merge_file_rejects_bad_format() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{ "nope": true }"#).unwrap();

        let base = vec![entry("1", &[("パン", true)], &["bread"])];
        assert!(matches!(
            JMdictLoader::merge_file(base.clone(), &bad),
            Err(LoadError::UnsupportedFormat(_))
        ));

        std::fs::write(&bad, "[{ not json").unwrap();
        assert!(matches!(
            JMdictLoader::merge_file(base, &bad),
            Err(LoadError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_sample() {
        let entries = JMdictLoader::load_sample().unwrap();
        assert!(!entries.is_empty());
    }

    #[test]
    fn test_load_from_file_rejects_unknown_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");
        std::fs::write(&path, r#""just a string""#).unwrap();
        assert!(matches!(
            JMdictLoader::load_from_file(&path),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }
}
