//! Small built-in corpus used when the real dictionary cannot be obtained.

/// Embedded sample dictionary in jmdict-simplified `{ "words": [...] }` shape
pub const SAMPLE_JSON: &str = include_str!("data/sample.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses() {
        let entries = eikana_core::dictionary::parse_entries(SAMPLE_JSON).unwrap();
        assert!(entries.len() > 20);
        assert!(entries.iter().any(|e| e.kana.iter().any(|k| k.text == "コンピューター")));
    }

    #[test]
    fn test_sample_ids_unique() {
        let entries = eikana_core::dictionary::parse_entries(SAMPLE_JSON).unwrap();
        let mut ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }
}
