use std::cmp::Ordering;
use std::collections::HashSet;

use eikana_core::ConversionRecord;
use eikana_core::dictionary::{DictionaryEntry, KanaElement};

use crate::index::ScoredCandidate;
use crate::kana::{is_katakana, to_hiragana, to_romaji};
use crate::search::best_per_entry;

fn first_katakana(entry: &DictionaryEntry) -> &str {
    entry
        .kana
        .iter()
        .map(|k| k.text.as_str())
        .find(|text| is_katakana(text))
        .unwrap_or("")
}

/// Score, then common entries, then first katakana reading, then id
fn rank(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.entry.is_common().cmp(&a.entry.is_common()))
        .then_with(|| first_katakana(&a.entry).cmp(first_katakana(&b.entry)))
        .then_with(|| a.entry.id.cmp(&b.entry.id))
}

fn to_record(entry: &DictionaryEntry, kana: &KanaElement) -> ConversionRecord {
    ConversionRecord {
        katakana: kana.text.clone(),
        hiragana: to_hiragana(&kana.text),
        romaji: to_romaji(&kana.text),
        kanji: entry.kanji_for(kana).map(str::to_string),
        meaning: entry.meaning(),
        common: kana.common,
    }
}

/// One record per katakana reading of each entry, best entries first, no repeated katakana
pub fn process_scored_results(candidates: &[ScoredCandidate]) -> Vec<ConversionRecord> {
    let mut ranked = best_per_entry(candidates.iter().cloned());
    ranked.sort_by(rank);

    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for candidate in &ranked {
        let entry = candidate.entry.as_ref();

        let mut readings: Vec<&KanaElement> =
            entry.kana.iter().filter(|k| is_katakana(&k.text)).collect();
        // stable: common readings first, dictionary order otherwise
        readings.sort_by_key(|k| !k.common);

        for kana in readings {
            if seen.insert(kana.text.clone()) {
                records.push(to_record(entry, kana));
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use eikana_core::dictionary::KanjiElement;

    use super::*;
    use crate::index::MatchTier;
    use crate::tests::entry;

    fn candidate(entry: DictionaryEntry, score: u8) -> ScoredCandidate {
        ScoredCandidate {
            entry: Arc::new(entry),
            score,
            tier: MatchTier::Exact,
            term: "term".to_string(),
        }
    }

    fn katakana(records: &[ConversionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.katakana.as_str()).collect()
    }

    #[test]
    fn test_score_orders_first() {
        let records = process_scored_results(&[
            candidate(entry("1", &[("アイ", true)], &["love"]), 60),
            candidate(entry("2", &[("ラブ", false)], &["love"]), 100),
        ]);
        assert_eq!(katakana(&records), vec!["ラブ", "アイ"]);
    }

    #[test]
    fn test_common_breaks_score_ties() {
        let records = process_scored_results(&[
            candidate(entry("1", &[("アイ", false)], &["love"]), 100),
            candidate(entry("2", &[("ラブ", true)], &["love"]), 100),
        ]);
        assert_eq!(katakana(&records), vec!["ラブ", "アイ"]);
    }

    #[test]
    fn test_lexical_breaks_remaining_ties() {
        let records = process_scored_results(&[
            candidate(entry("1", &[("ラブ", true)], &["love"]), 100),
            candidate(entry("2", &[("アイ", true)], &["love"]), 100),
        ]);
        assert_eq!(katakana(&records), vec!["アイ", "ラブ"]);
    }

    #[test]
    fn test_readings_common_first() {
        let records = process_scored_results(&[candidate(
            entry(
                "1",
                &[("エレベータ", false), ("えれべーた", true), ("エレベーター", true)],
                &["elevator"],
            ),
            100,
        )]);
        assert_eq!(katakana(&records), vec!["エレベーター", "エレベータ"]);
        assert!(records[0].common);
        assert!(!records[1].common);
    }

    #[test]
    fn test_dedup_by_katakana() {
        let records = process_scored_results(&[
            candidate(entry("1", &[("パン", true)], &["bread"]), 100),
            candidate(entry("2", &[("パン", false), ("パンツ", false)], &["pan"]), 60),
            candidate(entry("1", &[("パン", true)], &["bread"]), 20),
        ]);
        assert_eq!(katakana(&records), vec!["パン", "パンツ"]);
        assert_eq!(records[0].meaning, "bread");

        let unique: HashSet<&str> = katakana(&records).into_iter().collect();
        assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn test_entries_without_katakana_emit_nothing() {
        let records =
            process_scored_results(&[candidate(entry("1", &[("ねこ", true)], &["cat"]), 100)]);
        assert!(records.is_empty());
        assert!(process_scored_results(&[]).is_empty());
    }

    #[test]
    fn test_record_fields() {
        let mut e = entry("1", &[("コーヒー", true)], &["coffee", "café"]);
        e.kanji.push(KanjiElement {
            text: "珈琲".to_string(),
            common: false,
            tags: vec![],
            info: None,
        });
        let records = process_scored_results(&[candidate(e, 100)]);
        assert_eq!(
            records,
            vec![ConversionRecord {
                katakana: "コーヒー".to_string(),
                hiragana: "こーひー".to_string(),
                romaji: "ko-hi-".to_string(),
                kanji: Some("珈琲".to_string()),
                meaning: "coffee, café".to_string(),
                common: true,
            }]
        );
    }
}
