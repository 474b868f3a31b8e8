use std::fmt::Write;

use eikana_core::ConversionRecord;
use eikana_lang_japanese::{DictionaryOrigin, IndexStats};

/// `katakana  hiragana  romaji  [kanji]  meaning  *common*`, one record per line
pub fn records(records: &[ConversionRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let mut columns = vec![
            record.katakana.as_str(),
            record.hiragana.as_str(),
            record.romaji.as_str(),
        ];
        if let Some(kanji) = &record.kanji {
            columns.push(kanji);
        }
        columns.push(&record.meaning);
        if record.common {
            columns.push("*common*");
        }
        let _ = writeln!(out, "{}", columns.join("  "));
    }
    out
}

pub fn no_results(query: &str, suggestions: &[String]) -> String {
    let mut out = format!("no results for {query:?}\n");
    if !suggestions.is_empty() {
        let _ = writeln!(out, "did you mean: {}", suggestions.join(", "));
    }
    out
}

pub fn origin(origin: &DictionaryOrigin) -> String {
    match origin {
        DictionaryOrigin::File(path) => path.display().to_string(),
        DictionaryOrigin::Sample => "built-in sample".to_string(),
        DictionaryOrigin::Memory => "in-memory entries".to_string(),
    }
}

pub fn stats(stats: &IndexStats, origin: &DictionaryOrigin) -> String {
    format!(
        "dictionary:       {}\n\
         entries:          {}\n\
         exact keys:       {}\n\
         compound keys:    {}\n\
         description keys: {}\n\
         katakana forms:   {}\n\
         built at:         {} (unix seconds)\n",
        self::origin(origin),
        stats.entries,
        stats.exact_keys,
        stats.compound_keys,
        stats.description_keys,
        stats.katakana_forms,
        stats.built_at,
    )
}
