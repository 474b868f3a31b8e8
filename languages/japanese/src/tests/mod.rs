use eikana_core::dictionary::{DictionaryEntry, Gloss, KanaElement, Sense};


/// Entry with unrestricted kana readings and one sense of English glosses
pub(crate) fn entry(id: &str, kana: &[(&str, bool)], glosses: &[&str]) -> DictionaryEntry {
    DictionaryEntry {
        id: id.to_string(),
        kanji: vec![],
        kana: kana
            .iter()
            .map(|(text, common)| KanaElement {
                text: text.to_string(),
                common: *common,
                tags: vec![],
                info: None,
                applies_to_kanji: vec![],
            })
            .collect(),
        sense: vec![Sense {
            part_of_speech: vec![],
            gloss: glosses
                .iter()
                .map(|g| Gloss {
                    text: g.to_string(),
                    lang: Some("eng".to_string()),
                })
                .collect(),
        }],
    }
}
