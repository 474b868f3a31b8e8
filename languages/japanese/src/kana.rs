//! Katakana classification and derivation of hiragana and romaji forms.

use std::collections::HashMap;
use std::sync::LazyLock;

const KATAKANA_START: u32 = 0x30A1; // ァ
const KATAKANA_END: u32 = 0x30F6; // ヶ
const HIRAGANA_OFFSET: u32 = 0x60;

const SMALL_TSU: char = 'ッ';
const LONG_VOWEL: char = 'ー';

/// Fixed katakana → romaji syllable table. Digraphs come with their small kana.
#[rustfmt::skip]
pub const ROMAJI_TABLE: &[(&str, &str)] = &[
    // vowels
    ("ア", "a"), ("イ", "i"), ("ウ", "u"), ("エ", "e"), ("オ", "o"),
    ("ァ", "a"), ("ィ", "i"), ("ゥ", "u"), ("ェ", "e"), ("ォ", "o"),
    // k / g
    ("カ", "ka"), ("キ", "ki"), ("ク", "ku"), ("ケ", "ke"), ("コ", "ko"),
    ("ガ", "ga"), ("ギ", "gi"), ("グ", "gu"), ("ゲ", "ge"), ("ゴ", "go"),
    ("ヵ", "ka"), ("ヶ", "ke"),
    // s / z
    ("サ", "sa"), ("シ", "shi"), ("ス", "su"), ("セ", "se"), ("ソ", "so"),
    ("ザ", "za"), ("ジ", "ji"), ("ズ", "zu"), ("ゼ", "ze"), ("ゾ", "zo"),
    // t / d
    ("タ", "ta"), ("チ", "chi"), ("ツ", "tsu"), ("テ", "te"), ("ト", "to"),
    ("ダ", "da"), ("ヂ", "ji"), ("ヅ", "zu"), ("デ", "de"), ("ド", "do"),
    // n
    ("ナ", "na"), ("ニ", "ni"), ("ヌ", "nu"), ("ネ", "ne"), ("ノ", "no"),
    // h / b / p
    ("ハ", "ha"), ("ヒ", "hi"), ("フ", "fu"), ("ヘ", "he"), ("ホ", "ho"),
    ("バ", "ba"), ("ビ", "bi"), ("ブ", "bu"), ("ベ", "be"), ("ボ", "bo"),
    ("パ", "pa"), ("ピ", "pi"), ("プ", "pu"), ("ペ", "pe"), ("ポ", "po"),
    // m
    ("マ", "ma"), ("ミ", "mi"), ("ム", "mu"), ("メ", "me"), ("モ", "mo"),
    // y
    ("ヤ", "ya"), ("ユ", "yu"), ("ヨ", "yo"),
    ("ャ", "ya"), ("ュ", "yu"), ("ョ", "yo"),
    // r
    ("ラ", "ra"), ("リ", "ri"), ("ル", "ru"), ("レ", "re"), ("ロ", "ro"),
    // w
    ("ワ", "wa"), ("ヰ", "wi"), ("ヱ", "we"), ("ヲ", "wo"), ("ヮ", "wa"),
    ("ン", "n"),
    ("ヴ", "vu"),
    // yoon
    ("キャ", "kya"), ("キュ", "kyu"), ("キョ", "kyo"),
    ("ギャ", "gya"), ("ギュ", "gyu"), ("ギョ", "gyo"),
    ("シャ", "sha"), ("シュ", "shu"), ("ショ", "sho"),
    ("ジャ", "ja"), ("ジュ", "ju"), ("ジョ", "jo"),
    ("チャ", "cha"), ("チュ", "chu"), ("チョ", "cho"),
    ("ヂャ", "ja"), ("ヂュ", "ju"), ("ヂョ", "jo"),
    ("ニャ", "nya"), ("ニュ", "nyu"), ("ニョ", "nyo"),
    ("ヒャ", "hya"), ("ヒュ", "hyu"), ("ヒョ", "hyo"),
    ("ビャ", "bya"), ("ビュ", "byu"), ("ビョ", "byo"),
    ("ピャ", "pya"), ("ピュ", "pyu"), ("ピョ", "pyo"),
    ("ミャ", "mya"), ("ミュ", "myu"), ("ミョ", "myo"),
    ("リャ", "rya"), ("リュ", "ryu"), ("リョ", "ryo"),
    // loanword combinations
    ("イェ", "ye"),
    ("ウィ", "wi"), ("ウェ", "we"), ("ウォ", "wo"),
    ("ヴァ", "va"), ("ヴィ", "vi"), ("ヴェ", "ve"), ("ヴォ", "vo"), ("ヴュ", "vyu"),
    ("シェ", "she"), ("ジェ", "je"), ("チェ", "che"),
    ("ティ", "ti"), ("ディ", "di"), ("トゥ", "tu"), ("ドゥ", "du"),
    ("テュ", "tyu"), ("デュ", "dyu"),
    ("ツァ", "tsa"), ("ツィ", "tsi"), ("ツェ", "tse"), ("ツォ", "tso"),
    ("ファ", "fa"), ("フィ", "fi"), ("フェ", "fe"), ("フォ", "fo"), ("フュ", "fyu"),
    ("クァ", "kwa"), ("グァ", "gwa"),
];

static SYLLABLES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ROMAJI_TABLE.iter().copied().collect());

/// Katakana block (U+30A0..U+30FF), including ー and ・
pub fn is_katakana_char(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// A reading counts as katakana when every character is in the katakana block and at least
/// one of them is an actual kana rather than a mark
pub fn is_katakana(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(is_katakana_char)
        && text
            .chars()
            .any(|c| (KATAKANA_START..=0x30FA).contains(&(c as u32)))
}

/// Shift katakana down to hiragana; everything else passes through
pub fn to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (KATAKANA_START..=KATAKANA_END).contains(&code) {
                char::from_u32(code - HIRAGANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Look up the syllable starting at `pos`, preferring two-character combinations.
/// Returns the romaji and the number of characters consumed.
fn syllable_at(chars: &[char], pos: usize) -> Option<(&'static str, usize)> {
    if pos + 1 < chars.len() {
        let pair: String = chars[pos..pos + 2].iter().collect();
        if let Some(romaji) = SYLLABLES.get(pair.as_str()) {
            return Some((*romaji, 2));
        }
    }
    let single = chars.get(pos)?.to_string();
    SYLLABLES.get(single.as_str()).map(|romaji| (*romaji, 1))
}

fn starts_with_consonant(romaji: &str) -> bool {
    romaji
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() && !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o'))
}

/// Romanize katakana with the fixed syllable table.
///
/// ッ doubles the first consonant of the next syllable and is dropped before a vowel or at the
/// end. ー becomes `-`. Characters outside the table are kept as-is.
pub fn to_romaji(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];

        if c == SMALL_TSU {
            if let Some((next, _)) = syllable_at(&chars, pos + 1) {
                if starts_with_consonant(next) {
                    out.extend(next.chars().next());
                }
            }
            pos += 1;
            continue;
        }

        if c == LONG_VOWEL {
            out.push('-');
            pos += 1;
            continue;
        }

        match syllable_at(&chars, pos) {
            Some((romaji, consumed)) => {
                out.push_str(romaji);
                pos += consumed;
            }
            None => {
                out.push(c);
                pos += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_katakana() {
        assert!(is_katakana("コンピューター"));
        assert!(is_katakana("ティーシャツ"));
        assert!(!is_katakana("ねこ"));
        assert!(!is_katakana("Ｔシャツ"));
        assert!(!is_katakana("ー"));
        assert!(!is_katakana(""));
    }

    #[test]
    fn test_hiragana_offset_over_table() {
        for (kana, _) in ROMAJI_TABLE {
            let expected: String = kana
                .chars()
                .map(|c| char::from_u32(c as u32 - 0x60).unwrap())
                .collect();
            assert_eq!(to_hiragana(kana), expected, "{kana}");
        }
    }

    #[test]
    fn test_hiragana_keeps_marks() {
        assert_eq!(to_hiragana("コンピューター"), "こんぴゅーたー");
        assert_eq!(to_hiragana("ヴ"), "ゔ");
        assert_eq!(to_hiragana("ヷ"), "ヷ");
        assert_eq!(to_hiragana("Ｔシャツ"), "Ｔしゃつ");
    }

    #[test]
    fn test_romaji_basic() {
        assert_eq!(to_romaji("コンピューター"), "konpyu-ta-");
        assert_eq!(to_romaji("パン"), "pan");
        assert_eq!(to_romaji("ラーメン"), "ra-men");
        assert_eq!(to_romaji("スマートフォン"), "suma-tofon");
        assert_eq!(to_romaji("ティーシャツ"), "ti-shatsu");
    }

    #[test]
    fn test_small_tsu_doubles_consonant() {
        assert_eq!(to_romaji("ベッド"), "beddo");
        assert_eq!(to_romaji("サッカー"), "sakka-");
        assert_eq!(to_romaji("インターネット"), "inta-netto");
        assert_eq!(to_romaji("マッチ"), "macchi");
        assert_eq!(to_romaji("キャッシュ"), "kyasshu");
    }

    #[test]
    fn test_small_tsu_dropped_before_vowel_or_end() {
        assert_eq!(to_romaji("アッ"), "a");
        assert_eq!(to_romaji("ッア"), "a");
        assert_eq!(to_romaji("ッ"), "");
        assert_eq!(to_romaji("エッー"), "e-");
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        assert_eq!(to_romaji("Ｔシャツ"), "Ｔshatsu");
        assert_eq!(to_romaji("ア・イ"), "a・i");
    }
}
