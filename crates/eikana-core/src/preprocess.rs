use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query preprocessor: index keys are built with the same rules
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC) folds full-width Latin into ASCII
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], " ").trim().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Normalize a query or index term with the default rules
pub fn normalize(text: &str) -> String {
    DefaultPreprocessor.process(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Computer \n"), "computer");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_full_width_latin() {
        assert_eq!(normalize("ＣＯＭＰＵＴＥＲ"), "computer");
    }

    #[test]
    fn test_normalize_keeps_inner_spaces() {
        assert_eq!(normalize("Mobile\nPhone"), "mobile phone");
    }
}
