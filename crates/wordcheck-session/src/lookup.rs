// Capitalization-aware dictionary membership

use wordcheck_core::case::{capitalize_first_and_downcase_rest, CapitalizationKind};

use crate::dictionary::Dictionary;

/// Test a word against the dictionary under progressively broader casing
/// variants, short-circuiting at the first success.
///
/// - "text" is tested exactly as typed, nothing more.
/// - "Text" is additionally tested lowercased.
/// - "TEXT" is additionally tested lowercased and as "Text", because a
///   fully capitalized word may exist in the dictionary only in its
///   proper-noun form (e.g. "GERMANS" stored as "Germans").
///
/// Broader variants are never tried for lowercase or mixed-case input; a
/// casing the user did not type cannot justify accepting the word.
pub fn is_in_dict_for_any_capitalization(
    dict: &dyn Dictionary,
    text: &str,
    kind: CapitalizationKind,
) -> bool {
    if dict.is_valid_word(text) {
        return true;
    }
    if kind == CapitalizationKind::None {
        return false;
    }

    let lower_case_text = text.to_lowercase();
    if dict.is_valid_word(&lower_case_text) {
        return true;
    }
    if kind != CapitalizationKind::AllCapital {
        return false;
    }

    dict.is_valid_word(&capitalize_first_and_downcase_rest(&lower_case_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{ComposedWord, PreviousWords, SuggestionCandidate};
    use wordcheck_core::case::detect_capitalization;

    /// Membership-only dictionary over a fixed word set.
    struct SetDictionary(Vec<&'static str>);

    impl Dictionary for SetDictionary {
        fn is_valid_word(&self, word: &str) -> bool {
            self.0.contains(&word)
        }

        fn get_suggestions(
            &self,
            _word: &ComposedWord,
            _prev_words: Option<&PreviousWords>,
            _block_offensive: bool,
        ) -> Vec<SuggestionCandidate> {
            Vec::new()
        }
    }

    fn check(dict_words: Vec<&'static str>, text: &str) -> bool {
        let dict = SetDictionary(dict_words);
        is_in_dict_for_any_capitalization(&dict, text, detect_capitalization(text))
    }

    #[test]
    fn exact_match_always_wins() {
        assert!(check(vec!["word"], "word"));
        assert!(check(vec!["Paris"], "Paris"));
        assert!(check(vec!["iPhone"], "iPhone"));
    }

    #[test]
    fn lowercase_word_gets_no_fallback() {
        // "germans" typed lowercase does not match a capitalized entry.
        assert!(!check(vec!["Germans"], "germans"));
    }

    #[test]
    fn first_capital_falls_back_to_lowercase() {
        assert!(check(vec!["word"], "Word"));
    }

    #[test]
    fn first_capital_does_not_reach_proper_noun_transform() {
        // "GErmans" is mixed, "Germans" first-capital; neither may use the
        // capitalize-first fallback reserved for all-capital input.
        assert!(!check(vec!["geRmans"], "Germans"));
    }

    #[test]
    fn all_capital_falls_back_to_lowercase() {
        assert!(check(vec!["word"], "WORD"));
    }

    #[test]
    fn all_capital_falls_back_to_proper_noun_form() {
        assert!(check(vec!["Germans"], "GERMANS"));
    }

    #[test]
    fn mixed_case_falls_back_to_lowercase_only() {
        assert!(check(vec!["word"], "wOrd"));
        assert!(!check(vec!["Germans"], "gErmans"));
    }

    #[test]
    fn absent_word_is_absent() {
        assert!(!check(vec!["word"], "WROD"));
    }
}
