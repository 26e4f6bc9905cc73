// Public spell check result type and its attribute flags

/// The word was found in the dictionary.
pub const RESULT_ATTR_IN_THE_DICTIONARY: u32 = 0x01;

/// The word looks like a typo and should be marked as such.
pub const RESULT_ATTR_LOOKS_LIKE_TYPO: u32 = 0x02;

/// The best suggestion clears the "recommended" confidence threshold,
/// which is stricter than the minimum inclusion threshold.
pub const RESULT_ATTR_HAS_RECOMMENDED_SUGGESTIONS: u32 = 0x04;

/// The outcome of checking a single word.
///
/// Always well-formed: every failure path in the pipeline produces the
/// conservative "not in dictionary, not reported as typo" value instead of
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    /// Attribute flags, a combination of the `RESULT_ATTR_*` constants.
    pub flags: u32,
    /// Replacement candidates, best first, at most the requested limit.
    pub suggestions: Vec<String>,
}

impl SuggestionResult {
    pub fn new(flags: u32, suggestions: Vec<String>) -> Self {
        Self { flags, suggestions }
    }

    /// Canonical "word is fine" result with no suggestions.
    pub fn in_dict_empty() -> Self {
        Self::new(RESULT_ATTR_IN_THE_DICTIONARY, Vec::new())
    }

    /// Canonical "word not found" result with no suggestions.
    ///
    /// `report_as_typo` controls whether the word should be underlined;
    /// degraded paths (pool exhausted, internal fault) pass `false` so a
    /// temporarily unavailable dictionary never flags correct text.
    pub fn not_in_dict_empty(report_as_typo: bool) -> Self {
        let flags = if report_as_typo {
            RESULT_ATTR_LOOKS_LIKE_TYPO
        } else {
            0
        };
        Self::new(flags, Vec::new())
    }

    pub fn is_in_dictionary(&self) -> bool {
        self.flags & RESULT_ATTR_IN_THE_DICTIONARY != 0
    }

    pub fn looks_like_typo(&self) -> bool {
        self.flags & RESULT_ATTR_LOOKS_LIKE_TYPO != 0
    }

    pub fn has_recommended_suggestions(&self) -> bool {
        self.flags & RESULT_ATTR_HAS_RECOMMENDED_SUGGESTIONS != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dict_empty_flags() {
        let r = SuggestionResult::in_dict_empty();
        assert!(r.is_in_dictionary());
        assert!(!r.looks_like_typo());
        assert!(!r.has_recommended_suggestions());
        assert!(r.suggestions.is_empty());
    }

    #[test]
    fn not_in_dict_reported() {
        let r = SuggestionResult::not_in_dict_empty(true);
        assert!(!r.is_in_dictionary());
        assert!(r.looks_like_typo());
    }

    #[test]
    fn not_in_dict_silent() {
        let r = SuggestionResult::not_in_dict_empty(false);
        assert!(!r.is_in_dictionary());
        assert!(!r.looks_like_typo());
        assert_eq!(r.flags, 0);
    }

    #[test]
    fn combined_flags() {
        let r = SuggestionResult::new(
            RESULT_ATTR_LOOKS_LIKE_TYPO | RESULT_ATTR_HAS_RECOMMENDED_SUGGESTIONS,
            vec!["their".to_owned()],
        );
        assert!(r.looks_like_typo());
        assert!(r.has_recommended_suggestions());
        assert!(!r.is_in_dictionary());
    }
}
