// Script classification: which code points count as letters for checkability

/// A code-point classification grouping used to decide which characters
/// count as "letters" when judging whether a word is worth spell checking.
///
/// A spell checker session recognizes exactly one script; characters from
/// other scripts are treated as non-letters so that, say, a Latin-script
/// session never tries to correct Cyrillic input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Cyrillic,
}

/// Languages written in Cyrillic among the locales a session may be
/// created for. Everything else maps to Latin.
const CYRILLIC_LANGUAGES: &[&str] = &["ru", "uk", "bg", "be", "sr", "mk", "kk", "ky"];

impl Script {
    /// Derive the script from a locale string such as `"en_US"` or `"ru"`.
    ///
    /// Only the language part (up to the first `_` or `-`) is examined.
    pub fn from_locale(locale: &str) -> Self {
        let language = locale
            .split(['_', '-'])
            .next()
            .unwrap_or(locale)
            .to_ascii_lowercase();
        if CYRILLIC_LANGUAGES.contains(&language.as_str()) {
            Self::Cyrillic
        } else {
            Self::Latin
        }
    }

    /// Whether a code point is a letter of this script.
    ///
    /// The ranges are deliberately coarse: they cover the base alphabets
    /// plus the extended blocks that show up in loanwords and diacritics,
    /// which is enough to separate "word-like" input from symbol soup.
    pub fn is_letter(self, c: char) -> bool {
        let cp = c as u32;
        match self {
            Self::Latin => {
                c.is_ascii_alphabetic()
                    || (0xC0..=0xD6).contains(&cp)        // À-Ö
                    || (0xD8..=0xF6).contains(&cp)        // Ø-ö
                    || (0xF8..=0x2AF).contains(&cp)       // ø-ɏ and IPA extensions
                    || (0x1E00..=0x1EFF).contains(&cp)    // Latin Extended Additional
            }
            Self::Cyrillic => {
                (0x400..=0x481).contains(&cp)             // Ѐ-ҁ
                    || (0x48A..=0x52F).contains(&cp)      // Ҋ-ԯ
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_ascii_letters() {
        assert!(Script::Latin.is_letter('a'));
        assert!(Script::Latin.is_letter('Z'));
        assert!(!Script::Latin.is_letter('3'));
        assert!(!Script::Latin.is_letter('.'));
        assert!(!Script::Latin.is_letter('\''));
    }

    #[test]
    fn latin_accented_letters() {
        assert!(Script::Latin.is_letter('\u{00E9}')); // é
        assert!(Script::Latin.is_letter('\u{00D6}')); // Ö
        assert!(Script::Latin.is_letter('\u{1E9E}')); // ẞ
    }

    #[test]
    fn latin_rejects_cyrillic() {
        assert!(!Script::Latin.is_letter('\u{0436}')); // ж
    }

    #[test]
    fn cyrillic_letters() {
        assert!(Script::Cyrillic.is_letter('\u{0436}')); // ж
        assert!(Script::Cyrillic.is_letter('\u{0410}')); // А
        assert!(!Script::Cyrillic.is_letter('a'));
    }

    #[test]
    fn multiplication_sign_is_not_a_letter() {
        // U+00D7 sits between À-Ö and Ø-ö and must stay excluded.
        assert!(!Script::Latin.is_letter('\u{00D7}'));
        assert!(!Script::Latin.is_letter('\u{00F7}'));
    }

    #[test]
    fn from_locale_language_only() {
        assert_eq!(Script::from_locale("en"), Script::Latin);
        assert_eq!(Script::from_locale("ru"), Script::Cyrillic);
    }

    #[test]
    fn from_locale_with_region() {
        assert_eq!(Script::from_locale("en_US"), Script::Latin);
        assert_eq!(Script::from_locale("ru_RU"), Script::Cyrillic);
        assert_eq!(Script::from_locale("uk-UA"), Script::Cyrillic);
    }

    #[test]
    fn from_locale_unknown_defaults_to_latin() {
        assert_eq!(Script::from_locale(""), Script::Latin);
        assert_eq!(Script::from_locale("zz_ZZ"), Script::Latin);
    }
}
