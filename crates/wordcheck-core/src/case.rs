// Capitalization pattern detection and re-application

/// Classification of a word's casing pattern.
///
/// Drives both the fallback order of dictionary membership checks (a word
/// typed in capitals may be stored capitalized) and the re-capitalization
/// of returned suggestions so they match what the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapitalizationKind {
    /// No uppercase letters: "word". Also covers input with no letters.
    None,
    /// Exactly the first code point is uppercase: "Word".
    FirstCapital,
    /// Every letter is uppercase: "WORD".
    AllCapital,
    /// Anything else: "wOrd", "McWord".
    Mixed,
}

/// Detect the capitalization pattern of a word.
///
/// Non-letter characters (digits, apostrophes) are ignored when counting,
/// so "can't" is `None` and "CAN'T" is `AllCapital`.
pub fn detect_capitalization(text: &str) -> CapitalizationKind {
    let mut letter_count = 0usize;
    let mut upper_count = 0usize;
    let mut first_is_upper = false;

    for (i, c) in text.chars().enumerate() {
        if c.is_uppercase() {
            upper_count += 1;
            if i == 0 {
                first_is_upper = true;
            }
        }
        if c.is_alphabetic() {
            letter_count += 1;
        }
    }

    if upper_count == 0 {
        CapitalizationKind::None
    } else if upper_count == 1 && first_is_upper {
        CapitalizationKind::FirstCapital
    } else if letter_count == upper_count {
        CapitalizationKind::AllCapital
    } else {
        CapitalizationKind::Mixed
    }
}

/// Uppercase the first code point and lowercase the rest.
///
/// Used both to re-capitalize suggestions for a `FirstCapital` query and as
/// the last membership fallback for an `AllCapital` query (a dictionary may
/// store "Germans" while the user typed "GERMANS").
pub fn capitalize_first_and_downcase_rest(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

/// Re-apply the capitalization pattern of the original query to a
/// suggestion returned by the dictionary.
///
/// `None` and `Mixed` leave the suggestion as the dictionary produced it.
pub fn apply_capitalization(word: &str, kind: CapitalizationKind) -> String {
    match kind {
        CapitalizationKind::None | CapitalizationKind::Mixed => word.to_owned(),
        CapitalizationKind::AllCapital => word.to_uppercase(),
        CapitalizationKind::FirstCapital => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(word.len());
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        }
    }
}
