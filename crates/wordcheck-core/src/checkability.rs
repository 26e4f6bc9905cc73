// Checkability classifier: cheap lexical filters run before any dictionary
// resource is spent on a word

use crate::script::Script;

/// Whether (and why not) a text span is worth spell checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckabilityVerdict {
    /// The text should go through full suggestion lookup.
    Checkable,
    /// Empty or a single code point; nothing to correct.
    TooShort,
    /// The first code point is neither a script letter nor an apostrophe.
    FirstLetterUncheckable,
    /// Contains `@` or `/`; probably an e-mail address, a URI, or an
    /// ad-hoc combination of two words. Not worth underlining.
    EmailOrUrl,
    /// Contains a period. Suggestion lookup on period-joined fragments
    /// produces degenerate output, so these are diverted to a per-segment
    /// validity check instead.
    ContainsPeriod,
    /// Fewer than three quarters of the code points are script letters.
    TooManyNonLetters,
}

/// Classify a text span for checkability.
///
/// Pure and deterministic; first matching rule wins:
/// 1. length <= 1 -> `TooShort`
/// 2. first code point not a script letter and not `'` ->
///    `FirstLetterUncheckable`
/// 3. any `@` or `/` -> `EmailOrUrl` (wins over a period elsewhere in the
///    same word)
/// 4. any `.` -> `ContainsPeriod`
/// 5. letter count below 3/4 of the length -> `TooManyNonLetters`,
///    otherwise `Checkable`
pub fn classify(text: &str, script: Script) -> CheckabilityVerdict {
    let mut chars = text.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return CheckabilityVerdict::TooShort,
    };
    if chars.next().is_none() {
        return CheckabilityVerdict::TooShort;
    }

    if !script.is_letter(first) && first != '\'' {
        return CheckabilityVerdict::FirstLetterUncheckable;
    }

    let mut length = 0usize;
    let mut letter_count = 0usize;
    let mut contains_period = false;
    for c in text.chars() {
        if c == '@' || c == '/' {
            return CheckabilityVerdict::EmailOrUrl;
        }
        if c == '.' {
            contains_period = true;
        }
        if script.is_letter(c) {
            letter_count += 1;
        }
        length += 1;
    }
    if contains_period {
        return CheckabilityVerdict::ContainsPeriod;
    }

    // Heuristic: only spell check if at least 3/4 of the code points are
    // letters of the session's script.
    if letter_count * 4 < length * 3 {
        CheckabilityVerdict::TooManyNonLetters
    } else {
        CheckabilityVerdict::Checkable
    }
}
