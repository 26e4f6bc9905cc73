// Dictionary-facing contracts: the lookup trait, composed queries,
// previous-word context, and the resource factory used by the pool

use std::sync::Arc;

use thiserror::Error;

/// Coordinate value meaning "no keyboard position known for this character".
pub const NOT_A_COORDINATE: i32 = -1;

/// A suggestion candidate as produced by a dictionary.
///
/// Scores are producer-defined: higher is better, but the scale is not
/// comparable across dictionary implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCandidate {
    pub word: String,
    pub score: i32,
}

impl SuggestionCandidate {
    pub fn new(word: impl Into<String>, score: i32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Ordered previous-word context for context-aware suggestion lookup.
///
/// Valid only when it holds at least one non-empty word; an invalid context
/// cannot disambiguate anything and is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviousWords {
    words: Vec<String>,
}

impl PreviousWords {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_valid(&self) -> bool {
        self.words.iter().any(|w| !w.is_empty())
    }
}

/// Per-character keyboard position provider.
///
/// The geometry itself (key layout, proximity) is an external concern; the
/// session only asks where a character sits so the dictionary's suggestion
/// primitive can weigh fat-finger distance.
pub trait KeyboardGeometry: Send + Sync {
    /// The (x, y) position of the key producing `c`, if the layout has one.
    fn key_coordinate(&self, c: char) -> Option<(i32, i32)>;
}

/// The normalized representation of a text span passed to a dictionary's
/// suggestion primitive: code points plus per-character input coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedWord {
    code_points: Vec<char>,
    coordinates: Vec<(i32, i32)>,
}

impl ComposedWord {
    /// Compose a word, deriving coordinates from the keyboard geometry when
    /// one is attached and synthetic "no geometry" coordinates otherwise.
    pub fn new(text: &str, keyboard: Option<&dyn KeyboardGeometry>) -> Self {
        let code_points: Vec<char> = text.chars().collect();
        let coordinates = code_points
            .iter()
            .map(|&c| match keyboard {
                Some(kb) => kb
                    .key_coordinate(c)
                    .unwrap_or((NOT_A_COORDINATE, NOT_A_COORDINATE)),
                None => (NOT_A_COORDINATE, NOT_A_COORDINATE),
            })
            .collect();
        Self {
            code_points,
            coordinates,
        }
    }

    pub fn code_points(&self) -> &[char] {
        &self.code_points
    }

    pub fn coordinates(&self) -> &[(i32, i32)] {
        &self.coordinates
    }

    pub fn text(&self) -> String {
        self.code_points.iter().collect()
    }
}

/// The request/response contract of a dictionary implementation.
///
/// Lookup internals (trie traversal, n-gram scoring) are entirely the
/// implementor's business; the session only relies on membership checks and
/// the suggestion primitive.
pub trait Dictionary: Send + Sync {
    /// Exact membership check for a word.
    fn is_valid_word(&self, word: &str) -> bool;

    /// Produce scored replacement candidates for a composed query.
    fn get_suggestions(
        &self,
        word: &ComposedWord,
        prev_words: Option<&PreviousWords>,
        block_offensive: bool,
    ) -> Vec<SuggestionCandidate>;
}

/// A loaded dictionary resource as held by the pool: the lookup capability
/// plus an optional keyboard geometry provider.
#[derive(Clone)]
pub struct DictionaryResource {
    pub dictionary: Arc<dyn Dictionary>,
    pub keyboard: Option<Arc<dyn KeyboardGeometry>>,
}

impl DictionaryResource {
    pub fn new(dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            dictionary,
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Arc<dyn KeyboardGeometry>) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Failure to load a dictionary resource.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary data unavailable for locale {locale}: {reason}")]
    Unavailable { locale: String, reason: String },
}

/// Creates dictionary resources for the pool. Loading is expensive, so the
/// pool calls this once per slot at construction and reuses the resources
/// for the lifetime of the session.
pub trait DictionaryFactory: Send + Sync {
    fn create(&self, locale: &str) -> Result<DictionaryResource, DictionaryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_words_validity() {
        assert!(!PreviousWords::default().is_valid());
        assert!(!PreviousWords::new(vec![String::new()]).is_valid());
        assert!(PreviousWords::new(vec!["the".to_owned()]).is_valid());
    }

    #[test]
    fn composed_word_without_geometry() {
        let w = ComposedWord::new("ab", None);
        assert_eq!(w.code_points(), &['a', 'b']);
        assert_eq!(
            w.coordinates(),
            &[
                (NOT_A_COORDINATE, NOT_A_COORDINATE),
                (NOT_A_COORDINATE, NOT_A_COORDINATE)
            ]
        );
        assert_eq!(w.text(), "ab");
    }

    #[test]
    fn composed_word_with_geometry() {
        struct RowKeyboard;
        impl KeyboardGeometry for RowKeyboard {
            fn key_coordinate(&self, c: char) -> Option<(i32, i32)> {
                c.is_ascii_lowercase()
                    .then(|| ((c as i32 - 'a' as i32) * 10, 0))
            }
        }

        let w = ComposedWord::new("ab!", Some(&RowKeyboard));
        assert_eq!(
            w.coordinates(),
            &[(0, 0), (10, 0), (NOT_A_COORDINATE, NOT_A_COORDINATE)]
        );
    }
}
