// Bounded LRU cache of suggestion results, cleared wholesale when the
// backing dictionary data changes

use parking_lot::Mutex;
use tracing::debug;

use crate::dictionary::PreviousWords;

/// Separator between the query and its context words in a cache key. An
/// object-replacement character cannot occur in checkable input, so keys
/// never collide with plain text.
const KEY_DELIMITER: char = '\u{FFFC}';

/// Default number of cached entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// A cached `(suggestions, flags)` pair, immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSuggestions {
    pub suggestions: Vec<String>,
    pub flags: u32,
}

/// Build the cache key for a query and its optional context.
///
/// When the context is absent or invalid the key is the query alone, so a
/// contextual and a context-free result for the same text share one slot.
/// An invalid context cannot disambiguate, so the collapse is deliberate.
fn generate_key(query: &str, prev_words: Option<&PreviousWords>) -> String {
    match prev_words {
        Some(prev) if !query.is_empty() && prev.is_valid() => {
            let mut key = String::with_capacity(query.len() + 16);
            key.push_str(query);
            for word in prev.words() {
                key.push(KEY_DELIMITER);
                key.push_str(word);
            }
            key
        }
        _ => query.to_owned(),
    }
}

/// Fixed-capacity suggestion cache with strict least-recently-used
/// eviction on both read and write access.
///
/// Entries are few (default 50), so the LRU order is kept as a plain
/// vector with the most recently used entry at the front; a linear scan is
/// cheaper than a linked structure at this size. All bookkeeping sits
/// behind one mutex, making get/put/clear safe to call concurrently.
pub struct SuggestionsCache {
    capacity: usize,
    entries: Mutex<Vec<(String, CachedSuggestions)>>,
}

impl SuggestionsCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// Look up a cached result, marking it most recently used on a hit.
    pub fn get(&self, query: &str, prev_words: Option<&PreviousWords>) -> Option<CachedSuggestions> {
        let key = generate_key(query, prev_words);
        let mut entries = self.entries.lock();
        let index = entries.iter().position(|(k, _)| *k == key)?;
        let entry = entries.remove(index);
        let value = entry.1.clone();
        entries.insert(0, entry);
        debug!(query, "suggestion cache hit");
        Some(value)
    }

    /// Store a result. A no-op for an empty query: there is nothing worth
    /// caching in that state.
    pub fn put(
        &self,
        query: &str,
        prev_words: Option<&PreviousWords>,
        suggestions: Vec<String>,
        flags: u32,
    ) {
        if query.is_empty() || self.capacity == 0 {
            return;
        }
        let key = generate_key(query, prev_words);
        let mut entries = self.entries.lock();
        if let Some(index) = entries.iter().position(|(k, _)| *k == key) {
            entries.remove(index);
        }
        entries.insert(0, (key, CachedSuggestions { suggestions, flags }));
        entries.truncate(self.capacity);
    }

    /// Drop every entry. Called when an external notification signals that
    /// the backing dictionary data changed; staleness is resolved by blunt
    /// invalidation rather than fine-grained tracking.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for SuggestionsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> (Vec<String>, u32) {
        (vec![word.to_owned()], 0x02)
    }

    fn prev(words: &[&str]) -> PreviousWords {
        PreviousWords::new(words.iter().map(|w| (*w).to_owned()).collect())
    }

    #[test]
    fn round_trip() {
        let cache = SuggestionsCache::default();
        let (suggestions, flags) = entry("the");
        cache.put("hte", None, suggestions.clone(), flags);

        let hit = cache.get("hte", None).unwrap();
        assert_eq!(hit.suggestions, suggestions);
        assert_eq!(hit.flags, flags);
    }

    #[test]
    fn miss_returns_none() {
        let cache = SuggestionsCache::default();
        assert!(cache.get("absent", None).is_none());
    }

    #[test]
    fn empty_query_is_not_cached() {
        let cache = SuggestionsCache::default();
        cache.put("", None, vec!["x".to_owned()], 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let cache = SuggestionsCache::new(DEFAULT_CACHE_CAPACITY);
        for i in 0..=DEFAULT_CACHE_CAPACITY {
            let (s, f) = entry("w");
            cache.put(&format!("word{i}"), None, s, f);
        }
        assert_eq!(cache.len(), DEFAULT_CACHE_CAPACITY);
        // The first-inserted key was the least recently accessed.
        assert!(cache.get("word0", None).is_none());
        assert!(cache.get("word1", None).is_some());
    }

    #[test]
    fn get_refreshes_lru_position() {
        let cache = SuggestionsCache::new(2);
        let (s, f) = entry("w");
        cache.put("a", None, s.clone(), f);
        cache.put("b", None, s.clone(), f);
        // Touch "a" so "b" becomes the eviction victim.
        assert!(cache.get("a", None).is_some());
        cache.put("c", None, s, f);
        assert!(cache.get("a", None).is_some());
        assert!(cache.get("b", None).is_none());
    }

    #[test]
    fn put_existing_key_replaces_value() {
        let cache = SuggestionsCache::new(2);
        cache.put("a", None, vec!["one".to_owned()], 0);
        cache.put("a", None, vec!["two".to_owned()], 1);
        assert_eq!(cache.len(), 1);
        let hit = cache.get("a", None).unwrap();
        assert_eq!(hit.suggestions, vec!["two".to_owned()]);
        assert_eq!(hit.flags, 1);
    }

    #[test]
    fn clear_empties_everything() {
        let cache = SuggestionsCache::default();
        let (s, f) = entry("w");
        cache.put("a", None, s.clone(), f);
        cache.put("b", None, s, f);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a", None).is_none());
    }

    #[test]
    fn contextual_and_plain_keys_are_distinct() {
        let cache = SuggestionsCache::default();
        let ctx = prev(&["around"]);
        cache.put("hte", None, vec!["the".to_owned()], 0);
        cache.put("hte", Some(&ctx), vec!["they".to_owned()], 0);

        assert_eq!(
            cache.get("hte", None).unwrap().suggestions,
            vec!["the".to_owned()]
        );
        assert_eq!(
            cache.get("hte", Some(&ctx)).unwrap().suggestions,
            vec!["they".to_owned()]
        );
    }

    #[test]
    fn invalid_context_collapses_to_plain_key() {
        let cache = SuggestionsCache::default();
        let invalid = prev(&[""]);
        cache.put("hte", Some(&invalid), vec!["the".to_owned()], 0);
        // Retrievable with no context at all: the key collapsed to the text.
        assert!(cache.get("hte", None).is_some());
    }

    #[test]
    fn zero_capacity_cache_stores_nothing() {
        let cache = SuggestionsCache::new(0);
        cache.put("a", None, vec!["x".to_owned()], 0);
        assert!(cache.get("a", None).is_none());
    }
}
