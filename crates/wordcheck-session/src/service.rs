// Session-owning service: per-locale dictionary pools, shared configuration,
// and the dictionary change signal

use std::sync::Arc;
use std::time::Duration;

use hashbrown::HashMap;
use parking_lot::Mutex;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::dictionary::DictionaryFactory;
use crate::gatherer::SuggestionsGatherer;
use crate::notify::ChangeNotifier;
use crate::pool::{DictionaryPool, PoolError};
use crate::session::SpellCheckerSession;

/// Tunable values for sessions and their shared resources.
///
/// Threshold values are policy, not algorithmic necessity; they are carried
/// as explicit configuration rather than process-wide constants so the core
/// stays testable with injected values.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Dictionary resources per locale pool, sized for expected concurrent
    /// session load.
    pub pool_size: usize,
    /// Bounded wait for a pooled resource before degrading.
    pub pool_timeout: Duration,
    /// Result cache capacity, in entries.
    pub cache_capacity: usize,
    /// Minimum candidate score for inclusion in suggestions.
    pub min_suggestion_score: i32,
    /// Stricter score a top candidate must clear to be "recommended".
    pub recommended_score: i32,
    /// Ask dictionaries to withhold offensive candidates.
    pub block_offensive: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pool_size: 2,
            pool_timeout: Duration::from_secs(2),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            min_suggestion_score: 0,
            recommended_score: 150,
            block_offensive: true,
        }
    }
}

/// Owns everything sessions share: the dictionary factory, one pool per
/// active locale, the configuration, and the change notifier.
pub struct SpellCheckerService {
    factory: Arc<dyn DictionaryFactory>,
    config: SessionConfig,
    pools: Mutex<HashMap<String, Arc<DictionaryPool>>>,
    notifier: Arc<ChangeNotifier>,
}

impl SpellCheckerService {
    pub fn new(factory: Arc<dyn DictionaryFactory>, config: SessionConfig) -> Self {
        Self {
            factory,
            config,
            pools: Mutex::new(HashMap::new()),
            notifier: Arc::new(ChangeNotifier::new()),
        }
    }

    /// The pool for a locale, creating and populating it on first use.
    pub fn get_dictionary_pool(&self, locale: &str) -> Result<Arc<DictionaryPool>, PoolError> {
        let mut pools = self.pools.lock();
        if let Some(pool) = pools.get(locale) {
            return Ok(Arc::clone(pool));
        }
        let pool = Arc::new(DictionaryPool::new(
            self.factory.as_ref(),
            locale,
            self.config.pool_size,
            self.config.pool_timeout,
        )?);
        pools.insert(locale.to_owned(), Arc::clone(&pool));
        Ok(pool)
    }

    /// A gatherer for one query, carrying the service's thresholds.
    pub fn new_suggestions_gatherer(&self, text: &str, limit: usize) -> SuggestionsGatherer {
        SuggestionsGatherer::new(
            text,
            limit,
            self.config.min_suggestion_score,
            self.config.recommended_score,
        )
    }

    /// Create a session for a locale, wired to the service's change signal
    /// so its cache is cleared when the dictionary data changes.
    pub fn new_session(&self, locale: &str) -> Result<SpellCheckerSession, PoolError> {
        let pool = self.get_dictionary_pool(locale)?;
        let mut session = SpellCheckerSession::new(locale, pool, self.config.clone());
        session.attach_change_notifier(Arc::clone(&self.notifier));
        Ok(session)
    }

    pub fn notifier(&self) -> &Arc<ChangeNotifier> {
        &self.notifier
    }

    /// Signal that the backing dictionary data changed. Every attached
    /// session invalidates its result cache in full.
    pub fn notify_dictionary_changed(&self) {
        self.notifier.notify_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{
        ComposedWord, Dictionary, DictionaryError, DictionaryResource, PreviousWords,
        SuggestionCandidate,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EmptyDictionary;

    impl Dictionary for EmptyDictionary {
        fn is_valid_word(&self, _word: &str) -> bool {
            false
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

    struct CountingFactory {
        created: AtomicUsize,
    }

    impl DictionaryFactory for CountingFactory {
        fn create(&self, _locale: &str) -> Result<DictionaryResource, DictionaryError> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Ok(DictionaryResource::new(Arc::new(EmptyDictionary)))
        }
    }

    #[test]
    fn pool_is_created_once_per_locale() {
        let factory = Arc::new(CountingFactory {
            created: AtomicUsize::new(0),
        });
        let service = SpellCheckerService::new(
            Arc::clone(&factory) as Arc<dyn DictionaryFactory>,
            SessionConfig {
                pool_size: 3,
                ..SessionConfig::default()
            },
        );

        let a = service.get_dictionary_pool("en").unwrap();
        let b = service.get_dictionary_pool("en").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(factory.created.load(Ordering::SeqCst), 3);

        service.get_dictionary_pool("fr").unwrap();
        assert_eq!(factory.created.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = SessionConfig::default();
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(config.recommended_score > config.min_suggestion_score);
    }
}
