// The per-request decision pipeline: cache probe, checkability filtering,
// pooled dictionary lookup, suggestion aggregation, cache store
//
// Reentrant: concurrent requests may run against one session. Every branch
// that touches the pool borrows exactly one handle and returns it through
// the RAII guard, including on panic; any fault inside the pipeline is
// caught at the top and converted into the conservative empty result.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error};
use wordcheck_core::case::detect_capitalization;
use wordcheck_core::checkability::{classify, CheckabilityVerdict};
use wordcheck_core::result::{
    SuggestionResult, RESULT_ATTR_HAS_RECOMMENDED_SUGGESTIONS, RESULT_ATTR_IN_THE_DICTIONARY,
    RESULT_ATTR_LOOKS_LIKE_TYPO,
};
use wordcheck_core::script::Script;

use crate::cache::SuggestionsCache;
use crate::dictionary::{ComposedWord, PreviousWords};
use crate::gatherer::SuggestionsGatherer;
use crate::lookup::is_in_dict_for_any_capitalization;
use crate::notify::{ChangeNotifier, ListenerId};
use crate::pool::DictionaryPool;
use crate::service::SessionConfig;

/// Typographic apostrophe, normalized to `'` before lookup so dictionary
/// entries stored with the plain quote still match.
const TYPOGRAPHIC_APOSTROPHE: char = '\u{2019}';

/// A word-level spell check session for one locale.
///
/// Holds the shared dictionary pool, its own result cache, and the script
/// used by the checkability classifier. Dropping the session detaches it
/// from the change notifier it was wired to.
pub struct SpellCheckerSession {
    locale: String,
    script: Script,
    pool: Arc<DictionaryPool>,
    cache: Arc<SuggestionsCache>,
    config: SessionConfig,
    subscription: Option<(Arc<ChangeNotifier>, ListenerId)>,
}

impl SpellCheckerSession {
    pub fn new(locale: &str, pool: Arc<DictionaryPool>, config: SessionConfig) -> Self {
        Self {
            locale: locale.to_owned(),
            script: Script::from_locale(locale),
            cache: Arc::new(SuggestionsCache::new(config.cache_capacity)),
            pool,
            config,
            subscription: None,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Subscribe this session's cache invalidation to a change notifier,
    /// replacing any previous subscription.
    pub fn attach_change_notifier(&mut self, notifier: Arc<ChangeNotifier>) {
        self.detach_change_notifier();
        let cache = Arc::clone(&self.cache);
        let id = notifier.subscribe(Arc::new(move || cache.clear()));
        self.subscription = Some((notifier, id));
    }

    pub fn detach_change_notifier(&mut self) {
        if let Some((notifier, id)) = self.subscription.take() {
            notifier.unsubscribe(id);
        }
    }

    /// Check a single word and produce replacement suggestions.
    pub fn get_suggestions(&self, text: &str, suggestion_limit: usize) -> SuggestionResult {
        self.get_suggestions_with_context(text, None, suggestion_limit)
    }

    /// Context-aware form: `prev_words` carries the words preceding `text`,
    /// newest last. An absent or invalid context behaves like none at all.
    pub fn get_suggestions_with_context(
        &self,
        text: &str,
        prev_words: Option<&PreviousWords>,
        suggestion_limit: usize,
    ) -> SuggestionResult {
        // A fault in the pipeline must never reach the caller; degrade to
        // the empty non-typo result instead.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.check_word(text, prev_words, suggestion_limit)
        }));
        match outcome {
            Ok(result) => result,
            Err(_) => {
                error!(locale = %self.locale, "spell check pipeline panicked");
                SuggestionResult::not_in_dict_empty(false)
            }
        }
    }

    fn check_word(
        &self,
        in_text: &str,
        prev_words: Option<&PreviousWords>,
        suggestion_limit: usize,
    ) -> SuggestionResult {
        if let Some(cached) = self.cache.get(in_text, prev_words) {
            return SuggestionResult::new(cached.flags, cached.suggestions);
        }

        let verdict = classify(in_text, self.script);
        if verdict != CheckabilityVerdict::Checkable {
            debug!(?verdict, "word filtered before full lookup");
            return self.check_filtered_word(in_text, verdict);
        }

        let text = in_text.replace(TYPOGRAPHIC_APOSTROPHE, "'");
        let capitalization = detect_capitalization(&text);
        let mut gatherer = SuggestionsGatherer::new(
            &text,
            suggestion_limit,
            self.config.min_suggestion_score,
            self.config.recommended_score,
        );

        let is_in_dict;
        {
            let handle = self.pool.acquire_default();
            let Some(resource) = handle.resource() else {
                return SuggestionResult::not_in_dict_empty(false);
            };
            let composed = ComposedWord::new(&text, resource.keyboard.as_deref());
            let candidates = resource.dictionary.get_suggestions(
                &composed,
                prev_words,
                self.config.block_offensive,
            );
            for candidate in &candidates {
                gatherer.add_candidate(&candidate.word, candidate.score);
            }
            is_in_dict = is_in_dict_for_any_capitalization(
                resource.dictionary.as_ref(),
                &text,
                capitalization,
            );
        }

        let gathered = gatherer.finalize(capitalization);
        let mut flags = if is_in_dict {
            RESULT_ATTR_IN_THE_DICTIONARY
        } else {
            RESULT_ATTR_LOOKS_LIKE_TYPO
        };
        if gathered.has_recommended {
            flags |= RESULT_ATTR_HAS_RECOMMENDED_SUGGESTIONS;
        }

        self.cache
            .put(&text, prev_words, gathered.suggestions.clone(), flags);
        SuggestionResult::new(flags, gathered.suggestions)
    }

    /// Handle a word the classifier filtered out. A period-containing word
    /// gets a lightweight per-segment validity check; everything else gets
    /// a plain membership check. These results are never cached.
    fn check_filtered_word(&self, text: &str, verdict: CheckabilityVerdict) -> SuggestionResult {
        let handle = self.pool.acquire_default();
        let Some(resource) = handle.resource() else {
            return SuggestionResult::not_in_dict_empty(false);
        };
        let dict = resource.dictionary.as_ref();

        if verdict == CheckabilityVerdict::ContainsPeriod {
            let segments = split_on_periods(text);
            if !segments.is_empty() && segments.iter().all(|s| dict.is_valid_word(s)) {
                // Probably two joined words: offer both the space-separated
                // and the sentence-break reading.
                return SuggestionResult::new(
                    RESULT_ATTR_LOOKS_LIKE_TYPO | RESULT_ATTR_HAS_RECOMMENDED_SUGGESTIONS,
                    vec![segments.join(" "), segments.join(". ")],
                );
            }
        }

        if dict.is_valid_word(text) {
            SuggestionResult::in_dict_empty()
        } else {
            SuggestionResult::not_in_dict_empty(verdict == CheckabilityVerdict::ContainsPeriod)
        }
    }
}

impl Drop for SpellCheckerSession {
    fn drop(&mut self) {
        self.detach_change_notifier();
    }
}

/// Split on `.` discarding trailing empty segments, so "foo.bar" gives
/// `["foo", "bar"]` and "foo." gives `["foo"]` while inner empties (as in
/// "foo..bar") are kept and fail the validity check.
fn split_on_periods(text: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = text.split('.').collect();
    while segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}
