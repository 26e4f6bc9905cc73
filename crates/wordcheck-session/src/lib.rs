// wordcheck-session: the word-level spell check session core.
//
// Composes a blocking-with-timeout dictionary pool, a bounded invalidatable
// LRU result cache, the checkability classifier from wordcheck-core,
// capitalization-fallback membership lookup, and a score-ordered suggestion
// gatherer into one reentrant, panic-safe pipeline.
//
// Architecture:
//   - `dictionary`: the external contracts (lookup trait, composed queries,
//     resource factory); lookup internals are not this crate's business
//   - `pool`: fixed-size blocking pool of loaded dictionary resources
//   - `cache`: LRU cache of finished results, cleared on data-change signals
//   - `gatherer`: top-N candidate aggregation and re-capitalization
//   - `lookup`: casing-variant membership fallback
//   - `notify`: the data-change callback registry
//   - `service` / `session`: per-locale resource ownership and the
//     per-request pipeline

pub mod cache;
pub mod dictionary;
pub mod gatherer;
pub mod lookup;
pub mod notify;
pub mod pool;
pub mod service;
pub mod session;

// Re-export key types for convenient access.
pub use cache::SuggestionsCache;
pub use dictionary::{
    ComposedWord, Dictionary, DictionaryError, DictionaryFactory, DictionaryResource,
    KeyboardGeometry, PreviousWords, SuggestionCandidate,
};
pub use gatherer::{GatheredSuggestions, SuggestionsGatherer};
pub use notify::ChangeNotifier;
pub use pool::{DictionaryHandle, DictionaryPool, PoolError};
pub use service::{SessionConfig, SpellCheckerService};
pub use session::SpellCheckerSession;
