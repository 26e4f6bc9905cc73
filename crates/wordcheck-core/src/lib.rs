// wordcheck-core: shared types for the word-level spell check session.
//
// Pure data types and functions only: script classification, capitalization
// patterns, the checkability classifier, and the public result type. No I/O
// and no synchronization primitives live here.

pub mod case;
pub mod checkability;
pub mod result;
pub mod script;

pub use case::CapitalizationKind;
pub use checkability::CheckabilityVerdict;
pub use result::SuggestionResult;
pub use script::Script;
