// Suggestion gatherer: keeps the best-scored candidates for one query and
// re-applies the query's capitalization on finalize

use tracing::debug;
use wordcheck_core::case::{apply_capitalization, CapitalizationKind};

use crate::dictionary::SuggestionCandidate;

/// Aggregated output of a gathering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatheredSuggestions {
    /// Best-first suggestions, capitalized like the query.
    pub suggestions: Vec<String>,
    /// Whether the top suggestion cleared the "recommended" threshold.
    pub has_recommended: bool,
}

/// Collects scored candidates for a single query and keeps the top-`limit`
/// set, best first, with ties broken by first-seen order.
///
/// The gatherer applies the two score thresholds (minimum inclusion and
/// the stricter "recommended" level) but does not decide dictionary
/// membership or typo status; the session merges those separately.
pub struct SuggestionsGatherer {
    text: String,
    limit: usize,
    min_score: i32,
    recommended_score: i32,
    /// Sorted by score, descending; equal scores keep insertion order.
    candidates: Vec<SuggestionCandidate>,
}

impl SuggestionsGatherer {
    pub fn new(text: &str, limit: usize, min_score: i32, recommended_score: i32) -> Self {
        Self {
            text: text.to_owned(),
            limit,
            min_score,
            recommended_score,
            candidates: Vec::with_capacity(limit.min(32)),
        }
    }

    /// Offer one candidate. Candidates below the minimum score, or unable
    /// to displace the current top-`limit` set, are dropped.
    pub fn add_candidate(&mut self, word: &str, score: i32) {
        if self.limit == 0 || score < self.min_score {
            return;
        }
        if self.candidates.len() >= self.limit
            && self
                .candidates
                .last()
                .is_some_and(|worst| score <= worst.score)
        {
            return;
        }
        // Insert after every candidate scoring at least as high, so that
        // equal scores stay in first-seen order.
        let index = self.candidates.partition_point(|c| c.score >= score);
        self.candidates
            .insert(index, SuggestionCandidate::new(word, score));
        self.candidates.truncate(self.limit);
    }

    /// Finish gathering: capitalize the surviving suggestions like the
    /// original query and evaluate the recommended threshold.
    pub fn finalize(self, kind: CapitalizationKind) -> GatheredSuggestions {
        let has_recommended = self
            .candidates
            .first()
            .is_some_and(|best| best.score >= self.recommended_score);
        let suggestions: Vec<String> = self
            .candidates
            .iter()
            .map(|c| apply_capitalization(&c.word, kind))
            .collect();
        debug!(
            text = %self.text,
            count = suggestions.len(),
            has_recommended,
            "gathered suggestions"
        );
        GatheredSuggestions {
            suggestions,
            has_recommended,
        }
    }
}
