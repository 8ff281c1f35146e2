//! tagrec-match
//!
//! The matching/scoring engine: `Matcher` ranks a catalog against a user's
//! preference tags, `Recommender` wires it to a user directory for the
//! username-driven workflow.

pub mod recommender;
pub mod scoring;

pub use recommender::{Recommendations, Recommender};
pub use scoring::TagOverlap;

use tagrec_catalog::CatalogStore;
use tagrec_core::normalize::normalize_tokens;
use tagrec_core::traits::ScoreStrategy;
use tagrec_core::types::{ItemId, ScoredItem, TagSet};

/// Pure scoring/ranking over a catalog snapshot.
///
/// Holds nothing beyond the strategy, so one instance can serve any number
/// of concurrent callers; every call is an independent computation over its
/// inputs.
pub struct Matcher<S: ScoreStrategy = TagOverlap> {
    strategy: S,
}

impl Matcher<TagOverlap> {
    pub fn new() -> Self {
        Self { strategy: TagOverlap }
    }
}

impl Default for Matcher<TagOverlap> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScoreStrategy> Matcher<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// Rank catalog items by match strength against `user_tags`.
    ///
    /// Zero-score items are dropped. The sort is stable and descending by
    /// score, so equal scores keep the catalog's load order. An empty tag
    /// set yields an empty result, never an error.
    pub fn recommend(&self, user_tags: &TagSet, catalog: &CatalogStore) -> Vec<ItemId> {
        self.scored(user_tags, catalog).into_iter().map(|s| s.id).collect()
    }

    /// Like `recommend`, but keeps the scores for rendering or diagnostics.
    pub fn scored(&self, user_tags: &TagSet, catalog: &CatalogStore) -> Vec<ScoredItem> {
        // Re-normalize so callers handing in raw tokens rank identically.
        let user_tags = normalize_tokens(user_tags);
        if user_tags.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<ScoredItem> = catalog
            .all_items()
            .iter()
            .map(|item| ScoredItem { id: item.id, score: self.strategy.score(&user_tags, &item.tags) })
            .filter(|s| s.score > 0)
            .collect();
        // Stable sort: ties stay in catalog load order
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        tracing::debug!(candidates = catalog.len(), matched = hits.len(), "scored catalog");
        hits
    }
}
