use tagrec_catalog::CatalogStore;
use tagrec_core::error::Result;
use tagrec_core::normalize::parse_tags;
use tagrec_core::traits::{ScoreStrategy, UserDirectory};
use tagrec_core::types::ItemId;

use crate::{Matcher, TagOverlap};

/// Outcome of the recommendation workflow.
///
/// `NoMatches` is a distinct, non-error signal; it is never conflated with
/// a lookup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendations {
    Ranked(Vec<ItemId>),
    NoMatches,
}

/// Username-driven orchestration: directory lookup, preference
/// normalization, then a `Matcher` pass over the catalog.
pub struct Recommender<D: UserDirectory, S: ScoreStrategy = TagOverlap> {
    directory: D,
    catalog: CatalogStore,
    matcher: Matcher<S>,
}

impl<D: UserDirectory> Recommender<D, TagOverlap> {
    pub fn new(directory: D, catalog: CatalogStore) -> Self {
        Self { directory, catalog, matcher: Matcher::new() }
    }
}

impl<D: UserDirectory, S: ScoreStrategy> Recommender<D, S> {
    pub fn with_matcher(directory: D, catalog: CatalogStore, matcher: Matcher<S>) -> Self {
        Self { directory, catalog, matcher }
    }

    /// The catalog snapshot, for rendering name/price/rating per id.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Resolve `username` to preference tags and rank the catalog.
    ///
    /// Fails with `Error::UserNotFound` when the directory has no such
    /// user. Already-purchased items stay eligible; purchase history is
    /// carried as data but never consulted here.
    pub fn get_recommendations(&self, username: &str) -> Result<Recommendations> {
        let user = self.directory.lookup_user(username)?;
        let user_tags = parse_tags(&user.preferences);
        let ids = self.matcher.recommend(&user_tags, &self.catalog);
        if ids.is_empty() {
            tracing::debug!(username, "no items matched the user's preferences");
            Ok(Recommendations::NoMatches)
        } else {
            Ok(Recommendations::Ranked(ids))
        }
    }
}
