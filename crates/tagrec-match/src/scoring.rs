use tagrec_core::traits::ScoreStrategy;
use tagrec_core::types::TagSet;

/// Exact-token overlap: the count of tags the two sets share.
///
/// The only shipped strategy. Fuzzy or weighted similarity would slot in
/// as another `ScoreStrategy` behind the same `recommend` contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagOverlap;

impl ScoreStrategy for TagOverlap {
    fn score(&self, user_tags: &TagSet, item_tags: &TagSet) -> u32 {
        user_tags.intersection(item_tags).count() as u32
    }
}
