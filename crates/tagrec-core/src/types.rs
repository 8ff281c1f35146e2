//! Domain types shared by the catalog store and the matcher.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type ItemId = u32;
pub type TagSet = BTreeSet<String>;

/// A recommendable catalog item.
///
/// - `id`: unique across the catalog, assigned at load time
/// - `name`/`category`: descriptive, immutable after load
/// - `tags`: normalized lowercase tokens; never empty for a well-formed
///   item (an item with no tags can never be recommended)
/// - `price`: non-negative
/// - `rating`: 0 through 5
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub tags: TagSet,
    pub price: f64,
    pub rating: f64,
}

/// A user record as supplied by the user directory.
///
/// `preferences` stays in its raw comma-separated form; the workflow
/// normalizes it per request. `purchase_history` is carried as data but
/// does not influence scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub age: u32,
    pub gender: String,
    pub location: String,
    pub preferences: String,
    #[serde(default)]
    pub purchase_history: Vec<String>,
}

/// An item id paired with its match score. Higher is better; zero-score
/// items never appear in a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredItem {
    pub id: ItemId,
    pub score: u32,
}
