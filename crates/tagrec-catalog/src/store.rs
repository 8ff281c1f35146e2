use std::collections::HashMap;

use tagrec_core::error::{Error, Result};
use tagrec_core::normalize::normalize_tokens;
use tagrec_core::types::{Item, ItemId};

/// Immutable, validated set of recommendable items.
///
/// Load order is preserved and observable through `all_items`; the matcher
/// relies on it when breaking score ties. The store never mutates after
/// `load`, so it can be shared across threads without locking.
#[derive(Debug)]
pub struct CatalogStore {
    items: Vec<Item>,
    by_id: HashMap<ItemId, usize>,
}

impl CatalogStore {
    /// Validate and freeze the catalog.
    ///
    /// Tags are re-normalized on the way in, then each item must satisfy:
    /// unique id, non-empty tag set, non-negative price, rating within 0–5.
    /// Any violation is fatal (`Error::Validation`) — the system must not
    /// start with a malformed catalog.
    pub fn load(mut items: Vec<Item>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter_mut().enumerate() {
            item.tags = normalize_tokens(&item.tags);
            if item.tags.is_empty() {
                return Err(Error::Validation(format!(
                    "item {} ({}) has an empty tag set",
                    item.id, item.name
                )));
            }
            if item.price < 0.0 {
                return Err(Error::Validation(format!(
                    "item {} has negative price {}",
                    item.id, item.price
                )));
            }
            if !(0.0..=5.0).contains(&item.rating) {
                return Err(Error::Validation(format!(
                    "item {} has rating {} outside 0..=5",
                    item.id, item.rating
                )));
            }
            if by_id.insert(item.id, pos).is_some() {
                return Err(Error::Validation(format!("duplicate item id {}", item.id)));
            }
        }
        tracing::debug!(items = items.len(), "catalog loaded");
        Ok(Self { items, by_id })
    }

    /// All items in load order.
    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids handed out by the matcher always resolve; a miss here indicates
    /// a consistency bug, not bad user input.
    pub fn get_by_id(&self, id: ItemId) -> Result<&Item> {
        self.by_id
            .get(&id)
            .map(|&pos| &self.items[pos])
            .ok_or_else(|| Error::NotFound(format!("item id {}", id)))
    }
}
