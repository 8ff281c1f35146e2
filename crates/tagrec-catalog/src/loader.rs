//! JSON loaders for catalog items and user records.
//!
//! The on-disk item form carries `tags` as a comma-separated string, the
//! way upstream product feeds ship it; tags are normalized into a set on
//! the way in.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use tagrec_core::config::{expand_path, Config};
use tagrec_core::normalize::parse_tags;
use tagrec_core::traits::CatalogSource;
use tagrec_core::types::{Item, ItemId, UserRecord};

#[derive(Debug, Deserialize)]
struct RawItem {
    id: ItemId,
    name: String,
    category: String,
    tags: String,
    price: f64,
    rating: f64,
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        Item {
            id: raw.id,
            name: raw.name,
            category: raw.category,
            tags: parse_tags(&raw.tags),
            price: raw.price,
            rating: raw.rating,
        }
    }
}

/// Read a JSON array of items from `path`.
pub fn load_items_from_path(path: &Path) -> anyhow::Result<Vec<Item>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog items from {}", path.display()))?;
    let raw: Vec<RawItem> = serde_json::from_str(&content)
        .with_context(|| format!("parsing catalog items from {}", path.display()))?;
    Ok(raw.into_iter().map(Item::from).collect())
}

/// Read a JSON array of user records from `path`.
pub fn load_users_from_path(path: &Path) -> anyhow::Result<Vec<UserRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading user records from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing user records from {}", path.display()))
}

/// Catalog source reading items and users from configured JSON files.
pub struct FileCatalogSource {
    items_path: PathBuf,
    users_path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(items_path: PathBuf, users_path: PathBuf) -> Self {
        Self { items_path, users_path }
    }

    /// Resolve paths from config keys `catalog.items_path` and
    /// `catalog.users_path`, with `~` and `${VAR}` expansion.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let items: String = config.get("catalog.items_path")?;
        let users: String = config.get("catalog.users_path")?;
        Ok(Self::new(expand_path(items), expand_path(users)))
    }
}

impl CatalogSource for FileCatalogSource {
    fn load_items(&self) -> anyhow::Result<Vec<Item>> {
        load_items_from_path(&self.items_path)
    }

    fn load_users(&self) -> anyhow::Result<Vec<UserRecord>> {
        load_users_from_path(&self.users_path)
    }
}
