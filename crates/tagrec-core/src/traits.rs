use crate::error::Result;
use crate::types::{Item, TagSet, UserRecord};

/// Resolves usernames to user records. A lookup miss is a recoverable,
/// caller-correctable error (`Error::UserNotFound`), never an internal one.
pub trait UserDirectory: Send + Sync {
    fn lookup_user(&self, username: &str) -> Result<UserRecord>;
}

/// Supplies the initial catalog and user data at process start.
pub trait CatalogSource: Send + Sync {
    fn load_items(&self) -> anyhow::Result<Vec<Item>>;
    fn load_users(&self) -> anyhow::Result<Vec<UserRecord>>;
}

/// Scores one item's tag set against a user's tag set.
///
/// Higher is better; zero means "never recommend". Implementations must be
/// pure so that rankings stay deterministic.
pub trait ScoreStrategy: Send + Sync {
    fn score(&self, user_tags: &TagSet, item_tags: &TagSet) -> u32;
}
