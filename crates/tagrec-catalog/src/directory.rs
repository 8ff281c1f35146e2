use std::collections::HashMap;

use tagrec_core::error::{Error, Result};
use tagrec_core::traits::UserDirectory;
use tagrec_core::types::UserRecord;

/// User directory backed by records loaded once at process start.
#[derive(Debug)]
pub struct InMemoryUserDirectory {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserDirectory {
    /// Build the directory, rejecting duplicate usernames at load.
    pub fn load(records: Vec<UserRecord>) -> Result<Self> {
        let mut users = HashMap::with_capacity(records.len());
        for record in records {
            let username = record.username.clone();
            if users.insert(username.clone(), record).is_some() {
                return Err(Error::Validation(format!("duplicate username {}", username)));
            }
        }
        tracing::debug!(users = users.len(), "user directory loaded");
        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn lookup_user(&self, username: &str) -> Result<UserRecord> {
        self.users
            .get(username)
            .cloned()
            .ok_or_else(|| Error::UserNotFound(username.to_string()))
    }
}
