//! Users that can receive document permissions.

use serde::{Deserialize, Serialize};

use docvault_core::config::UserEntryConfig;
use docvault_core::types::UserId;

/// A user known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier.
    pub id: UserId,
    /// Display name.
    pub display_name: String,
}

/// Read-only list of users offered as permission targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory(Vec<User>);

impl UserDirectory {
    /// Builds a directory from configured entries, keeping the first
    /// entry for any repeated id.
    pub fn from_config(entries: &[UserEntryConfig]) -> Self {
        let mut users: Vec<User> = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = UserId::new(entry.id.trim());
            if users.iter().any(|u| u.id == id) {
                continue;
            }
            users.push(User {
                id,
                display_name: entry.name.clone(),
            });
        }
        Self(users)
    }

    /// Looks up a user by id.
    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.0.iter().find(|u| &u.id == id)
    }

    /// The display name for `id`, falling back to the id itself.
    pub fn display_name<'a>(&'a self, id: &'a UserId) -> &'a str {
        self.get(id)
            .map(|u| u.display_name.as_str())
            .unwrap_or_else(|| id.as_str())
    }

    /// Iterates users in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.0.iter()
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
