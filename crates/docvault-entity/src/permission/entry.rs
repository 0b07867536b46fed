//! Per-user permission entries attached to a document.

use serde::{Deserialize, Serialize};

use docvault_core::types::UserId;

use super::level::PermissionLevel;

/// A single user's permission on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// The user holding the permission.
    pub user_id: UserId,
    /// The granted level.
    pub level: PermissionLevel,
}

/// Ordered permission entries with at most one entry per user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionList(Vec<PermissionEntry>);

impl PermissionList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `level` to `user_id`.
    ///
    /// An existing entry for the user is updated in place; otherwise a new
    /// entry is appended. Returns whether the list changed.
    pub fn assign(&mut self, user_id: UserId, level: PermissionLevel) -> bool {
        match self.0.iter_mut().find(|e| e.user_id == user_id) {
            Some(entry) if entry.level == level => false,
            Some(entry) => {
                entry.level = level;
                true
            }
            None => {
                self.0.push(PermissionEntry { user_id, level });
                true
            }
        }
    }

    /// Removes the entry for `user_id`. Returns whether the list changed.
    pub fn revoke(&mut self, user_id: &UserId) -> bool {
        let before = self.0.len();
        self.0.retain(|e| &e.user_id != user_id);
        self.0.len() != before
    }

    /// The level granted to `user_id`, if any.
    pub fn level_for(&self, user_id: &UserId) -> Option<PermissionLevel> {
        self.0
            .iter()
            .find(|e| &e.user_id == user_id)
            .map(|e| e.level)
    }

    /// Iterates entries in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionEntry> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
