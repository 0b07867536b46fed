//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docvault_core::types::FolderId;

/// Display name of the root folder.
pub const ROOT_FOLDER_NAME: &str = "Root";

/// A folder in the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None only for the root).
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// The root folder every store starts with.
    pub fn root() -> Self {
        Self {
            id: FolderId::root(),
            name: ROOT_FOLDER_NAME.to_string(),
            parent_id: None,
            created_at: Utc::now(),
        }
    }

    /// A new child folder with a fresh identifier. `name` is stored as given.
    pub fn new_child(name: impl Into<String>, parent_id: FolderId) -> Self {
        Self {
            id: FolderId::new(),
            name: name.into(),
            parent_id: Some(parent_id),
            created_at: Utc::now(),
        }
    }

    /// Check if this is the root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
