//! Folder-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::{DocumentId, FolderId};

/// Events related to folder operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FolderEvent {
    /// A folder was created.
    Created {
        /// The folder ID.
        folder_id: FolderId,
        /// The parent folder ID.
        parent_id: FolderId,
        /// The folder name.
        name: String,
    },
    /// A folder was deleted.
    Deleted {
        /// The folder ID.
        folder_id: FolderId,
        /// The folder name.
        name: String,
        /// Descendant folders removed along with it.
        removed_folders: Vec<FolderId>,
        /// Documents removed along with it.
        removed_documents: Vec<DocumentId>,
    },
}
