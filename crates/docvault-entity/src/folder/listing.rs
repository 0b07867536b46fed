//! Folder contents projection.

use serde::{Deserialize, Serialize};

use docvault_core::types::FolderId;

use super::model::Folder;
use crate::document::Document;

/// The direct contents of one folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderListing {
    /// The listed folder.
    pub folder_id: FolderId,
    /// Direct child folders, in creation order.
    pub subfolders: Vec<Folder>,
    /// Documents directly inside the folder, in upload order.
    pub documents: Vec<Document>,
}

impl FolderListing {
    /// Whether the folder has neither subfolders nor documents.
    pub fn is_empty(&self) -> bool {
        self.subfolders.is_empty() && self.documents.is_empty()
    }
}
