//! Immutable view of the store's state at one instant.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use docvault_core::types::{DocumentId, FolderId};
use docvault_entity::document::Document;
use docvault_entity::folder::{Folder, FolderListing};

/// Everything a view layer needs to render: both collections plus the
/// navigation cursor and selection.
///
/// The selected document is stored by id and resolved on demand, so it
/// can never drift from the document collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// All folders in creation order. The root is always first.
    pub folders: Vec<Folder>,
    /// All documents in upload order.
    pub documents: Vec<Document>,
    /// The folder the user is looking at.
    pub current_folder_id: FolderId,
    /// The document open in the details panel, if any.
    pub selected_document_id: Option<DocumentId>,
}

impl StoreSnapshot {
    /// The initial state: only the root folder, positioned at root.
    pub fn initial() -> Self {
        Self {
            folders: vec![Folder::root()],
            documents: Vec::new(),
            current_folder_id: FolderId::root(),
            selected_document_id: None,
        }
    }

    /// Looks up a folder by id.
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Looks up a document by id.
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub(crate) fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == id)
    }

    /// The folder at the navigation cursor, if it still exists.
    pub fn current_folder(&self) -> Option<&Folder> {
        self.folder(self.current_folder_id)
    }

    /// The selected document, resolved against the current collection.
    pub fn selected_document(&self) -> Option<&Document> {
        self.selected_document_id.and_then(|id| self.document(id))
    }

    /// Direct subfolders and documents of `folder_id`, in insertion order.
    ///
    /// An unknown folder lists as empty.
    pub fn list_children(&self, folder_id: FolderId) -> FolderListing {
        FolderListing {
            folder_id,
            subfolders: self
                .folders
                .iter()
                .filter(|f| f.parent_id == Some(folder_id))
                .cloned()
                .collect(),
            documents: self
                .documents
                .iter()
                .filter(|d| d.folder_id == folder_id)
                .cloned()
                .collect(),
        }
    }

    /// The parent of `folder_id`, or `None` for the root, an unknown
    /// folder, or a parent that no longer exists.
    pub fn resolve_parent(&self, folder_id: FolderId) -> Option<&Folder> {
        self.folder(folder_id)
            .and_then(|f| f.parent_id)
            .and_then(|parent_id| self.folder(parent_id))
    }

    /// Every folder below `folder_id`, breadth-first, excluding itself.
    ///
    /// Each folder is visited once, so a malformed parent graph cannot
    /// loop.
    pub fn descendants(&self, folder_id: FolderId) -> Vec<FolderId> {
        let mut seen: HashSet<FolderId> = HashSet::from([folder_id]);
        let mut queue = vec![folder_id];
        let mut out = Vec::new();
        let mut cursor = 0;
        while cursor < queue.len() {
            let parent = queue[cursor];
            cursor += 1;
            for child in self.folders.iter().filter(|f| f.parent_id == Some(parent)) {
                if seen.insert(child.id) {
                    queue.push(child.id);
                    out.push(child.id);
                }
            }
        }
        out
    }

    /// The nearest existing folder on the path from `folder_id` to the
    /// root, skipping any folder in `removed`. Falls back to the root.
    pub(crate) fn nearest_surviving_ancestor(
        &self,
        folder_id: FolderId,
        removed: &HashSet<FolderId>,
    ) -> FolderId {
        let mut visited = HashSet::new();
        let mut cursor = Some(folder_id);
        while let Some(id) = cursor {
            if !visited.insert(id) {
                break;
            }
            match self.folder(id) {
                Some(folder) if !removed.contains(&id) => return folder.id,
                Some(folder) => cursor = folder.parent_id,
                None => break,
            }
        }
        FolderId::root()
    }
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
