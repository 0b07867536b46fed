//! Folder creation, deletion, navigation, and listing.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use docvault_core::config::FolderDeletePolicy;
use docvault_core::events::{FolderEvent, SessionEvent};
use docvault_core::types::{DocumentId, FolderId};
use docvault_entity::folder::{Folder, FolderListing};

use crate::error::DocumentError;
use crate::store::{DocumentStore, Transition};

/// Manages the folder tree and the navigation cursor.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// The authoritative store.
    store: Arc<DocumentStore>,
    /// How deletion treats a folder's contents.
    delete_policy: FolderDeletePolicy,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<DocumentStore>, delete_policy: FolderDeletePolicy) -> Self {
        Self {
            store,
            delete_policy,
        }
    }

    /// The configured deletion policy.
    pub fn delete_policy(&self) -> FolderDeletePolicy {
        self.delete_policy
    }

    /// Creates a child folder under `parent_id` (default: the current
    /// folder).
    ///
    /// The name is trimmed; a blank name is a no-op returning `Ok(None)`.
    /// Duplicate sibling names are allowed.
    pub fn create_folder(
        &self,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> Result<Option<Folder>, DocumentError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Folder creation ignored: blank name");
            return Ok(None);
        }

        self.store.update(|prev| {
            let parent_id = parent_id.unwrap_or(prev.current_folder_id);
            if prev.folder(parent_id).is_none() {
                return Transition::unchanged(Err(DocumentError::FolderNotFound {
                    folder_id: parent_id,
                }));
            }

            let folder = Folder::new_child(name, parent_id);
            info!(folder_id = %folder.id, parent_id = %parent_id, name, "Folder created");

            let event = FolderEvent::Created {
                folder_id: folder.id,
                parent_id,
                name: folder.name.clone(),
            };
            let mut next = prev.clone();
            next.folders.push(folder.clone());
            Transition::commit(next, Ok(Some(folder))).with_event(event)
        })
    }

    /// Deletes a folder according to the configured policy.
    ///
    /// Unknown ids are a no-op. The root can never be deleted. If the
    /// navigation cursor pointed into a removed folder it moves to the
    /// nearest surviving ancestor, and the selection is cleared if the
    /// selected document was removed.
    pub fn delete_folder(&self, folder_id: FolderId) -> Result<(), DocumentError> {
        if folder_id.is_root() {
            return Err(DocumentError::RootFolderImmutable);
        }

        let policy = self.delete_policy;
        self.store.update(|prev| {
            let Some(folder) = prev.folder(folder_id) else {
                debug!(folder_id = %folder_id, "Delete ignored: unknown folder");
                return Transition::unchanged(Ok(()));
            };

            let listing = prev.list_children(folder_id);
            let removed_folders: Vec<FolderId> = match policy {
                FolderDeletePolicy::Reject if !listing.is_empty() => {
                    warn!(
                        folder_id = %folder_id,
                        subfolders = listing.subfolders.len(),
                        documents = listing.documents.len(),
                        "Delete rejected: folder is not empty"
                    );
                    return Transition::unchanged(Err(DocumentError::FolderNotEmpty {
                        name: folder.name.clone(),
                        subfolders: listing.subfolders.len(),
                        documents: listing.documents.len(),
                    }));
                }
                FolderDeletePolicy::Cascade => prev.descendants(folder_id),
                FolderDeletePolicy::Reject | FolderDeletePolicy::Orphan => Vec::new(),
            };

            let mut removed: HashSet<FolderId> = removed_folders.iter().copied().collect();
            removed.insert(folder_id);

            let removed_documents: Vec<DocumentId> = match policy {
                FolderDeletePolicy::Cascade => prev
                    .documents
                    .iter()
                    .filter(|d| removed.contains(&d.folder_id))
                    .map(|d| d.id)
                    .collect(),
                FolderDeletePolicy::Reject | FolderDeletePolicy::Orphan => Vec::new(),
            };

            let mut next = prev.clone();
            next.folders.retain(|f| !removed.contains(&f.id));
            next.documents.retain(|d| !removed_documents.contains(&d.id));

            let mut session_events = Vec::new();
            if removed.contains(&prev.current_folder_id) {
                let target = prev.nearest_surviving_ancestor(prev.current_folder_id, &removed);
                next.current_folder_id = target;
                session_events.push(SessionEvent::Navigated { folder_id: target });
            }
            if next
                .selected_document_id
                .is_some_and(|id| removed_documents.contains(&id))
            {
                next.selected_document_id = None;
                session_events.push(SessionEvent::SelectionChanged { document_id: None });
            }

            info!(
                folder_id = %folder_id,
                name = %folder.name,
                policy = %policy,
                removed_folders = removed_folders.len(),
                removed_documents = removed_documents.len(),
                "Folder deleted"
            );

            let event = FolderEvent::Deleted {
                folder_id,
                name: folder.name.clone(),
                removed_folders,
                removed_documents,
            };
            let mut transition = Transition::commit(next, Ok(())).with_event(event);
            for session_event in session_events {
                transition = transition.with_event(session_event);
            }
            transition
        })
    }

    /// Moves the navigation cursor. The target is not checked for
    /// existence.
    pub fn navigate(&self, folder_id: FolderId) {
        self.store.update(|prev| {
            if prev.current_folder_id == folder_id {
                return Transition::unchanged(());
            }
            let mut next = prev.clone();
            next.current_folder_id = folder_id;
            debug!(folder_id = %folder_id, "Navigated");
            Transition::commit(next, ()).with_event(SessionEvent::Navigated { folder_id })
        })
    }

    /// The folder at the navigation cursor.
    pub fn current_folder_id(&self) -> FolderId {
        self.store.read(|snap| snap.current_folder_id)
    }

    /// Looks up a folder by id.
    pub fn get(&self, folder_id: FolderId) -> Option<Folder> {
        self.store.read(|snap| snap.folder(folder_id).cloned())
    }

    /// Direct subfolders and documents of `folder_id`.
    pub fn list_children(&self, folder_id: FolderId) -> FolderListing {
        self.store.read(|snap| snap.list_children(folder_id))
    }

    /// The parent of `folder_id`, if it has one that still exists.
    pub fn resolve_parent(&self, folder_id: FolderId) -> Option<Folder> {
        self.store.read(|snap| snap.resolve_parent(folder_id).cloned())
    }
}
