//! Document creation, deletion, and selection.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use docvault_core::events::{DocumentEvent, SessionEvent};
use docvault_core::types::{DocumentId, FolderId};
use docvault_entity::document::{Document, DocumentMetadata, FileDescriptor};

use crate::error::DocumentError;
use crate::store::{DocumentStore, Transition};
use crate::upload::UploadPolicy;

/// Creates, deletes, and selects documents.
#[derive(Debug, Clone)]
pub struct DocumentService {
    /// The authoritative store.
    store: Arc<DocumentStore>,
    /// Upload allow-list and size limit.
    policy: UploadPolicy,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(store: Arc<DocumentStore>, policy: UploadPolicy) -> Self {
        Self { store, policy }
    }

    /// The upload policy applied by [`create_document`](Self::create_document).
    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Registers an uploaded file as a new private document.
    ///
    /// Checks the MIME type, then the size, then that the target folder
    /// (default: the current folder) exists. Nothing is stored on failure.
    /// Navigation and selection are left untouched.
    pub fn create_document(
        &self,
        descriptor: &FileDescriptor,
        metadata: &DocumentMetadata,
        target_folder_id: Option<FolderId>,
    ) -> Result<Document, DocumentError> {
        self.policy.check(descriptor)?;

        self.store.update(|prev| {
            let folder_id = target_folder_id.unwrap_or(prev.current_folder_id);
            if prev.folder(folder_id).is_none() {
                return Transition::unchanged(Err(DocumentError::FolderNotFound { folder_id }));
            }

            let document = Document::from_upload(descriptor, metadata, folder_id, Utc::now());
            let event = DocumentEvent::Uploaded {
                document_id: document.id,
                folder_id,
                title: document.title.clone(),
                size_bytes: document.size_bytes,
                mime_type: document.file_type.clone(),
            };

            info!(
                document_id = %document.id,
                folder_id = %folder_id,
                title = %document.title,
                size = document.size_bytes,
                tags = document.tags.len(),
                "Document created"
            );

            let mut next = prev.clone();
            next.documents.push(document.clone());
            Transition::commit(next, Ok(document)).with_event(event)
        })
    }

    /// Removes a document if present, clearing the selection when it
    /// pointed at it. Returns whether a document was removed.
    pub fn delete_document(&self, document_id: DocumentId) -> bool {
        self.store.update(|prev| {
            let Some(document) = prev.document(document_id) else {
                debug!(document_id = %document_id, "Delete ignored: unknown document");
                return Transition::unchanged(false);
            };
            let title = document.title.clone();

            let mut next = prev.clone();
            next.documents.retain(|d| d.id != document_id);
            let selection_cleared = next.selected_document_id == Some(document_id);
            if selection_cleared {
                next.selected_document_id = None;
            }

            info!(document_id = %document_id, title = %title, "Document deleted");
            let transition = Transition::commit(next, true)
                .with_event(DocumentEvent::Deleted { document_id, title });
            if selection_cleared {
                transition.with_event(SessionEvent::SelectionChanged { document_id: None })
            } else {
                transition
            }
        })
    }

    /// Sets or clears the selected document.
    ///
    /// Selecting an id that is not in the collection leaves the current
    /// selection as it was.
    pub fn select(&self, document_id: Option<DocumentId>) {
        self.store.update(|prev| {
            if prev.selected_document_id == document_id {
                return Transition::unchanged(());
            }
            if let Some(id) = document_id.filter(|id| prev.document(*id).is_none()) {
                debug!(document_id = %id, "Select ignored: unknown document");
                return Transition::unchanged(());
            }
            let mut next = prev.clone();
            next.selected_document_id = document_id;
            debug!(document_id = ?document_id, "Selection changed");
            Transition::commit(next, ()).with_event(SessionEvent::SelectionChanged { document_id })
        })
    }

    /// Looks up a document by id.
    pub fn get(&self, document_id: DocumentId) -> Option<Document> {
        self.store.read(|snap| snap.document(document_id).cloned())
    }

    /// The currently selected document, resolved from the live state.
    pub fn selected(&self) -> Option<Document> {
        self.store.read(|snap| snap.selected_document().cloned())
    }
}
