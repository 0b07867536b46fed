//! Tag management on individual documents.

use std::sync::Arc;

use tracing::{debug, info};

use docvault_core::events::DocumentEvent;
use docvault_core::types::DocumentId;
use docvault_entity::document::Document;

use super::edit::edit_document;
use crate::store::DocumentStore;

/// Adds and removes document tags.
#[derive(Debug, Clone)]
pub struct TagService {
    /// The authoritative store.
    store: Arc<DocumentStore>,
}

impl TagService {
    /// Creates a new tag service.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Appends a trimmed tag.
    ///
    /// Blank input and exact duplicates leave the document unchanged.
    /// Returns the document as stored afterwards, or `None` if the id is
    /// unknown.
    pub fn add_tag(&self, document_id: DocumentId, raw_tag: &str) -> Option<Document> {
        edit_document(&self.store, document_id, |doc| {
            let Some(tag) = doc.tags.insert(raw_tag).map(str::to_string) else {
                debug!(document_id = %document_id, raw_tag, "Tag ignored: blank or duplicate");
                return None;
            };
            info!(document_id = %document_id, tag = %tag, "Tag added");
            Some(DocumentEvent::Tagged { document_id, tag })
        })
    }

    /// Removes an exact-match tag if present.
    pub fn remove_tag(&self, document_id: DocumentId, tag: &str) -> Option<Document> {
        edit_document(&self.store, document_id, |doc| {
            if !doc.tags.remove(tag) {
                return None;
            }
            info!(document_id = %document_id, tag, "Tag removed");
            Some(DocumentEvent::Untagged {
                document_id,
                tag: tag.to_string(),
            })
        })
    }
}
