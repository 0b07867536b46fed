//! Shared single-document edit transition.

use docvault_core::events::EventPayload;
use docvault_core::types::DocumentId;
use docvault_entity::document::Document;

use crate::store::{DocumentStore, Transition};

/// Applies `edit` to a copy of one document and commits the result.
///
/// `edit` returns the event describing the change, or `None` when it left
/// the document as it was; in that case, and for unknown ids, the state is
/// not touched. Returns the document as stored after the call, or `None`
/// for an unknown id.
pub(crate) fn edit_document<E, F>(
    store: &DocumentStore,
    document_id: DocumentId,
    edit: F,
) -> Option<Document>
where
    E: Into<EventPayload>,
    F: FnOnce(&mut Document) -> Option<E>,
{
    store.update(|prev| {
        let Some(current) = prev.document(document_id) else {
            return Transition::unchanged(None);
        };

        let mut updated = current.clone();
        let Some(event) = edit(&mut updated) else {
            return Transition::unchanged(Some(updated));
        };

        let mut next = prev.clone();
        if let Some(slot) = next.document_mut(document_id) {
            *slot = updated.clone();
        }
        Transition::commit(next, Some(updated)).with_event(event)
    })
}
