//! Access level and per-user permission management.

use std::sync::Arc;

use tracing::{debug, info};

use docvault_core::events::DocumentEvent;
use docvault_core::types::{DocumentId, UserId};
use docvault_entity::document::Document;
use docvault_entity::permission::{AccessLevel, PermissionLevel};

use super::edit::edit_document;
use crate::store::DocumentStore;

/// Manages a document's access level and permission entries.
///
/// None of this is enforced; the values are descriptive only.
#[derive(Debug, Clone)]
pub struct AccessService {
    /// The authoritative store.
    store: Arc<DocumentStore>,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Replaces the document's access level.
    pub fn set_access(&self, document_id: DocumentId, level: AccessLevel) -> Option<Document> {
        edit_document(&self.store, document_id, |doc| {
            if doc.access == level {
                return None;
            }
            info!(document_id = %document_id, from = %doc.access, to = %level, "Access changed");
            doc.access = level;
            Some(DocumentEvent::AccessChanged {
                document_id,
                access: level.to_string(),
            })
        })
    }

    /// Grants `level` to the trimmed `user_id`, replacing any existing level
    /// for that user in place.
    ///
    /// A blank user id leaves the document unchanged.
    pub fn assign_permission(
        &self,
        document_id: DocumentId,
        user_id: UserId,
        level: PermissionLevel,
    ) -> Option<Document> {
        let user_id = UserId::new(user_id.as_str().trim());
        edit_document(&self.store, document_id, |doc| {
            if user_id.as_str().is_empty() {
                debug!(document_id = %document_id, "Permission ignored: no user selected");
                return None;
            }
            if !doc.permissions.assign(user_id.clone(), level) {
                return None;
            }
            info!(document_id = %document_id, user_id = %user_id, level = %level, "Permission assigned");
            Some(DocumentEvent::PermissionAssigned {
                document_id,
                user_id,
                level: level.to_string(),
            })
        })
    }

    /// Removes the permission entry for `user_id` if present.
    pub fn revoke_permission(&self, document_id: DocumentId, user_id: &UserId) -> Option<Document> {
        edit_document(&self.store, document_id, |doc| {
            if !doc.permissions.revoke(user_id) {
                return None;
            }
            info!(document_id = %document_id, user_id = %user_id, "Permission revoked");
            Some(DocumentEvent::PermissionRevoked {
                document_id,
                user_id: user_id.clone(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentService;
    use crate::upload::UploadPolicy;
    use docvault_entity::document::{DocumentMetadata, FileDescriptor};

    fn setup() -> (AccessService, DocumentId) {
        let store = Arc::new(DocumentStore::new());
        let docs = DocumentService::new(Arc::clone(&store), UploadPolicy::default());
        let doc = docs
            .create_document(
                &FileDescriptor::new("sheet.xls", "application/vnd.ms-excel", 2048),
                &DocumentMetadata::empty(),
                None,
            )
            .unwrap();
        (AccessService::new(store), doc.id)
    }

    #[test]
    fn test_set_access() {
        let (access, id) = setup();
        let doc = access.set_access(id, AccessLevel::Public).unwrap();
        assert_eq!(doc.access, AccessLevel::Public);
        let doc = access.set_access(id, AccessLevel::Restricted).unwrap();
        assert_eq!(doc.access, AccessLevel::Restricted);
    }

    #[test]
    fn test_reassign_replaces_level() {
        let (access, id) = setup();
        access.assign_permission(id, "user1".into(), PermissionLevel::View);
        let doc = access
            .assign_permission(id, "user1".into(), PermissionLevel::Edit)
            .unwrap();
        assert_eq!(doc.permissions.len(), 1);
        assert_eq!(
            doc.permissions.level_for(&"user1".into()),
            Some(PermissionLevel::Edit)
        );
    }

    #[test]
    fn test_other_users_keep_order() {
        let (access, id) = setup();
        access.assign_permission(id, "user1".into(), PermissionLevel::View);
        access.assign_permission(id, "user2".into(), PermissionLevel::Download);
        access.assign_permission(id, "user3".into(), PermissionLevel::View);
        let doc = access
            .assign_permission(id, "user2".into(), PermissionLevel::Edit)
            .unwrap();
        let users: Vec<&str> = doc.permissions.iter().map(|e| e.user_id.as_str()).collect();
        assert_eq!(users, ["user1", "user2", "user3"]);
    }

    #[test]
    fn test_blank_user_is_ignored() {
        let (access, id) = setup();
        let mut events = access.store.subscribe_events();
        let before = access.store.snapshot();

        let doc = access
            .assign_permission(id, UserId::new(""), PermissionLevel::View)
            .unwrap();
        assert!(doc.permissions.is_empty());
        let doc = access
            .assign_permission(id, UserId::new("   "), PermissionLevel::Edit)
            .unwrap();
        assert!(doc.permissions.is_empty());

        assert_eq!(access.store.snapshot(), before);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_user_id_is_trimmed() {
        let (access, id) = setup();
        access.assign_permission(id, " user1 ".into(), PermissionLevel::View);
        let doc = access
            .assign_permission(id, "user1".into(), PermissionLevel::Download)
            .unwrap();
        assert_eq!(doc.permissions.len(), 1);
        assert_eq!(
            doc.permissions.level_for(&"user1".into()),
            Some(PermissionLevel::Download)
        );
    }

    #[test]
    fn test_revoke() {
        let (access, id) = setup();
        access.assign_permission(id, "user1".into(), PermissionLevel::View);
        let doc = access.revoke_permission(id, &"user2".into()).unwrap();
        assert_eq!(doc.permissions.len(), 1);
        let doc = access.revoke_permission(id, &"user1".into()).unwrap();
        assert!(doc.permissions.is_empty());
    }
}
