//! Integration tests for document upload, tagging, and access.

mod helpers;

use docvault_core::types::{DocumentId, FolderId};
use docvault_entity::document::{DocumentMetadata, FileDescriptor};
use docvault_entity::permission::{AccessLevel, PermissionLevel};
use docvault_service::DocumentError;

use helpers::{MIB, TestVault};

#[test]
fn test_budget_upload_defaults() {
    let app = TestVault::new();
    let doc = app
        .vault
        .documents()
        .create_document(
            &FileDescriptor::new("budget.pdf", "application/pdf", 1024),
            &DocumentMetadata::empty(),
            None,
        )
        .unwrap();

    assert_eq!(doc.title, "budget");
    assert_eq!(doc.access, AccessLevel::Private);
    assert!(doc.tags.is_empty());
    assert!(doc.permissions.is_empty());
    assert_eq!(doc.folder_id, FolderId::root());

    let listing = app.vault.folders().list_children(FolderId::root());
    assert_eq!(listing.documents.len(), 1);
}

#[test]
fn test_rejected_uploads_leave_no_trace() {
    let app = TestVault::new();
    let docs = app.vault.documents();

    let err = docs
        .create_document(
            &FileDescriptor::new("notes.txt", "text/plain", 10),
            &DocumentMetadata::empty(),
            None,
        )
        .unwrap_err();
    assert!(matches!(err, DocumentError::InvalidFileType { .. }));

    let err = docs
        .create_document(
            &FileDescriptor::new("huge.pdf", "application/pdf", 10 * MIB + 1),
            &DocumentMetadata::empty(),
            None,
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "File is too large. Maximum size is 10MB.");

    assert!(app.vault.store().snapshot().documents.is_empty());
}

#[test]
fn test_tags_and_permissions_round_trip() {
    let app = TestVault::new();
    let id = app.upload_pdf("contract.pdf", FolderId::root());

    app.vault.tags().add_tag(id, "legal");
    app.vault.tags().add_tag(id, "legal");
    app.vault.tags().add_tag(id, "  ");
    app.vault
        .access()
        .assign_permission(id, "user1".into(), PermissionLevel::View);
    app.vault
        .access()
        .assign_permission(id, "user1".into(), PermissionLevel::Edit);
    app.vault.access().set_access(id, AccessLevel::Restricted);

    let doc = app.vault.documents().get(id).unwrap();
    assert_eq!(doc.tags.as_slice(), ["legal"]);
    assert_eq!(doc.permissions.len(), 1);
    assert_eq!(
        doc.permissions.level_for(&"user1".into()),
        Some(PermissionLevel::Edit)
    );
    assert_eq!(doc.access, AccessLevel::Restricted);
}

#[test]
fn test_selection_follows_live_document() {
    let app = TestVault::new();
    let id = app.upload_pdf("a.pdf", FolderId::root());
    app.vault.documents().select(Some(id));

    app.vault.tags().add_tag(id, "fresh");
    let selected = app.vault.documents().selected().unwrap();
    assert!(selected.tags.contains("fresh"));

    app.vault.documents().delete_document(id);
    assert!(app.vault.documents().selected().is_none());
    assert_eq!(app.vault.store().snapshot().selected_document_id, None);
}

#[test]
fn test_unknown_ids_are_noops() {
    let app = TestVault::new();
    app.upload_pdf("a.pdf", FolderId::root());
    let before = app.vault.store().snapshot();

    let ghost = DocumentId::new();
    assert!(app.vault.tags().add_tag(ghost, "x").is_none());
    assert!(app.vault.access().set_access(ghost, AccessLevel::Public).is_none());
    assert!(
        app.vault
            .access()
            .revoke_permission(ghost, &"user1".into())
            .is_none()
    );
    assert!(!app.vault.documents().delete_document(ghost));

    assert_eq!(app.vault.store().snapshot(), before);
}
