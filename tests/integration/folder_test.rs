//! Integration tests for the folder tree and deletion policies.

mod helpers;

use docvault_core::config::FolderDeletePolicy;
use docvault_core::types::FolderId;
use docvault_service::DocumentError;

use helpers::TestVault;

#[test]
fn test_fresh_root_is_empty() {
    let app = TestVault::new();
    let listing = app.vault.folders().list_children(FolderId::root());
    assert!(listing.is_empty());
    assert!(app.vault.folders().resolve_parent(FolderId::root()).is_none());
}

#[test]
fn test_reports_navigation() {
    let app = TestVault::new();
    let reports = app.mkdir("Reports", FolderId::root());

    app.vault.folders().navigate(reports);
    assert_eq!(app.vault.folders().current_folder_id(), reports);
    assert!(app.vault.folders().list_children(reports).is_empty());

    let parent = app.vault.folders().resolve_parent(reports).unwrap();
    assert_eq!(parent.id, FolderId::root());
    assert_eq!(parent.name, "Root");
}

#[test]
fn test_reject_policy_protects_contents() {
    let app = TestVault::with_policy(FolderDeletePolicy::Reject);
    let reports = app.mkdir("Reports", FolderId::root());
    app.mkdir("2024", reports);

    let err = app.vault.folders().delete_folder(reports).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Folder 'Reports' is not empty (1 subfolders, 0 documents)"
    );
    assert!(app.vault.folders().get(reports).is_some());
}

#[test]
fn test_cascade_policy_repairs_cursor_and_selection() {
    let app = TestVault::with_policy(FolderDeletePolicy::Cascade);
    let reports = app.mkdir("Reports", FolderId::root());
    let year = app.mkdir("2024", reports);
    let q1 = app.mkdir("Q1", year);
    let doc = app.upload_pdf("q1.pdf", q1);

    app.vault.folders().navigate(q1);
    app.vault.documents().select(Some(doc));
    app.vault.folders().delete_folder(year).unwrap();

    let snap = app.vault.store().snapshot();
    assert_eq!(snap.current_folder_id, reports);
    assert_eq!(snap.selected_document_id, None);
    assert!(snap.documents.is_empty());
    assert_eq!(snap.folders.len(), 2);
}

#[test]
fn test_orphan_policy_leaves_dangling_children() {
    let app = TestVault::with_policy(FolderDeletePolicy::Orphan);
    let reports = app.mkdir("Reports", FolderId::root());
    let year = app.mkdir("2024", reports);
    let doc = app.upload_pdf("a.pdf", reports);

    app.vault.folders().delete_folder(reports).unwrap();

    assert!(app.vault.folders().get(year).is_some());
    assert!(app.vault.folders().resolve_parent(year).is_none());
    assert_eq!(app.vault.documents().get(doc).unwrap().folder_id, reports);
}

#[test]
fn test_root_is_immutable() {
    let app = TestVault::with_policy(FolderDeletePolicy::Cascade);
    assert_eq!(
        app.vault.folders().delete_folder(FolderId::root()),
        Err(DocumentError::RootFolderImmutable)
    );
}
