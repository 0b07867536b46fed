//! Integration tests for the command dispatcher and the deferred upload.

mod helpers;

use std::time::Duration;

use serde_json::json;

use docvault_core::events::{DocumentEvent, EventPayload};
use docvault_entity::document::FileDescriptor;
use docvault_service::UploadStatus;

use helpers::{TestVault, send};

#[tokio::test(start_paused = true)]
async fn test_upload_commits_only_after_latency() {
    let app = TestVault::new();
    let mut form = app.vault.new_upload_form();
    form.select_file(FileDescriptor::new("budget.pdf", "application/pdf", 1024))
        .unwrap();

    let uploads = app.vault.uploads().clone();
    let store = app.vault.store().clone();
    let handle = tokio::spawn(async move {
        let result = uploads.submit(&mut form, None).await;
        (result, form)
    });

    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert!(store.snapshot().documents.is_empty());

    let (result, form) = handle.await.unwrap();
    let doc = result.unwrap();
    assert_eq!(doc.title, "budget");
    assert_eq!(form.status(), UploadStatus::Idle);
    assert_eq!(store.snapshot().documents.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_interrupted_submit_stores_nothing() {
    let app = TestVault::new();
    let mut d = app.dispatcher();
    send(
        &mut d,
        json!({"command": "select_file", "name": "budget.pdf", "mime_type": "application/pdf", "size_bytes": 1024}),
    )
    .await;

    let submit = json!({"command": "submit"}).to_string();
    tokio::select! {
        _ = d.dispatch_line(&submit) => panic!("submit finished before the signal"),
        _ = tokio::time::sleep(Duration::from_millis(500)) => {}
    }

    assert!(app.vault.store().snapshot().documents.is_empty());
    assert_eq!(d.form().status(), UploadStatus::Valid);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(app.vault.store().snapshot().documents.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_form_session_over_commands() {
    let app = TestVault::new();
    let mut d = app.dispatcher();

    let outcome = send(
        &mut d,
        json!({"command": "select_file", "name": "slides.pdf", "mime_type": "application/pdf", "size_bytes": 2048}),
    )
    .await;
    assert!(outcome.ok);
    assert_eq!(outcome.payload.as_ref().unwrap()["metadata"]["title"], "slides");

    send(&mut d, json!({"command": "set_title", "title": "Quarterly slides"})).await;
    send(&mut d, json!({"command": "set_tags", "tags": "q3, deck, q3"})).await;

    let outcome = send(&mut d, json!({"command": "submit"})).await;
    assert!(outcome.ok, "{outcome:?}");
    let doc = outcome.payload.unwrap();
    assert_eq!(doc["title"], "Quarterly slides");
    assert_eq!(doc["tags"], json!(["q3", "deck"]));

    let outcome = send(&mut d, json!({"command": "submit"})).await;
    assert!(!outcome.ok);
    assert_eq!(
        outcome.message.as_deref(),
        Some("Select a valid file before uploading")
    );
}

#[tokio::test]
async fn test_folder_commands() {
    let app = TestVault::new();
    let mut d = app.dispatcher();

    let outcome = send(&mut d, json!({"command": "create_folder", "name": "Reports"})).await;
    let folder_id = outcome.payload.unwrap()["id"].clone();

    let outcome = send(&mut d, json!({"command": "navigate", "folder_id": folder_id})).await;
    assert!(outcome.ok);
    assert_eq!(outcome.payload.unwrap()["subfolders"], json!([]));

    let outcome = send(&mut d, json!({"command": "resolve_parent", "folder_id": folder_id})).await;
    assert_eq!(outcome.payload.unwrap()["name"], "Root");

    let outcome = send(&mut d, json!({"command": "snapshot"})).await;
    let snapshot = outcome.payload.unwrap();
    assert_eq!(snapshot["current_folder_id"], folder_id);
    assert_eq!(snapshot["folders"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_commands_publish_events() {
    let app = TestVault::new();
    let mut events = app.vault.store().subscribe_events();
    let mut d = app.dispatcher();

    send(
        &mut d,
        json!({"command": "create_document", "name": "memo.doc", "mime_type": "application/msword", "size_bytes": 512, "tags": "memo"}),
    )
    .await;

    let event = events.recv().await.unwrap();
    match event.payload {
        EventPayload::Document(DocumentEvent::Uploaded { title, .. }) => assert_eq!(title, "memo"),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn test_users_listing() {
    let app = TestVault::new();
    let mut d = app.dispatcher();
    let outcome = send(&mut d, json!({"command": "users"})).await;
    let users = outcome.payload.unwrap();
    assert_eq!(users.as_array().unwrap().len(), 3);
    assert_eq!(users[0]["id"], "user1");
    assert_eq!(users[0]["display_name"], "John Doe");
}
