//! Deferred upload commit.

use std::time::Duration;

use tracing::{info, warn};

use docvault_core::config::UploadConfig;
use docvault_core::types::FolderId;
use docvault_entity::document::Document;

use super::form::UploadForm;
use crate::document::DocumentService;
use crate::error::DocumentError;

/// Submits upload forms after a simulated transfer delay.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Performs the actual commit.
    documents: DocumentService,
    /// Simulated round-trip before the commit.
    latency: Duration,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(documents: DocumentService, latency: Duration) -> Self {
        Self { documents, latency }
    }

    /// Creates an upload service using the configured latency.
    pub fn from_config(documents: DocumentService, config: &UploadConfig) -> Self {
        Self::new(documents, Duration::from_millis(config.simulated_latency_ms))
    }

    /// The simulated transfer delay.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Submits the form into `target_folder_id` (default: current folder).
    ///
    /// The form is `Uploading` while the delay runs, then the document is
    /// committed and the form reset to `Idle` whether or not the commit
    /// succeeded. If the returned future is dropped before the delay
    /// elapses nothing is committed and the form goes back to `Valid`.
    pub async fn submit(
        &self,
        form: &mut UploadForm,
        target_folder_id: Option<FolderId>,
    ) -> Result<Document, DocumentError> {
        let (file, metadata) = form.begin_upload()?;
        let guard = PendingUpload { form };

        tokio::time::sleep(self.latency).await;

        let result = self
            .documents
            .create_document(&file, &metadata, target_folder_id);
        match &result {
            Ok(doc) => info!(document_id = %doc.id, name = %file.name, "Upload completed"),
            Err(err) => warn!(name = %file.name, error = %err, "Upload failed"),
        }

        guard.finish();
        result
    }
}

/// Reverts the form if the upload future is dropped mid-flight.
struct PendingUpload<'a> {
    form: &'a mut UploadForm,
}

impl PendingUpload<'_> {
    /// Resets the form; the drop that follows sees `Idle` and does nothing.
    fn finish(self) {
        self.form.reset();
    }
}

impl Drop for PendingUpload<'_> {
    fn drop(&mut self) {
        self.form.cancel_upload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::store::DocumentStore;
    use crate::upload::{UploadPolicy, UploadStatus};
    use docvault_entity::document::FileDescriptor;

    fn setup() -> (UploadService, Arc<DocumentStore>) {
        let store = Arc::new(DocumentStore::new());
        let docs = DocumentService::new(Arc::clone(&store), UploadPolicy::default());
        (
            UploadService::from_config(docs, &UploadConfig::default()),
            store,
        )
    }

    fn valid_form() -> UploadForm {
        let mut form = UploadForm::default();
        form.select_file(FileDescriptor::new("budget.pdf", "application/pdf", 1024))
            .unwrap();
        form
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_commits_after_latency() {
        let (svc, store) = setup();
        let mut form = valid_form();
        let started = tokio::time::Instant::now();

        let doc = svc.submit(&mut form, None).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(doc.title, "budget");
        assert_eq!(store.snapshot().documents.len(), 1);
        assert_eq!(form.status(), UploadStatus::Idle);
        assert!(form.file().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submit_commits_nothing() {
        let (svc, store) = setup();
        let mut form = valid_form();

        let early = tokio::time::timeout(Duration::from_millis(1000), svc.submit(&mut form, None)).await;

        assert!(early.is_err());
        assert!(store.snapshot().documents.is_empty());
        assert_eq!(form.status(), UploadStatus::Valid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_commit_still_resets_form() {
        let (svc, store) = setup();
        let mut form = valid_form();

        let err = svc
            .submit(&mut form, Some(FolderId::new()))
            .await
            .unwrap_err();

        assert!(matches!(err, DocumentError::FolderNotFound { .. }));
        assert!(store.snapshot().documents.is_empty());
        assert_eq!(form.status(), UploadStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_without_file() {
        let (svc, _) = setup();
        let mut form = UploadForm::default();
        let err = svc.submit(&mut form, None).await.unwrap_err();
        assert_eq!(err, DocumentError::NoValidFile);
    }
}
