//! The upload form state machine.
//!
//! ```text
//! Idle -> FileSelected -> Valid | Invalid -> Uploading -> Idle
//! ```
//!
//! `FileSelected` is transient: selecting a file validates it straight
//! away, so callers only ever observe `Valid` or `Invalid` after
//! [`UploadForm::select_file`] returns.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use docvault_entity::document::{DocumentMetadata, FileDescriptor};

use super::policy::{UploadPolicy, ValidationStatus};
use crate::error::DocumentError;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    /// No file selected.
    #[default]
    Idle,
    /// A file was picked and is being validated.
    FileSelected,
    /// The selected file passed validation.
    Valid,
    /// The selected file failed validation.
    Invalid,
    /// The upload has been submitted and is waiting to commit.
    Uploading,
}

impl UploadStatus {
    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FileSelected => "file_selected",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Uploading => "uploading",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Editable upload form: one selected file plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadForm {
    /// Current state.
    status: UploadStatus,
    /// The selected file, if any.
    file: Option<FileDescriptor>,
    /// Feedback for the selected file.
    validation: Option<ValidationStatus>,
    /// Title, description, and raw tag input.
    metadata: DocumentMetadata,
    #[serde(skip)]
    policy: UploadPolicy,
}

impl UploadForm {
    /// An idle form validating against `policy`.
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            status: UploadStatus::Idle,
            file: None,
            validation: None,
            metadata: DocumentMetadata::empty(),
            policy,
        }
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn file(&self) -> Option<&FileDescriptor> {
        self.file.as_ref()
    }

    pub fn validation(&self) -> Option<&ValidationStatus> {
        self.validation.as_ref()
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Selects a file and validates it.
    ///
    /// A valid file overwrites the title with its filename stem.
    pub fn select_file(
        &mut self,
        descriptor: FileDescriptor,
    ) -> Result<&ValidationStatus, DocumentError> {
        self.ensure_editable()?;
        self.status = UploadStatus::FileSelected;
        trace!(name = %descriptor.name, "File selected");

        let status = self.policy.status(&descriptor);
        if status.success {
            self.metadata.title = Some(descriptor.stem().to_string());
            self.status = UploadStatus::Valid;
        } else {
            self.status = UploadStatus::Invalid;
        }
        debug!(
            name = %descriptor.name,
            mime_type = %descriptor.mime_type,
            size = descriptor.size_bytes,
            status = %self.status,
            "File validated"
        );

        self.file = Some(descriptor);
        Ok(&*self.validation.insert(status))
    }

    /// Drops the selected file. Typed metadata is kept.
    pub fn clear_file(&mut self) -> Result<(), DocumentError> {
        self.ensure_editable()?;
        self.file = None;
        self.validation = None;
        self.status = UploadStatus::Idle;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DocumentError> {
        self.ensure_editable()?;
        self.metadata.title = Some(title.into());
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), DocumentError> {
        self.ensure_editable()?;
        self.metadata.description = Some(description.into());
        Ok(())
    }

    /// Sets the raw comma-separated tag input.
    pub fn set_tags_text(&mut self, tags_text: impl Into<String>) -> Result<(), DocumentError> {
        self.ensure_editable()?;
        self.metadata.tags_text = tags_text.into();
        Ok(())
    }

    /// Moves a valid form to `Uploading` and hands back what to commit.
    pub fn begin_upload(&mut self) -> Result<(FileDescriptor, DocumentMetadata), DocumentError> {
        match (self.status, &self.file) {
            (UploadStatus::Uploading, _) => Err(DocumentError::UploadInProgress),
            (UploadStatus::Valid, Some(file)) => {
                let file = file.clone();
                self.status = UploadStatus::Uploading;
                debug!(name = %file.name, "Upload started");
                Ok((file, self.metadata.clone()))
            }
            _ => Err(DocumentError::NoValidFile),
        }
    }

    /// Returns an interrupted upload to `Valid`, as if it never started.
    pub fn cancel_upload(&mut self) {
        if self.status == UploadStatus::Uploading {
            debug!("Upload cancelled");
            self.status = UploadStatus::Valid;
        }
    }

    /// Clears the file, feedback, and metadata and returns to `Idle`.
    pub fn reset(&mut self) {
        self.status = UploadStatus::Idle;
        self.file = None;
        self.validation = None;
        self.metadata = DocumentMetadata::empty();
    }

    fn ensure_editable(&self) -> Result<(), DocumentError> {
        if self.status == UploadStatus::Uploading {
            return Err(DocumentError::UploadInProgress);
        }
        Ok(())
    }
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new(UploadPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::policy::VALID_FILE_MESSAGE;

    fn report() -> FileDescriptor {
        FileDescriptor::new("q3-report.final.pdf", "application/pdf", 4096)
    }

    #[test]
    fn test_valid_file_fills_title() {
        let mut form = UploadForm::default();
        let status = form.select_file(report()).unwrap();
        assert!(status.success);
        assert_eq!(status.message, VALID_FILE_MESSAGE);
        assert_eq!(form.status(), UploadStatus::Valid);
        assert_eq!(form.metadata().title.as_deref(), Some("q3-report.final"));
    }

    #[test]
    fn test_invalid_file_keeps_title() {
        let mut form = UploadForm::default();
        form.set_title("My title").unwrap();
        let status = form
            .select_file(FileDescriptor::new("x.zip", "application/zip", 1))
            .unwrap();
        assert!(!status.success);
        assert_eq!(form.status(), UploadStatus::Invalid);
        assert_eq!(form.metadata().title.as_deref(), Some("My title"));
    }

    #[test]
    fn test_too_large_message() {
        let mut form = UploadForm::default();
        let status = form
            .select_file(FileDescriptor::new("big.pdf", "application/pdf", 10 * 1024 * 1024 + 1))
            .unwrap();
        assert_eq!(status.message, "File is too large. Maximum size is 10MB.");
    }

    #[test]
    fn test_clear_file_returns_to_idle() {
        let mut form = UploadForm::default();
        form.select_file(report()).unwrap();
        form.clear_file().unwrap();
        assert_eq!(form.status(), UploadStatus::Idle);
        assert!(form.file().is_none());
        assert!(form.validation().is_none());
    }

    #[test]
    fn test_begin_upload_requires_valid_file() {
        let mut form = UploadForm::default();
        assert_eq!(form.begin_upload(), Err(DocumentError::NoValidFile));

        form.select_file(FileDescriptor::new("x.txt", "text/plain", 1))
            .unwrap();
        assert_eq!(form.begin_upload(), Err(DocumentError::NoValidFile));
    }

    #[test]
    fn test_second_begin_upload_fails() {
        let mut form = UploadForm::default();
        form.select_file(report()).unwrap();
        form.set_tags_text("q3, finance").unwrap();

        let (file, meta) = form.begin_upload().unwrap();
        assert_eq!(file, report());
        assert_eq!(meta.tags_text, "q3, finance");
        assert_eq!(form.status(), UploadStatus::Uploading);

        assert_eq!(form.begin_upload(), Err(DocumentError::UploadInProgress));
        assert_eq!(form.set_title("late"), Err(DocumentError::UploadInProgress));
        assert!(form.select_file(report()).is_err());
    }

    #[test]
    fn test_cancel_and_reset() {
        let mut form = UploadForm::default();
        form.select_file(report()).unwrap();
        form.begin_upload().unwrap();
        form.cancel_upload();
        assert_eq!(form.status(), UploadStatus::Valid);

        form.reset();
        assert_eq!(form.status(), UploadStatus::Idle);
        assert_eq!(form.metadata(), &DocumentMetadata::empty());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&UploadStatus::FileSelected).unwrap();
        assert_eq!(json, "\"file_selected\"");
    }
}
