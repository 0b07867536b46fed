//! Store-level error type.
//!
//! Every failure a store operation can report is a [`DocumentError`]; it
//! maps cleanly into `docvault_core::error::AppError` for callers that
//! propagate a single error type.

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::types::FolderId;
use thiserror::Error;

/// Failures reported by store operations and the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The MIME type is not on the upload allow-list.
    #[error("Invalid file type. Please upload PDF, Word, or Excel files.")]
    InvalidFileType {
        /// The rejected MIME type.
        mime_type: String,
    },

    /// The file exceeds the upload size limit.
    #[error("File is too large. Maximum size is {max_label}.")]
    FileTooLarge {
        /// The rejected size.
        size_bytes: u64,
        /// The configured limit in bytes.
        max_bytes: u64,
        /// The configured limit as shown to the user.
        max_label: String,
    },

    /// A referenced folder does not exist.
    #[error("Folder not found: {folder_id}")]
    FolderNotFound {
        /// The missing folder.
        folder_id: FolderId,
    },

    /// The root folder cannot be deleted.
    #[error("The root folder cannot be deleted")]
    RootFolderImmutable,

    /// Deletion was refused because the folder still has contents.
    #[error("Folder '{name}' is not empty ({subfolders} subfolders, {documents} documents)")]
    FolderNotEmpty {
        /// The folder name.
        name: String,
        /// Number of direct subfolders.
        subfolders: usize,
        /// Number of documents directly inside.
        documents: usize,
    },

    /// The upload form is already submitting.
    #[error("An upload is already in progress")]
    UploadInProgress,

    /// Submission was attempted without a valid file.
    #[error("Select a valid file before uploading")]
    NoValidFile,
}

impl DocumentError {
    /// The error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFileType { .. }
            | Self::FileTooLarge { .. }
            | Self::RootFolderImmutable
            | Self::NoValidFile => ErrorKind::Validation,
            Self::FolderNotFound { .. } => ErrorKind::NotFound,
            Self::FolderNotEmpty { .. } | Self::UploadInProgress => ErrorKind::Conflict,
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        AppError::with_source(err.kind(), err.to_string(), err)
    }
}
