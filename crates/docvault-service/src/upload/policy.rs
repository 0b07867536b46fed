//! File type and size validation.

use serde::{Deserialize, Serialize};

use docvault_core::config::UploadConfig;
use docvault_core::config::upload::size_limit_label;
use docvault_entity::document::FileDescriptor;

use crate::error::DocumentError;

/// Message shown for a file that passes validation.
pub const VALID_FILE_MESSAGE: &str = "File is valid and ready to upload.";

/// Outcome of validating a selected file, as displayed by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStatus {
    /// Whether the file may be uploaded.
    pub success: bool,
    /// Human-readable feedback.
    pub message: String,
}

impl ValidationStatus {
    /// A passing status.
    pub fn valid() -> Self {
        Self {
            success: true,
            message: VALID_FILE_MESSAGE.to_string(),
        }
    }

    /// A failing status carrying the error's message.
    pub fn invalid(err: &DocumentError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }
}

impl From<&Result<(), DocumentError>> for ValidationStatus {
    fn from(result: &Result<(), DocumentError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(err) => Self::invalid(err),
        }
    }
}

/// Allow-list and size limit applied to every upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Accepted MIME types (exact match).
    allowed_mime_types: Vec<String>,
    /// Largest accepted size, inclusive.
    max_size_bytes: u64,
}

impl UploadPolicy {
    /// Builds the policy from configuration.
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            allowed_mime_types: config.allowed_mime_types.clone(),
            max_size_bytes: config.max_size_bytes,
        }
    }

    /// The inclusive size limit in bytes.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Checks the type first, then the size.
    pub fn check(&self, descriptor: &FileDescriptor) -> Result<(), DocumentError> {
        if !self
            .allowed_mime_types
            .iter()
            .any(|m| *m == descriptor.mime_type)
        {
            return Err(DocumentError::InvalidFileType {
                mime_type: descriptor.mime_type.clone(),
            });
        }

        if descriptor.size_bytes > self.max_size_bytes {
            return Err(DocumentError::FileTooLarge {
                size_bytes: descriptor.size_bytes,
                max_bytes: self.max_size_bytes,
                max_label: size_limit_label(self.max_size_bytes),
            });
        }

        Ok(())
    }

    /// [`check`](Self::check) rendered for display.
    pub fn status(&self, descriptor: &FileDescriptor) -> ValidationStatus {
        ValidationStatus::from(&self.check(descriptor))
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}
