//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docvault_core::types::{DocumentId, FolderId};

use super::descriptor::FileDescriptor;
use super::metadata::DocumentMetadata;
use super::tags::TagSet;
use crate::permission::{AccessLevel, PermissionList};

/// A document registered in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// The original file name.
    pub file_name: String,
    /// MIME type captured at upload.
    pub file_type: String,
    /// File size in bytes captured at upload.
    pub size_bytes: u64,
    /// Tags in insertion order.
    pub tags: TagSet,
    /// The folder containing this document.
    pub folder_id: FolderId,
    /// Coarse visibility.
    pub access: AccessLevel,
    /// Per-user permission entries.
    pub permissions: PermissionList,
    /// When the document was uploaded.
    pub upload_date: DateTime<Utc>,
}

impl Document {
    /// Builds a new private document from an upload.
    ///
    /// No validation happens here; callers check the upload policy and the
    /// target folder first.
    pub fn from_upload(
        descriptor: &FileDescriptor,
        metadata: &DocumentMetadata,
        folder_id: FolderId,
        upload_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            title: metadata.resolved_title(descriptor),
            description: metadata.resolved_description(),
            file_name: descriptor.name.clone(),
            file_type: descriptor.mime_type.clone(),
            size_bytes: descriptor.size_bytes,
            tags: metadata.tags(),
            folder_id,
            access: AccessLevel::Private,
            permissions: PermissionList::new(),
            upload_date,
        }
    }

    /// Human-readable size, e.g. `"1.5 MB"`.
    pub fn display_size(&self) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut size = self.size_bytes as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.size_bytes, UNITS[0])
        } else {
            format!("{size:.1} {}", UNITS[unit])
        }
    }
}
