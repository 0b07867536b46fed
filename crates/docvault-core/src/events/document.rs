//! Document-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::{DocumentId, FolderId, UserId};

/// Events related to document operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DocumentEvent {
    /// A document was uploaded.
    Uploaded {
        /// The document ID.
        document_id: DocumentId,
        /// The folder containing the document.
        folder_id: FolderId,
        /// The document title.
        title: String,
        /// The file size in bytes.
        size_bytes: u64,
        /// The MIME type.
        mime_type: String,
    },
    /// A document was deleted.
    Deleted {
        /// The document ID.
        document_id: DocumentId,
        /// The document title (for display after deletion).
        title: String,
    },
    /// A tag was added to a document.
    Tagged {
        /// The document ID.
        document_id: DocumentId,
        /// The tag that was added.
        tag: String,
    },
    /// A tag was removed from a document.
    Untagged {
        /// The document ID.
        document_id: DocumentId,
        /// The tag that was removed.
        tag: String,
    },
    /// The document's access level changed.
    AccessChanged {
        /// The document ID.
        document_id: DocumentId,
        /// The new access level.
        access: String,
    },
    /// A user was granted (or re-granted) a permission level.
    PermissionAssigned {
        /// The document ID.
        document_id: DocumentId,
        /// The user receiving the permission.
        user_id: UserId,
        /// The permission level.
        level: String,
    },
    /// A user's permission entry was removed.
    PermissionRevoked {
        /// The document ID.
        document_id: DocumentId,
        /// The user whose entry was removed.
        user_id: UserId,
    },
}
