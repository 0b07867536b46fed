//! Command type definitions.

use serde::{Deserialize, Serialize};

use docvault_core::types::{DocumentId, FolderId, UserId};
use docvault_entity::permission::{AccessLevel, PermissionLevel};

/// One operation requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Select a file in the upload form and validate it.
    SelectFile {
        /// File name including extension.
        name: String,
        /// Reported MIME type.
        mime_type: String,
        /// Size in bytes.
        size_bytes: u64,
    },
    /// Drop the selected file from the upload form.
    ClearFile,
    /// Edit the upload form title.
    SetTitle {
        /// New title.
        title: String,
    },
    /// Edit the upload form description.
    SetDescription {
        /// New description.
        description: String,
    },
    /// Edit the upload form's comma-separated tags.
    SetTags {
        /// Raw tag input.
        tags: String,
    },
    /// Submit the upload form after the simulated delay.
    Submit {
        /// Target folder; the current folder when omitted.
        #[serde(default)]
        folder_id: Option<FolderId>,
    },
    /// Show the upload form state.
    Form,
    /// Register a document directly, bypassing the form and the delay.
    CreateDocument {
        /// File name including extension.
        name: String,
        /// Reported MIME type.
        mime_type: String,
        /// Size in bytes.
        size_bytes: u64,
        /// Title; the filename stem when omitted.
        #[serde(default)]
        title: Option<String>,
        /// Description.
        #[serde(default)]
        description: Option<String>,
        /// Raw comma-separated tags.
        #[serde(default)]
        tags: String,
        /// Target folder; the current folder when omitted.
        #[serde(default)]
        folder_id: Option<FolderId>,
    },
    /// Delete a document.
    DeleteDocument {
        /// Document to delete.
        document_id: DocumentId,
    },
    /// Set or clear the selected document.
    Select {
        /// Document to select; clears the selection when omitted.
        #[serde(default)]
        document_id: Option<DocumentId>,
    },
    /// Add a tag to a document.
    AddTag {
        /// Target document.
        document_id: DocumentId,
        /// Tag text; trimmed before use.
        tag: String,
    },
    /// Remove a tag from a document.
    RemoveTag {
        /// Target document.
        document_id: DocumentId,
        /// Exact tag to remove.
        tag: String,
    },
    /// Change a document's access level.
    SetAccess {
        /// Target document.
        document_id: DocumentId,
        /// New access level.
        access: AccessLevel,
    },
    /// Grant a user a permission level on a document.
    AssignPermission {
        /// Target document.
        document_id: DocumentId,
        /// User receiving the permission.
        user_id: UserId,
        /// Permission level.
        level: PermissionLevel,
    },
    /// Remove a user's permission entry from a document.
    RevokePermission {
        /// Target document.
        document_id: DocumentId,
        /// User losing the permission.
        user_id: UserId,
    },
    /// Create a folder.
    CreateFolder {
        /// Folder name; trimmed before use.
        name: String,
        /// Parent folder; the current folder when omitted.
        #[serde(default)]
        parent_id: Option<FolderId>,
    },
    /// Delete a folder under the configured policy.
    DeleteFolder {
        /// Folder to delete.
        folder_id: FolderId,
    },
    /// Move the navigation cursor.
    Navigate {
        /// Destination folder.
        folder_id: FolderId,
    },
    /// List a folder's direct contents.
    List {
        /// Folder to list; the current folder when omitted.
        #[serde(default)]
        folder_id: Option<FolderId>,
    },
    /// Show a folder's parent.
    ResolveParent {
        /// Folder whose parent to resolve.
        folder_id: FolderId,
    },
    /// Dump the whole store state.
    Snapshot,
    /// List users available as permission targets.
    Users,
}

impl Command {
    /// The snake_case command name, as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectFile { .. } => "select_file",
            Self::ClearFile => "clear_file",
            Self::SetTitle { .. } => "set_title",
            Self::SetDescription { .. } => "set_description",
            Self::SetTags { .. } => "set_tags",
            Self::Submit { .. } => "submit",
            Self::Form => "form",
            Self::CreateDocument { .. } => "create_document",
            Self::DeleteDocument { .. } => "delete_document",
            Self::Select { .. } => "select",
            Self::AddTag { .. } => "add_tag",
            Self::RemoveTag { .. } => "remove_tag",
            Self::SetAccess { .. } => "set_access",
            Self::AssignPermission { .. } => "assign_permission",
            Self::RevokePermission { .. } => "revoke_permission",
            Self::CreateFolder { .. } => "create_folder",
            Self::DeleteFolder { .. } => "delete_folder",
            Self::Navigate { .. } => "navigate",
            Self::List { .. } => "list",
            Self::ResolveParent { .. } => "resolve_parent",
            Self::Snapshot => "snapshot",
            Self::Users => "users",
        }
    }

    /// Whether the command only reads state.
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Self::Form | Self::List { .. } | Self::ResolveParent { .. } | Self::Snapshot | Self::Users
        )
    }
}
