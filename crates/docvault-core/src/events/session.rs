//! Navigation and selection events.

use serde::{Deserialize, Serialize};

use crate::types::{DocumentId, FolderId};

/// Events related to the session cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// The current folder changed.
    Navigated {
        /// The new current folder.
        folder_id: FolderId,
    },
    /// The selected document changed.
    SelectionChanged {
        /// The newly selected document, if any.
        document_id: Option<DocumentId>,
    },
}
