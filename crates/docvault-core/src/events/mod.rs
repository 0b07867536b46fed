//! Domain events emitted by DocVault store operations.
//!
//! Events are broadcast by the document store after each committed
//! mutation and consumed by view layers (status toasts) and logging.

pub mod document;
pub mod folder;
pub mod session;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::EventId;

pub use document::DocumentEvent;
pub use folder::FolderEvent;
pub use session::SessionEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: EventId,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A document-related event.
    Document(DocumentEvent),
    /// A folder-related event.
    Folder(FolderEvent),
    /// A navigation or selection event.
    Session(SessionEvent),
}

impl DomainEvent {
    /// Create a new domain event stamped with the current time.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: EventId::new(),
            timestamp: Utc::now(),
            payload,
        }
    }
}

impl From<DocumentEvent> for EventPayload {
    fn from(event: DocumentEvent) -> Self {
        Self::Document(event)
    }
}

impl From<FolderEvent> for EventPayload {
    fn from(event: FolderEvent) -> Self {
        Self::Folder(event)
    }
}

impl From<SessionEvent> for EventPayload {
    fn from(event: SessionEvent) -> Self {
        Self::Session(event)
    }
}
