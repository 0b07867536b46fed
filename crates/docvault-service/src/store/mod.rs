//! The authoritative in-memory store and its update protocol.

pub mod document_store;
pub mod snapshot;
pub mod transition;

pub use document_store::DocumentStore;
pub use snapshot::StoreSnapshot;
pub use transition::Transition;
