//! # docvault-service
//!
//! The document store and the services layered on it. The store is the
//! single authority for documents, folders, and the navigation cursor;
//! each service turns one group of user actions into pure snapshot
//! transitions applied through [`DocumentStore::update`].
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time via `Arc` references.

pub mod command;
pub mod document;
pub mod error;
pub mod folder;
pub mod store;
pub mod upload;
pub mod vault;

pub use command::{Command, CommandDispatcher, CommandOutcome};
pub use document::{AccessService, DocumentService, TagService};
pub use error::DocumentError;
pub use folder::FolderService;
pub use store::{DocumentStore, StoreSnapshot, Transition};
pub use upload::{UploadForm, UploadPolicy, UploadService, UploadStatus, ValidationStatus};
pub use vault::DocVault;
