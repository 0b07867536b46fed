//! Upload validation, the upload form state machine, and the deferred
//! upload commit.

pub mod form;
pub mod policy;
pub mod service;

pub use form::{UploadForm, UploadStatus};
pub use policy::{UploadPolicy, ValidationStatus};
pub use service::UploadService;
