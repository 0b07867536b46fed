//! Document lifecycle, tagging, and access management.

pub mod access;
mod edit;
pub mod service;
pub mod tags;

pub use access::AccessService;
pub use service::DocumentService;
pub use tags::TagService;
