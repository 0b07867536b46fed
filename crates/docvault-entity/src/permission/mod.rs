//! Access level and per-user permission entities.

pub mod access;
pub mod entry;
pub mod level;

pub use access::AccessLevel;
pub use entry::{PermissionEntry, PermissionList};
pub use level::PermissionLevel;
