//! Folder domain entities.

pub mod listing;
pub mod model;

pub use listing::FolderListing;
pub use model::Folder;
