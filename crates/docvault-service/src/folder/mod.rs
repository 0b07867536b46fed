//! Folder hierarchy management and navigation.

pub mod service;

pub use service::FolderService;
