//! # docvault-entity
//!
//! Domain entity models for DocVault. Every struct in this crate is a
//! plain record or value object held by the document store. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod document;
pub mod folder;
pub mod permission;
pub mod user;
