//! Document domain entities.

pub mod descriptor;
pub mod metadata;
pub mod model;
pub mod tags;

pub use descriptor::FileDescriptor;
pub use metadata::DocumentMetadata;
pub use model::Document;
pub use tags::TagSet;
