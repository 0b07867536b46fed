//! Uploaded file descriptor.

use serde::{Deserialize, Serialize};

/// What the file input source knows about a selected file.
///
/// The file's bytes are never read; only these three facts are captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// The file name, including extension.
    pub name: String,
    /// The MIME type reported by the input source.
    pub mime_type: String,
    /// The file size in bytes.
    pub size_bytes: u64,
}

impl FileDescriptor {
    /// Creates a new descriptor.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// The file name with its final extension segment stripped.
    ///
    /// Falls back to the full name when stripping would leave nothing
    /// (e.g. `".pdf"`).
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) if idx > 0 => &self.name[..idx],
            _ => &self.name,
        }
    }
}
