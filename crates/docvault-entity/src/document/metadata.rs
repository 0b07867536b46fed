//! User-supplied upload metadata.

use serde::{Deserialize, Serialize};

use super::descriptor::FileDescriptor;
use super::tags::TagSet;

/// Metadata typed into the upload form alongside the selected file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Display title; the filename stem is used when absent or blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw comma-separated tag input.
    #[serde(default)]
    pub tags_text: String,
}

impl DocumentMetadata {
    /// Create empty metadata.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The title to store for a document created from `descriptor`.
    pub fn resolved_title(&self, descriptor: &FileDescriptor) -> String {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| descriptor.stem())
            .to_string()
    }

    /// The description to store, with blank input treated as absent.
    pub fn resolved_description(&self) -> Option<String> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }

    /// The parsed tag set.
    pub fn tags(&self) -> TagSet {
        TagSet::parse(&self.tags_text)
    }
}
