//! Insertion-ordered, duplicate-free tag collection.

use serde::{Deserialize, Serialize};

/// The tags attached to a document.
///
/// Tags keep the order in which they were first added; adding a tag that
/// is already present (exact, case-sensitive match) changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses comma-separated input: each piece is trimmed, empty pieces
    /// are dropped, and duplicates keep their first position.
    pub fn parse(text: &str) -> Self {
        let mut tags = Self::new();
        for raw in text.split(',') {
            tags.insert(raw);
        }
        tags
    }

    /// Trims `raw` and appends it unless it is blank or already present.
    ///
    /// Returns the stored tag when the set changed.
    pub fn insert(&mut self, raw: &str) -> Option<&str> {
        let tag = raw.trim();
        if tag.is_empty() || self.contains(tag) {
            return None;
        }
        self.0.push(tag.to_string());
        self.0.last().map(String::as_str)
    }

    /// Removes an exact-match tag. Returns whether the set changed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    /// Whether the exact tag is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Iterates tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the tags as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
