//! Newtype wrappers for domain entity identifiers.
//!
//! Using distinct types prevents accidentally passing a `FolderId` where a
//! `DocumentId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a document.
    DocumentId
);

define_id!(
    /// Unique identifier for a folder.
    FolderId
);

define_id!(
    /// Unique identifier for a domain event.
    EventId
);

impl FolderId {
    /// The well-known identifier of the root folder (the nil UUID).
    pub const fn root() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the root folder identifier.
    pub fn is_root(&self) -> bool {
        self.0.is_nil()
    }
}

/// Opaque identifier of a user that can receive document permissions.
///
/// User identifiers come from the user directory (e.g. `"user1"`), not
/// from UUID generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_new() {
        let id1 = DocumentId::new();
        let id2 = DocumentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_folder_id_from_str() {
        let uuid = Uuid::new_v4();
        let id: FolderId = uuid.to_string().parse().expect("should parse");
        assert_eq!(id.0, uuid);
    }

    #[test]
    fn test_root_folder_id() {
        assert!(FolderId::root().is_root());
        assert!(!FolderId::new().is_root());
        assert_eq!(
            FolderId::root().to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_user_id_is_transparent() {
        let id = UserId::from("user1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"user1\"");
        let parsed: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }
}
