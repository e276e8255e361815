// src/backend/models/common.rs
use std::fmt;

// Catalog identifiers are plain strings in the wire format and the store.
pub type ItemId = String; // UUIDv4, assigned at creation, immutable
pub type VideoId = String; // 11-char external video token
pub type StorageKey = String; // Blob store key for an uploaded attachment
pub type Timestamp = String; // RFC 3339

/// Identity used when no `X-User-Email` header is supplied.
pub const ANONYMOUS_IDENTITY: &str = "anonymous@adda247.com";

/// Caller identity as presented to the service layer.
///
/// This is an intentionally weak identity model: the value is a
/// client-supplied string, trusted as-is. Keeping it behind a newtype means
/// a stronger scheme can replace the header extraction in the API layer
/// without touching repository or service logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity(pub String);

impl Identity {
    pub fn anonymous() -> Self {
        Identity(ANONYMOUS_IDENTITY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Identity(value.to_string())
    }
}
