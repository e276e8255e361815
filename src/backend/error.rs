// src/backend/error.rs
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Video already exists! Uploaded by: {created_by}")]
    Duplicate {
        video_id: String,
        created_by: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("Payload too large: maximum {max_bytes} bytes allowed")]
    PayloadTooLarge { max_bytes: u64 },

    #[error("Storage unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<object_store::Error> for CatalogError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => CatalogError::NotFound(path),
            other => CatalogError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        // A document that fails to (de)serialize is a corrupt store, not bad input.
        CatalogError::StoreUnavailable(format!("document serialization failed: {}", err))
    }
}
