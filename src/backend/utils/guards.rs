// src/backend/utils/guards.rs
use crate::error::CatalogError;
use crate::models::{common::Identity, Item};

/// Checks that the acting identity created the item.
///
/// # Errors
///
/// Returns `CatalogError::NotAuthorized` when `createdBy` does not match.
pub fn ensure_owner(item: &Item, acting: &Identity) -> Result<(), CatalogError> {
    if item.created_by == acting.as_str() {
        Ok(())
    } else {
        Err(CatalogError::NotAuthorized(format!(
            "item {} belongs to another user",
            item.id
        )))
    }
}
