// src/backend/models/mod.rs

pub mod common;
pub mod item;
pub mod requests;

// Re-export common types for easier access
pub use common::*;
pub use item::{CatalogIndex, Item};
pub use requests::{CreateItemRequest, ItemFilter, UpdateItemRequest};
