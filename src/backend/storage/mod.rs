// src/backend/storage/mod.rs

pub mod blob;
pub mod config;
pub mod items;
pub mod keys;

// Re-export key storage types and functions for easier access
pub use blob::BlobStore;
pub use config::StoreConfig;
pub use items::ItemRepository;
pub use keys::{attachment_key, item_key, sanitize_filename, INDEX_KEY};
