// src/backend/models/item.rs
use crate::models::common::{ItemId, StorageKey, Timestamp, VideoId};
use serde::{Deserialize, Serialize};

/// A single submitted content record.
///
/// Persisted as `metadata/items/{id}.json` and duplicated into the aggregate
/// [`CatalogIndex`]. Field names follow the camelCase wire format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub verification_link: String,
    // Natural key for duplicate detection; None when no link was supplied.
    pub external_video_id: Option<VideoId>,
    pub content_type: String,
    pub vertical: String,
    pub exam: String,
    #[serde(default)]
    pub subject: String,
    pub status: String,
    #[serde(default)]
    pub content_subcategory: String,
    #[serde(default)]
    pub files: Vec<StorageKey>,
    pub created_by: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// The aggregate index document at `metadata/index.json`.
///
/// Sole query path for listing/filtering. Between operations its `items`
/// sequence is expected to equal the set of per-item documents in the store;
/// the two are only eventually consistent (see `ItemRepository`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIndex {
    #[serde(default)]
    pub items: Vec<Item>,
    pub updated_at: Timestamp,
}

impl CatalogIndex {
    /// Bootstrap value for a fresh catalog with no index document yet.
    pub fn empty(now: Timestamp) -> Self {
        CatalogIndex {
            items: Vec::new(),
            updated_at: now,
        }
    }

    /// First item with a matching external video id, in insertion order.
    pub fn find_video(&self, video_id: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.external_video_id.as_deref() == Some(video_id))
    }

    /// Overwrites the entry with the same id in place, preserving order.
    /// Returns false when the id is not present (a prior partial failure);
    /// the caller decides whether that is worth logging.
    pub fn replace(&mut self, item: &Item) -> bool {
        match self.items.iter_mut().find(|entry| entry.id == item.id) {
            Some(entry) => {
                *entry = item.clone();
                true
            }
            None => false,
        }
    }

    /// Removes the entry with the given id. Returns false when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|entry| entry.id != id);
        self.items.len() != before
    }
}
