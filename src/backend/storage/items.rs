// src/backend/storage/items.rs
use crate::error::CatalogError;
use crate::models::{common::Identity, CatalogIndex, Item, UpdateItemRequest};
use crate::storage::blob::BlobStore;
use crate::storage::keys::{item_key, INDEX_KEY};
use crate::utils::guards::ensure_owner;
use crate::utils::time::now_iso;
use crate::utils::youtube::extract_video_id;
use uuid::Uuid;

/// Owns the per-item documents and keeps the aggregate index synchronized
/// with them.
///
/// Item document and index are written separately, in that order, with no
/// transaction across the two writes: a crash in between leaves the new
/// document orphaned (invisible to listing) until the next successful index
/// write. Concurrent mutations race on the index read-modify-write and the
/// last full document wins. Both are accepted limitations for this
/// low-write-concurrency catalog.
#[derive(Clone)]
pub struct ItemRepository {
    store: BlobStore,
}

impl ItemRepository {
    pub fn new(store: BlobStore) -> Self {
        ItemRepository { store }
    }

    pub fn store(&self) -> &BlobStore {
        &self.store
    }

    /// Fetches the per-item document directly by key; the index is not
    /// consulted.
    pub async fn get_item(&self, id: &str) -> Result<Item, CatalogError> {
        self.store
            .get_json::<Item>(&item_key(id))
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("item {}", id)))
    }

    /// Fetches the aggregate index; an absent document bootstraps a fresh
    /// empty index rather than failing.
    pub async fn get_index(&self) -> Result<CatalogIndex, CatalogError> {
        Ok(self
            .store
            .get_json::<CatalogIndex>(INDEX_KEY)
            .await?
            .unwrap_or_else(|| CatalogIndex::empty(now_iso())))
    }

    /// The one read-modify-write primitive for the index: fetch, mutate,
    /// stamp `updatedAt`, persist the whole document.
    pub async fn with_index<F>(&self, mutate: F) -> Result<CatalogIndex, CatalogError>
    where
        F: FnOnce(&mut CatalogIndex),
    {
        let mut index = self.get_index().await?;
        mutate(&mut index);
        index.updated_at = now_iso();
        self.store.put_json(INDEX_KEY, &index).await?;
        Ok(index)
    }

    /// Assigns a fresh id and creation timestamp and persists the item
    /// document, without touching the index. Bulk import uses this directly
    /// so the whole batch lands in a single index write.
    pub async fn stamp_and_store(&self, mut item: Item) -> Result<Item, CatalogError> {
        item.id = Uuid::new_v4().to_string();
        item.created_at = now_iso();
        item.updated_at = None;
        self.store.put_json(&item_key(&item.id), &item).await?;
        Ok(item)
    }

    /// Persists a new item document, then appends it to the index.
    pub async fn create_item(&self, item: Item) -> Result<Item, CatalogError> {
        let item = self.stamp_and_store(item).await?;

        let entry = item.clone();
        self.with_index(move |index| index.items.push(entry)).await?;
        Ok(item)
    }

    /// Rewrites the item document, then overwrites its index entry in place
    /// (order-preserving). A missing index entry is logged, not repaired.
    pub async fn persist_item(&self, item: &Item) -> Result<(), CatalogError> {
        self.store.put_json(&item_key(&item.id), item).await?;

        let entry = item.clone();
        self.with_index(move |index| {
            if !index.replace(&entry) {
                tracing::warn!(item_id = %entry.id, "item absent from index during replace");
            }
        })
        .await?;
        Ok(())
    }

    /// Merges recognized patch fields into the stored item and persists.
    /// Only the creator may update; `externalVideoId` is re-derived when
    /// `verificationLink` changes.
    pub async fn update_item(
        &self,
        id: &str,
        patch: &UpdateItemRequest,
        acting: &Identity,
    ) -> Result<Item, CatalogError> {
        let mut item = self.get_item(id).await?;
        ensure_owner(&item, acting)?;

        apply_patch(&mut item, patch)?;
        item.updated_at = Some(now_iso());
        self.persist_item(&item).await?;
        Ok(item)
    }

    /// Deletes the item document and its attachments (both best-effort),
    /// then removes the entry from the index. Only the creator may delete.
    pub async fn delete_item(&self, id: &str, acting: &Identity) -> Result<(), CatalogError> {
        let item = self.get_item(id).await?;
        ensure_owner(&item, acting)?;

        for key in &item.files {
            if let Err(err) = self.store.delete(key).await {
                tracing::warn!(%key, error = %err, "failed to delete attachment");
            }
        }
        if let Err(err) = self.store.delete(&item_key(id)).await {
            tracing::warn!(item_id = %id, error = %err, "failed to delete item document");
        }

        self.with_index(|index| {
            index.remove(id);
        })
        .await?;
        Ok(())
    }
}

fn apply_patch(item: &mut Item, patch: &UpdateItemRequest) -> Result<(), CatalogError> {
    if let Some(vertical) = &patch.vertical {
        item.vertical = vertical.trim().to_string();
    }
    if let Some(exam) = &patch.exam {
        item.exam = exam.trim().to_string();
    }
    if let Some(subject) = &patch.subject {
        item.subject = subject.trim().to_string();
    }
    if let Some(content_type) = &patch.content_type {
        item.content_type = content_type.trim().to_string();
    }
    if let Some(status) = &patch.status {
        item.status = status.trim().to_string();
    }
    if let Some(subcategory) = &patch.content_subcategory {
        item.content_subcategory = subcategory.trim().to_string();
    }
    if let Some(link) = &patch.verification_link {
        let link = link.trim().to_string();
        if link != item.verification_link {
            item.external_video_id = if link.is_empty() {
                None
            } else {
                match extract_video_id(&link) {
                    Some(video_id) => Some(video_id),
                    None => {
                        return Err(CatalogError::InvalidInput(
                            "verificationLink is not a recognized video URL".to_string(),
                        ))
                    }
                }
            };
            item.verification_link = link;
        }
    }
    Ok(())
}
