// src/backend/storage/blob.rs
use crate::error::CatalogError;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Thin JSON/bytes wrapper over an [`ObjectStore`] backend.
///
/// The catalog treats the store as an opaque key-addressed get/put/delete of
/// documents: no versioning, no conditional writes. Documents are written
/// pretty-printed, matching the layout predating this service.
#[derive(Clone)]
pub struct BlobStore {
    inner: Arc<dyn ObjectStore>,
}

impl BlobStore {
    pub fn new(inner: Arc<dyn ObjectStore>) -> Self {
        BlobStore { inner }
    }

    /// In-memory backend, used by tests and local experiments.
    pub fn memory() -> Self {
        BlobStore::new(Arc::new(InMemory::new()))
    }

    /// Fetches and deserializes a JSON document. Absent keys yield None.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CatalogError> {
        match self.get_raw(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serializes and writes a JSON document.
    pub async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CatalogError> {
        let body = serde_json::to_vec_pretty(value)?;
        self.put_bytes(key, body, JSON_CONTENT_TYPE).await
    }

    /// Fetches raw bytes. Absent keys yield None.
    pub async fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, CatalogError> {
        match self.inner.get(&Path::from(key)).await {
            Ok(result) => {
                let bytes = result.bytes().await.map_err(CatalogError::from)?;
                Ok(Some(bytes.to_vec()))
            }
            Err(object_store::Error::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes raw bytes with an explicit content type.
    pub async fn put_bytes(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), CatalogError> {
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let options = PutOptions {
            attributes,
            ..Default::default()
        };
        self.inner
            .put_opts(&Path::from(key), PutPayload::from(body), options)
            .await
            .map_err(CatalogError::from)?;
        Ok(())
    }

    /// Deletes a key. Deleting an absent key is not an error.
    pub async fn delete(&self, key: &str) -> Result<(), CatalogError> {
        match self.inner.delete(&Path::from(key)).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Doc {
        value: u32,
    }

    #[tokio::test]
    async fn json_round_trip_and_absent_key() {
        let store = BlobStore::memory();
        assert_eq!(store.get_json::<Doc>("missing.json").await.unwrap(), None);

        store.put_json("doc.json", &Doc { value: 7 }).await.unwrap();
        assert_eq!(
            store.get_json::<Doc>("doc.json").await.unwrap(),
            Some(Doc { value: 7 })
        );
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = BlobStore::memory();
        store.put_json("doc.json", &Doc { value: 1 }).await.unwrap();
        store.delete("doc.json").await.unwrap();
        store.delete("doc.json").await.unwrap();
        assert_eq!(store.get_json::<Doc>("doc.json").await.unwrap(), None);
    }
}
