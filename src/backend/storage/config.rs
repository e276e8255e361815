// src/backend/storage/config.rs
use crate::error::CatalogError;
use crate::storage::blob::BlobStore;
use object_store::aws::AmazonS3Builder;
use std::sync::Arc;

const DEFAULT_REGION: &str = "ap-south-1";

/// Object store settings, read from the same environment variables the
/// original deployment used.
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: String,
    pub bucket: Option<String>,
    pub endpoint: Option<String>,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        StoreConfig {
            access_key_id: non_empty_var("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY"),
            region: non_empty_var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            bucket: non_empty_var("S3_BUCKET_NAME"),
            endpoint: non_empty_var("S3_ENDPOINT"),
        }
    }

    /// Builds the store, or None when credentials/bucket are not configured.
    /// The server still starts without a store; data routes then answer with
    /// `StoreUnavailable`.
    pub fn build(&self) -> Result<Option<BlobStore>, CatalogError> {
        let (Some(access_key), Some(secret_key), Some(bucket)) = (
            self.access_key_id.as_deref(),
            self.secret_access_key.as_deref(),
            self.bucket.as_deref(),
        ) else {
            return Ok(None);
        };

        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(bucket)
            .with_region(self.region.as_str())
            .with_access_key_id(access_key)
            .with_secret_access_key(secret_key);
        if let Some(endpoint) = &self.endpoint {
            // Custom endpoints cover S3-compatible stores in development.
            builder = builder.with_endpoint(endpoint.as_str()).with_allow_http(true);
        }

        let store = builder
            .build()
            .map_err(|err| CatalogError::StoreUnavailable(err.to_string()))?;
        Ok(Some(BlobStore::new(Arc::new(store))))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_mean_no_store() {
        let config = StoreConfig {
            region: DEFAULT_REGION.to_string(),
            ..Default::default()
        };
        assert!(config.build().unwrap().is_none());
    }

    #[test]
    fn complete_config_builds_a_store() {
        let config = StoreConfig {
            access_key_id: Some("key".to_string()),
            secret_access_key: Some("secret".to_string()),
            region: DEFAULT_REGION.to_string(),
            bucket: Some("catalog".to_string()),
            endpoint: Some("http://localhost:9000".to_string()),
        };
        assert!(config.build().unwrap().is_some());
    }
}
