//! Storage client: uploads, signed URL issuance, reads and refreshes

use super::backend::{ObjectStore, UrlSigner};
use super::expiry::needs_refresh;
use super::keys::{get_s3_key, parse_location, Location};
use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};
use crate::providers::aws::AwsBackend;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Input of [`StorageClient::save_buffer_to_s3`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub user_id: String,
    pub buffer: Vec<u8>,
    pub file_name: String,
    pub base_path: String,
}

/// Input of [`StorageClient::get_s3_url`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLocation {
    pub user_id: String,
    pub file_name: String,
    pub base_path: String,
}

impl FileLocation {
    pub fn key(&self) -> String {
        get_s3_key(&self.base_path, &self.user_id, &self.file_name)
    }
}

#[derive(Clone)]
pub struct StorageClient {
    config: StorageConfig,
    store: Arc<dyn ObjectStore>,
    signer: Arc<dyn UrlSigner>,
}

impl StorageClient {
    pub fn new(
        config: StorageConfig,
        store: Arc<dyn ObjectStore>,
        signer: Arc<dyn UrlSigner>,
    ) -> Self {
        Self {
            config,
            store,
            signer,
        }
    }

    /// Use one value as both object store and signer.
    pub fn with_backend<B>(config: StorageConfig, backend: Arc<B>) -> Self
    where
        B: ObjectStore + UrlSigner + 'static,
    {
        let store: Arc<dyn ObjectStore> = backend.clone();
        let signer: Arc<dyn UrlSigner> = backend;
        Self::new(config, store, signer)
    }

    /// Client backed by S3 through the AWS SDK.
    pub async fn connect(config: StorageConfig) -> StorageResult<Self> {
        let backend = AwsBackend::connect(&config).await?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    fn url_expires_in(&self) -> Duration {
        Duration::from_secs(self.config.url_expires_in_secs)
    }

    /// Resolve a URL or bare key to the key it names in the configured bucket.
    ///
    /// URL paths are percent-decoded, since signers escape key segments.
    pub fn resolve_key(&self, url_or_key: &str) -> StorageResult<String> {
        if url_or_key.is_empty() {
            return Err(StorageError::InvalidInput("URL or key is empty"));
        }

        let path = match parse_location(url_or_key) {
            Location::Url { path, .. } => path,
            Location::RawKey(key) => return Ok(key),
        };

        let path = match urlencoding::decode(&path) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => path,
        };

        if self.config.force_path_style {
            let bucket_prefix = format!("{}/", self.config.bucket);
            if let Some(key) = path.strip_prefix(&bucket_prefix) {
                return Ok(key.to_string());
            }
        }

        Ok(path)
    }

    async fn sign(&self, key: &str) -> StorageResult<String> {
        let bucket = &self.config.bucket;
        log::debug!("Signing read URL for {}/{}", bucket, key);

        self.signer
            .sign(bucket, key, self.url_expires_in())
            .await
            .map_err(|e| {
                log::warn!("Failed to sign URL for {}/{}: {}", bucket, key, e);
                StorageError::Backend(e)
            })
    }

    /// Store `buffer` under `base_path/user_id/file_name` and return a signed read URL for it.
    pub async fn save_buffer_to_s3(&self, request: UploadRequest) -> StorageResult<String> {
        let key = get_s3_key(&request.base_path, &request.user_id, &request.file_name);
        let bucket = &self.config.bucket;
        log::debug!(
            "Uploading {} bytes to {}/{}",
            request.buffer.len(),
            bucket,
            key
        );

        self.store
            .put(bucket, &key, request.buffer)
            .await
            .map_err(|e| {
                log::warn!("Failed to upload {}/{}: {}", bucket, key, e);
                StorageError::Backend(e)
            })?;

        self.sign(&key).await
    }

    /// Signed read URL for an existing object. Performs no write.
    pub async fn get_s3_url(&self, location: &FileLocation) -> StorageResult<String> {
        self.sign(&location.key()).await
    }

    pub async fn get_buffer_from_s3(&self, url_or_key: &str) -> StorageResult<Vec<u8>> {
        let key = self.resolve_key(url_or_key)?;
        let bucket = &self.config.bucket;
        log::debug!("Reading {}/{}", bucket, key);

        self.store.get(bucket, &key).await.map_err(|e| {
            log::warn!("Failed to read {}/{}: {}", bucket, key, e);
            StorageError::Backend(e)
        })
    }

    /// Return `url_or_key` untouched while it is a signed URL outside the
    /// refresh window, otherwise a newly signed URL for the same key.
    pub async fn refresh_signed_url(
        &self,
        url_or_key: &str,
        threshold_secs: i64,
    ) -> StorageResult<String> {
        let key = self.resolve_key(url_or_key)?;
        if !needs_refresh(url_or_key, threshold_secs) {
            return Ok(url_or_key.to_string());
        }

        log::debug!("Refreshing signed URL for {}", key);
        self.sign(&key).await
    }
}
