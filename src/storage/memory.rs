//! In-memory object store and signer for tests and local runs

use super::backend::{ObjectStore, UrlSigner};
use super::expiry::AMZ_DATE_FORMAT;
use crate::error::BackendResult;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

/// A write observed by [`MemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecord {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
    puts: Mutex<Vec<PutRecord>>,
    signs: Mutex<Vec<(String, String)>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `put` seen so far, in call order.
    pub async fn puts(&self) -> Vec<PutRecord> {
        self.puts.lock().await.clone()
    }

    /// `(bucket, key)` of every `sign` seen so far, in call order.
    pub async fn signs(&self) -> Vec<(String, String)> {
        self.signs.lock().await.clone()
    }
}

/// Encode URI path - encode each segment individually, keep / as separator
fn encode_uri_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl ObjectStore for MemoryBackend {
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> BackendResult<()> {
        self.objects
            .lock()
            .await
            .insert((bucket.to_string(), key.to_string()), body.clone());
        self.puts.lock().await.push(PutRecord {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
        });
        Ok(())
    }

    async fn get(&self, bucket: &str, key: &str) -> BackendResult<Vec<u8>> {
        self.objects
            .lock()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| format!("NoSuchKey: {}/{}", bucket, key).into())
    }
}

#[async_trait]
impl UrlSigner for MemoryBackend {
    async fn sign(&self, bucket: &str, key: &str, expires_in: Duration) -> BackendResult<String> {
        self.signs
            .lock()
            .await
            .push((bucket.to_string(), key.to_string()));

        let amz_date = Utc::now().format(AMZ_DATE_FORMAT).to_string();
        Ok(format!(
            "https://{}.s3.memory.local/{}?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Date={}&X-Amz-Expires={}&X-Amz-SignedHeaders=host&X-Amz-Signature=memory",
            bucket,
            encode_uri_path(key),
            amz_date,
            expires_in.as_secs()
        ))
    }
}
