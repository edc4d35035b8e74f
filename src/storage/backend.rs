//! Seams to the external object store and URL signer

use crate::error::BackendResult;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` under `key`, replacing any existing object.
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> BackendResult<()>;

    async fn get(&self, bucket: &str, key: &str) -> BackendResult<Vec<u8>>;
}

#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// Issue a time-limited read URL for `key`.
    async fn sign(&self, bucket: &str, key: &str, expires_in: Duration) -> BackendResult<String>;
}
