//! Presigned URL generation

use super::types::AwsBackend;
use crate::error::BackendResult;
use crate::storage::UrlSigner;
use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

#[async_trait]
impl UrlSigner for AwsBackend {
    /// Generate a presigned GET URL for object access
    async fn sign(&self, bucket: &str, key: &str, expires_in: Duration) -> BackendResult<String> {
        let presigning_config = PresigningConfig::builder()
            .expires_in(expires_in)
            .build()?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config)
            .await?;

        Ok(presigned_request.uri().to_string())
    }
}
