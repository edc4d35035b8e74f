use super::types::AwsBackend;
use crate::error::BackendResult;
use crate::storage::ObjectStore;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

#[async_trait]
impl ObjectStore for AwsBackend {
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> BackendResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await?;
        Ok(())
    }

    async fn get(&self, bucket: &str, key: &str) -> BackendResult<Vec<u8>> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        let data = response.body.collect().await?;
        Ok(data.into_bytes().to_vec())
    }
}
