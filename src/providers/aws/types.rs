use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};
use crate::providers::s3_client::create_s3_client;
use aws_sdk_s3::Client;

/// Object store and URL signer over the AWS SDK. One client is built at
/// construction and shared by every call.
#[derive(Debug, Clone)]
pub struct AwsBackend {
    pub(super) client: Client,
}

impl AwsBackend {
    pub async fn connect(config: &StorageConfig) -> StorageResult<Self> {
        if config.bucket.trim().is_empty() {
            return Err(StorageError::Config("bucket name is empty".to_string()));
        }

        let client = create_s3_client(config).await;
        log::info!(
            "S3 client ready for bucket {} in {}",
            config.bucket,
            config.region
        );
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}
