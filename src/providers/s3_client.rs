use crate::config::StorageConfig;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{
    Builder as S3ConfigBuilder, RequestChecksumCalculation, ResponseChecksumValidation,
};
use aws_sdk_s3::Client;

/// Build an S3 client from `config`.
///
/// Static credentials are used when both the key id and secret are present,
/// otherwise the default AWS provider chain is loaded.
pub async fn create_s3_client(config: &StorageConfig) -> Client {
    let mut builder = match (&config.access_key_id, &config.secret_access_key) {
        (Some(access_key_id), Some(secret_access_key)) => {
            let credentials = Credentials::new(
                access_key_id,
                secret_access_key,
                config.session_token.clone(),
                None,
                "s3-crud-static",
            );
            S3ConfigBuilder::new()
                .behavior_version(BehaviorVersion::latest())
                .credentials_provider(credentials)
        }
        _ => {
            let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
            S3ConfigBuilder::from(&shared)
        }
    };

    builder = builder.region(Region::new(config.region.clone()));

    // S3-compatible stores often reject the flexible checksum headers.
    if let Some(endpoint_url) = config.endpoint_url.as_deref() {
        builder = builder
            .endpoint_url(endpoint_url)
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .response_checksum_validation(ResponseChecksumValidation::WhenRequired);
    }

    if config.force_path_style {
        builder = builder.force_path_style(true);
    }

    Client::from_conf(builder.build())
}
