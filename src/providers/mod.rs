//! Storage providers backing [`crate::storage::ObjectStore`] and [`crate::storage::UrlSigner`]

pub mod aws;
pub mod s3_client;
