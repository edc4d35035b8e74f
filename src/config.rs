//! Storage configuration loaded from the environment

use crate::error::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Lifetime of signed read URLs when none is configured: 1 hour
pub const DEFAULT_URL_EXPIRES_IN_SECS: u64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    pub endpoint_url: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub force_path_style: bool,
    pub url_expires_in_secs: u64,
}

impl StorageConfig {
    /// Config for `bucket` with every other field at its default.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
            force_path_style: false,
            url_expires_in_secs: DEFAULT_URL_EXPIRES_IN_SECS,
        }
    }

    pub fn from_env() -> StorageResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> StorageResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bucket = get("AWS_BUCKET_NAME")
            .ok_or_else(|| StorageError::Config("AWS_BUCKET_NAME must be set".to_string()))?;

        let force_path_style = match get("AWS_S3_FORCE_PATH_STYLE") {
            Some(value) => value.parse::<bool>().map_err(|e| {
                StorageError::Config(format!("AWS_S3_FORCE_PATH_STYLE: {}", e))
            })?,
            None => false,
        };

        let url_expires_in_secs = match get("AWS_S3_URL_EXPIRES_IN") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| StorageError::Config(format!("AWS_S3_URL_EXPIRES_IN: {}", e)))?,
            None => DEFAULT_URL_EXPIRES_IN_SECS,
        };

        Ok(Self {
            bucket,
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: get("AWS_ENDPOINT_URL"),
            access_key_id: get("AWS_ACCESS_KEY_ID"),
            secret_access_key: get("AWS_SECRET_ACCESS_KEY"),
            session_token: get("AWS_SESSION_TOKEN"),
            force_path_style,
            url_expires_in_secs,
        })
    }
}
