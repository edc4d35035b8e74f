//! Storage key and signed URL helpers for S3-compatible object stores.
//!
//! Keys are built as `base_path/user_id/file_name`. [`StorageClient`] uploads
//! buffers under those keys and hands back time-limited read URLs, and
//! [`needs_refresh`] tells callers when a URL they hold should be re-signed.

pub mod config;
pub mod error;
pub mod providers;
pub mod storage;

pub use config::StorageConfig;
pub use error::{BackendResult, BoxError, StorageError, StorageResult};
pub use providers::aws::AwsBackend;
pub use storage::{
    extract_key_from_s3_url, get_s3_key, needs_refresh, FileLocation, ObjectStore, StorageClient,
    UploadRequest, UrlSigner,
};
