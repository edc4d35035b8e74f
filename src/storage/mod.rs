//! Storage module - object keys, signed URLs and buffer uploads
//!
//! This module is organized into submodules:
//! - `keys`: Key construction and extraction from URLs
//! - `expiry`: Signed URL expiry checks
//! - `backend`: Object store and signer traits
//! - `memory`: In-memory backend
//! - `client`: Upload, sign, read and refresh operations

mod backend;
mod client;
mod expiry;
mod keys;
pub mod memory;

// Re-export backend seams
pub use backend::{ObjectStore, UrlSigner};

// Re-export client and its inputs
pub use client::{FileLocation, StorageClient, UploadRequest};

// Re-export expiry checks
pub use expiry::{
    needs_refresh, needs_refresh_at, signed_url_metadata, SignedUrlMetadata, AMZ_DATE_FORMAT,
};

// Re-export key helpers
pub use keys::{extract_key_from_s3_url, get_s3_key, parse_location, Location};
