mod objects;
mod presigned;
mod types;

pub use types::AwsBackend;
