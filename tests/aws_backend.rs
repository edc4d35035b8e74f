//! Integration tests for the AWS SDK backend against a mock S3 endpoint.
//!
//! wiremock plays the part of an S3-compatible store with path-style addressing.

use s3_crud::storage::signed_url_metadata;
use s3_crud::{
    needs_refresh, FileLocation, StorageClient, StorageConfig, StorageError, UploadRequest,
};
use wiremock::matchers::{body_bytes, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_with_mock(endpoint: &str) -> StorageConfig {
    let mut config = StorageConfig::new("test-bucket");
    config.endpoint_url = Some(endpoint.to_string());
    config.access_key_id = Some("AKIDEXAMPLE".to_string());
    config.secret_access_key = Some("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string());
    config.force_path_style = true;
    config
}

async fn client_for(server: &MockServer) -> StorageClient {
    StorageClient::connect(config_with_mock(&server.uri()))
        .await
        .expect("client should build")
}

#[tokio::test]
async fn upload_puts_buffer_under_constructed_key() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/test-bucket/documents/user123/document.pdf"))
        .and(body_bytes(b"test content".to_vec()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let url = client
        .save_buffer_to_s3(UploadRequest {
            user_id: "user123".to_string(),
            buffer: b"test content".to_vec(),
            file_name: "document.pdf".to_string(),
            base_path: "documents".to_string(),
        })
        .await
        .unwrap();

    assert!(url.starts_with(&server.uri()));
    assert!(url.contains("X-Amz-Signature="));
    assert_eq!(
        client.resolve_key(&url).unwrap(),
        "documents/user123/document.pdf"
    );
}

#[tokio::test]
async fn signed_url_is_issued_without_network() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let url = client
        .get_s3_url(&FileLocation {
            user_id: "user123".to_string(),
            file_name: "test.txt".to_string(),
            base_path: "files".to_string(),
        })
        .await
        .unwrap();

    let metadata = signed_url_metadata(&url).expect("presigned URL carries expiry metadata");
    assert_eq!(metadata.expires_in_secs, 3600);
    assert!(!needs_refresh(&url, 60));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn read_returns_object_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-bucket/files/user123/test.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("test content"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let body = client
        .get_buffer_from_s3("files/user123/test.txt")
        .await
        .unwrap();

    assert_eq!(body, b"test content");
}

#[tokio::test]
async fn backend_errors_propagate() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            r#"<?xml version="1.0" encoding="UTF-8"?><Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>"#,
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .save_buffer_to_s3(UploadRequest {
            user_id: "user123".to_string(),
            buffer: b"test".to_vec(),
            file_name: "test.txt".to_string(),
            base_path: "files".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Backend(_)));
}

#[tokio::test]
async fn empty_bucket_is_rejected_on_connect() {
    let mut config = config_with_mock("http://127.0.0.1:9");
    config.bucket = String::new();
    let result = StorageClient::connect(config).await;
    assert!(matches!(result, Err(StorageError::Config(_))));
}
