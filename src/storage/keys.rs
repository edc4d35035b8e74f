//! Storage key construction and extraction

use crate::error::{StorageError, StorageResult};
use url::Url;

/// Outcome of trying to read an input as a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Absolute URL with a host. `path` is the raw URL path without the leading `/`.
    Url { path: String, query: Option<String> },
    /// Anything else, taken to be a key already.
    RawKey(String),
}

impl Location {
    pub fn into_key(self) -> String {
        match self {
            Location::Url { path, .. } => path,
            Location::RawKey(key) => key,
        }
    }
}

/// Build the object key `base_path/user_id/file_name`.
///
/// Segments are joined verbatim, so a `file_name` containing `/` yields a deeper key.
pub fn get_s3_key(base_path: &str, user_id: &str, file_name: &str) -> String {
    format!("{}/{}/{}", base_path, user_id, file_name)
}

pub fn parse_location(input: &str) -> Location {
    let url = match Url::parse(input) {
        Ok(url) if url.host_str().is_some() => url,
        _ => return Location::RawKey(input.to_string()),
    };

    Location::Url {
        path: url.path().trim_start_matches('/').to_string(),
        query: url.query().map(str::to_string),
    }
}

/// Normalize a signed URL or a bare key to the object key.
pub fn extract_key_from_s3_url(url_or_key: &str) -> StorageResult<String> {
    if url_or_key.is_empty() {
        return Err(StorageError::InvalidInput("URL or key is empty"));
    }
    Ok(parse_location(url_or_key).into_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_key_from_parts() {
        assert_eq!(get_s3_key("images", "user123", "file.png"), "images/user123/file.png");
    }

    #[test]
    fn keeps_nested_file_names() {
        assert_eq!(
            get_s3_key("files", "user456", "folder/subfolder/doc.pdf"),
            "files/user456/folder/subfolder/doc.pdf"
        );
    }

    #[test]
    fn extracts_key_from_virtual_hosted_url() {
        let key =
            extract_key_from_s3_url("https://bucket.s3.amazonaws.com/images/user123/file.png")
                .unwrap();
        assert_eq!(key, "images/user123/file.png");
    }

    #[test]
    fn drops_query_string() {
        let key = extract_key_from_s3_url(
            "https://bucket.s3.amazonaws.com/images/user123/file.png?X-Amz-Signature=abc",
        )
        .unwrap();
        assert_eq!(key, "images/user123/file.png");
    }

    #[test]
    fn bare_key_passes_through() {
        let key = get_s3_key("images", "user123", "nested/dir/file.png");
        assert_eq!(extract_key_from_s3_url(&key).unwrap(), key);
    }

    #[test]
    fn scheme_without_host_is_a_key() {
        assert_eq!(
            extract_key_from_s3_url("tag:2024/report.csv").unwrap(),
            "tag:2024/report.csv"
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = extract_key_from_s3_url("").unwrap_err();
        assert!(matches!(err, StorageError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: URL or key is empty");
    }

    #[test]
    fn escaped_segments_are_kept_verbatim() {
        let key = get_s3_key("reports", "u1", "100%25.csv");
        let url = format!("https://bucket.s3.amazonaws.com/{}?X-Amz-Signature=abc", key);
        assert_eq!(extract_key_from_s3_url(&url).unwrap(), key);
    }

    #[test]
    fn wrapping_a_key_in_a_url_round_trips() {
        for key in ["a/b/c.txt", "documents/user123/document.pdf", "x/y/deep/er/z.bin"] {
            let url = format!(
                "https://bucket.example.com/{}?X-Amz-Signature=deadbeef&foo=bar",
                key
            );
            assert_eq!(extract_key_from_s3_url(&url).unwrap(), key);
        }
    }

    #[test]
    fn parse_location_tags_both_shapes() {
        assert_eq!(
            parse_location("https://b.host/k/v?x=1"),
            Location::Url {
                path: "k/v".to_string(),
                query: Some("x=1".to_string()),
            }
        );
        assert_eq!(parse_location("k/v"), Location::RawKey("k/v".to_string()));
    }
}
