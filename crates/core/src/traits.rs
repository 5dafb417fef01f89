//! BucketStore trait definition
//!
//! This trait defines the provider calls the inspector needs.
//! It keeps the inspection workflow independent of the S3 SDK.

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Metadata for one stored object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    /// Object key
    pub key: String,

    /// Last modified timestamp
    pub last_modified: Timestamp,

    /// Size in bytes
    pub size_bytes: i64,
}

impl ObjectSummary {
    /// Create a new summary
    pub fn new(key: impl Into<String>, last_modified: Timestamp, size_bytes: i64) -> Self {
        Self {
            key: key.into(),
            last_modified,
            size_bytes,
        }
    }

    /// Human-readable size
    pub fn size_human(&self) -> String {
        humansize::format_size(self.size_bytes.max(0) as u64, humansize::BINARY)
    }
}

/// One page of a list operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectListing {
    /// Listed objects, in provider order
    pub objects: Vec<ObjectSummary>,

    /// Whether more objects exist beyond this page
    pub truncated: bool,
}

/// Parameters of a list call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    /// Bucket to list
    pub bucket: String,

    /// Region the bucket lives in
    pub region: String,

    /// Key prefix to filter by
    pub prefix: Option<String>,

    /// Maximum number of keys in the page
    pub max_keys: Option<i32>,
}

/// Provider calls needed to inspect a bucket
///
/// Implemented by the S3 adapter and mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Resolve the region a bucket lives in
    async fn bucket_region(&self, bucket: &str) -> Result<String>;

    /// List a single page of objects
    async fn list_objects(&self, request: &ListRequest) -> Result<ObjectListing>;

    /// Whether static-website hosting is configured on the bucket
    async fn website_enabled(&self, bucket: &str, region: &str) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_summary_size_human() {
        let ts: Timestamp = "2024-01-01T00:00:00Z".parse().unwrap();
        let summary = ObjectSummary::new("logs/a", ts, 2048);
        assert_eq!(summary.key, "logs/a");
        assert_eq!(summary.size_human(), "2 KiB");
    }

    #[test]
    fn test_object_summary_serializes_timestamp() {
        let ts: Timestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        let summary = ObjectSummary::new("a", ts, 1);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["key"], "a");
        assert_eq!(json["last_modified"], "2024-01-02T03:04:05Z");
    }
}
