//! Bucket inspection workflow
//!
//! Resolves the bucket region, lists one page of objects, orders them by
//! modification time, and builds the website URL of the newest object when
//! the bucket is hosted as a static website.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::ordering::{newest, oldest, sort_by_last_modified};
use crate::region::website_endpoint;
use crate::traits::{BucketStore, ListRequest, ObjectSummary};

/// What to inspect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectRequest {
    /// Bucket name
    pub bucket: String,
    /// Key prefix filter
    pub prefix: Option<String>,
    /// Page size of the list call
    pub max_keys: Option<i32>,
}

impl InspectRequest {
    /// Build a request from raw command-line values
    ///
    /// A missing or blank bucket is a usage error. An empty prefix is the
    /// same as no prefix.
    pub fn new(bucket: Option<String>, prefix: Option<String>) -> Result<Self> {
        let bucket = bucket
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .ok_or_else(|| {
                Error::Usage("Start the program with a valid bucket name as argument".into())
            })?;

        Ok(Self {
            bucket,
            prefix: prefix.filter(|p| !p.is_empty()),
            max_keys: None,
        })
    }

    /// Set the page size of the list call
    pub fn with_max_keys(mut self, max_keys: Option<i32>) -> Self {
        self.max_keys = max_keys;
        self
    }
}

/// Result of inspecting a bucket
#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    pub bucket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub region: String,
    /// Objects in listing order
    pub objects: Vec<ObjectSummary>,
    /// Objects ascending by last-modified time
    pub sorted: Vec<ObjectSummary>,
    pub oldest: ObjectSummary,
    pub newest: ObjectSummary,
    /// The listing had more objects than one page
    pub truncated: bool,
    /// Website URL of the newest object, when website hosting is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

/// Runs an inspection against a [`BucketStore`]
pub struct Inspector<S> {
    store: S,
}

impl<S: BucketStore> Inspector<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Inspect the requested bucket
    pub async fn inspect(&self, request: &InspectRequest) -> Result<InspectionReport> {
        let bucket = &request.bucket;

        let region = self.store.bucket_region(bucket).await?;
        tracing::debug!(bucket = %bucket, region = %region, "resolved bucket region");

        if let Some(prefix) = &request.prefix {
            tracing::info!("Listing objects using prefix: {prefix}");
        }

        let listing = self
            .store
            .list_objects(&ListRequest {
                bucket: bucket.clone(),
                region: region.clone(),
                prefix: request.prefix.clone(),
                max_keys: request.max_keys,
            })
            .await?;
        tracing::debug!(
            count = listing.objects.len(),
            truncated = listing.truncated,
            "listed objects"
        );

        if listing.truncated {
            // Only the first page is inspected
            tracing::debug!(bucket = %bucket, "listing truncated after first page");
        }

        let objects = listing.objects;
        let sorted = sort_by_last_modified(&objects);

        let (Some(oldest), Some(newest)) = (oldest(&sorted), newest(&objects)) else {
            return Err(Error::EmptyBucket(bucket.clone()));
        };
        let (oldest, newest) = (oldest.clone(), newest.clone());

        let website_url = if self.store.website_enabled(bucket, &region).await? {
            let endpoint = website_endpoint(bucket, &region);
            Some(format!("{endpoint}/{}", newest.key))
        } else {
            tracing::debug!(bucket = %bucket, "website hosting not configured");
            None
        };

        Ok(InspectionReport {
            bucket: bucket.clone(),
            prefix: request.prefix.clone(),
            region,
            objects,
            sorted,
            oldest,
            newest,
            truncated: listing.truncated,
            website_url,
        })
    }
}
