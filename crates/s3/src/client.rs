//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the BucketStore trait from inspect-core.

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use inspect_core::{
    BucketStore, Error, ListRequest, ObjectListing, ObjectSummary, ProviderConfig, Result,
    normalize_location,
};

/// Region used until the bucket's own region is known
const FALLBACK_REGION: &str = "us-east-1";

/// Error code returned by GetBucketWebsite when hosting is not configured
const NO_WEBSITE_CODE: &str = "NoSuchWebsiteConfiguration";

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
    sdk_config: aws_config::SdkConfig,
    force_path_style: bool,
}

impl S3Client {
    /// Create a new S3 client using the default credential chain
    ///
    /// Credentials come from the environment, shared config files or the
    /// instance role. The profile and endpoint can be overridden.
    pub async fn new(provider: &ProviderConfig) -> Result<Self> {
        provider.validate()?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(profile) = &provider.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &provider.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        let region = sdk_config
            .region()
            .map(|r| r.as_ref().to_string())
            .unwrap_or_else(|| FALLBACK_REGION.to_string());
        tracing::debug!(region = %region, endpoint = ?provider.endpoint_url, "loaded SDK config");

        let inner = build_client(&sdk_config, &region, provider.force_path_style);

        Ok(Self {
            inner,
            sdk_config,
            force_path_style: provider.force_path_style,
        })
    }

    /// Client bound to a bucket's region
    fn regional(&self, region: &str) -> aws_sdk_s3::Client {
        build_client(&self.sdk_config, region, self.force_path_style)
    }
}

fn build_client(
    sdk_config: &aws_config::SdkConfig,
    region: &str,
    force_path_style: bool,
) -> aws_sdk_s3::Client {
    let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
        .region(aws_sdk_s3::config::Region::new(region.to_string()))
        .force_path_style(force_path_style)
        .build();
    aws_sdk_s3::Client::from_conf(s3_config)
}

#[async_trait]
impl BucketStore for S3Client {
    async fn bucket_region(&self, bucket: &str) -> Result<String> {
        let response = self
            .inner
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| sdk_error(e, bucket))?;

        let constraint = response.location_constraint().map(|c| c.as_str());
        Ok(normalize_location(constraint))
    }

    async fn list_objects(&self, request: &ListRequest) -> Result<ObjectListing> {
        let response = self
            .regional(&request.region)
            .list_objects_v2()
            .bucket(&request.bucket)
            .set_prefix(request.prefix.clone())
            .set_max_keys(request.max_keys)
            .send()
            .await
            .map_err(|e| sdk_error(e, &request.bucket))?;

        let mut objects = Vec::with_capacity(response.contents().len());
        for object in response.contents() {
            let key = object.key().unwrap_or_default();
            let Some(modified) = object.last_modified().and_then(to_timestamp) else {
                tracing::debug!(key = %key, "skipping object without last-modified time");
                continue;
            };
            objects.push(ObjectSummary::new(key, modified, object.size().unwrap_or(0)));
        }

        Ok(ObjectListing {
            objects,
            truncated: response.is_truncated().unwrap_or(false),
        })
    }

    async fn website_enabled(&self, bucket: &str, region: &str) -> Result<bool> {
        match self
            .regional(region)
            .get_bucket_website()
            .bucket(bucket)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                if website_absent(e.as_service_error().and_then(|se| se.code())) {
                    Ok(false)
                } else {
                    Err(sdk_error(e, bucket))
                }
            }
        }
    }
}

/// Convert an SDK timestamp, dropping values outside jiff's range
fn to_timestamp(dt: &aws_smithy_types::DateTime) -> Option<jiff::Timestamp> {
    jiff::Timestamp::new(dt.secs(), dt.subsec_nanos() as i32).ok()
}

fn sdk_error<E, R>(err: SdkError<E, R>, bucket: &str) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    let code = err
        .as_service_error()
        .and_then(|se| se.code())
        .map(str::to_string);
    let message = DisplayErrorContext(&err).to_string();
    classify(code.as_deref(), message, bucket)
}

/// Whether a failed website lookup just means hosting is off
fn website_absent(code: Option<&str>) -> bool {
    code == Some(NO_WEBSITE_CODE)
}

/// Map a provider error code onto the inspector's error kinds
fn classify(code: Option<&str>, message: String, bucket: &str) -> Error {
    match code {
        Some("NoSuchBucket" | "NotFound") => Error::NotFound(format!("Bucket not found: {bucket}")),
        Some(
            "AccessDenied"
            | "AllAccessDisabled"
            | "Forbidden"
            | "InvalidAccessKeyId"
            | "SignatureDoesNotMatch"
            | "ExpiredToken"
            | "InvalidToken",
        ) => Error::Auth(message),
        _ => Error::Provider(message),
    }
}
