//! inspect-core: Core library for the s3-inspect bucket inspector
//!
//! This crate provides the core functionality for s3-inspect, including:
//! - Configuration management
//! - Ordering of object summaries by modification time
//! - The region to website-endpoint table
//! - BucketStore trait and the inspection workflow built on it
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! so the workflow can be tested against a mocked store.

pub mod config;
pub mod error;
pub mod inspector;
pub mod ordering;
pub mod region;
pub mod traits;

pub use config::{ColorMode, Config, ConfigManager, Defaults, OutputFormat, ProviderConfig};
pub use error::{Error, Result};
pub use inspector::{InspectRequest, InspectionReport, Inspector};
pub use region::{Region, UNDEFINED_ENDPOINT, normalize_location, website_endpoint};
pub use traits::{BucketStore, ListRequest, ObjectListing, ObjectSummary};
