//! Provider regions and static-website endpoints
//!
//! S3 website hosting uses two different host formats depending on the
//! region, and some partitions have no public website endpoint at all.
//! The mapping is a closed table over [`Region`].

use std::fmt;

/// Returned for regions that have no website endpoint the tool can build.
pub const UNDEFINED_ENDPOINT: &str = "<UNDEFINED>";

/// Known provider regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    UsEast1,
    UsEast2,
    UsWest1,
    UsWest2,
    CaCentral1,
    EuWest1,
    EuWest2,
    EuWest3,
    EuCentral1,
    EuNorth1,
    ApSouth1,
    ApSoutheast1,
    ApSoutheast2,
    ApNortheast1,
    ApNortheast2,
    SaEast1,
    CnNorth1,
    GovCloud,
}

/// How a region formats its website host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebsiteStyle {
    /// `{bucket}.s3-website-{region}.amazonaws.com`
    Dashed,
    /// `{bucket}.s3-website.{region}.amazonaws.com`
    Dotted,
    /// Region exists but the endpoint cannot be derived
    Unsupported,
    /// Not part of the table
    Unknown,
}

impl Region {
    /// Every region in the enumeration
    pub const ALL: [Region; 18] = [
        Region::UsEast1,
        Region::UsEast2,
        Region::UsWest1,
        Region::UsWest2,
        Region::CaCentral1,
        Region::EuWest1,
        Region::EuWest2,
        Region::EuWest3,
        Region::EuCentral1,
        Region::EuNorth1,
        Region::ApSouth1,
        Region::ApSoutheast1,
        Region::ApSoutheast2,
        Region::ApNortheast1,
        Region::ApNortheast2,
        Region::SaEast1,
        Region::CnNorth1,
        Region::GovCloud,
    ];

    /// Provider name of the region
    pub const fn name(self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsEast2 => "us-east-2",
            Region::UsWest1 => "us-west-1",
            Region::UsWest2 => "us-west-2",
            Region::CaCentral1 => "ca-central-1",
            Region::EuWest1 => "eu-west-1",
            Region::EuWest2 => "eu-west-2",
            Region::EuWest3 => "eu-west-3",
            Region::EuCentral1 => "eu-central-1",
            Region::EuNorth1 => "eu-north-1",
            Region::ApSouth1 => "ap-south-1",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApSoutheast2 => "ap-southeast-2",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::ApNortheast2 => "ap-northeast-2",
            Region::SaEast1 => "sa-east-1",
            Region::CnNorth1 => "cn-north-1",
            Region::GovCloud => "us-gov-west-1",
        }
    }

    /// Look up a region by provider name
    ///
    /// `gov-cloud` is accepted as an alias of `us-gov-west-1`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "gov-cloud" {
            return Some(Region::GovCloud);
        }
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Website host format for this region
    pub const fn website_style(self) -> WebsiteStyle {
        match self {
            Region::UsEast1
            | Region::UsWest1
            | Region::UsWest2
            | Region::EuWest1
            | Region::ApSoutheast1
            | Region::ApSoutheast2
            | Region::ApNortheast1
            | Region::SaEast1 => WebsiteStyle::Dashed,
            Region::EuCentral1 | Region::ApNortheast2 => WebsiteStyle::Dotted,
            Region::CnNorth1 | Region::GovCloud => WebsiteStyle::Unsupported,
            _ => WebsiteStyle::Unknown,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turn a bucket location constraint into a region name
///
/// Buckets in us-east-1 report no constraint, and old eu-west-1 buckets
/// report the legacy `EU` value.
pub fn normalize_location(constraint: Option<&str>) -> String {
    match constraint {
        None | Some("") | Some("US") => Region::UsEast1.name().to_string(),
        Some("EU") => Region::EuWest1.name().to_string(),
        Some(other) => other.to_string(),
    }
}

/// Website endpoint of `bucket` in the named region
///
/// Returns [`UNDEFINED_ENDPOINT`] for cn-north-1 and GovCloud, and an empty
/// string for any region outside the table.
pub fn website_endpoint(bucket: &str, region: &str) -> String {
    let Some(region) = Region::from_name(region) else {
        return String::new();
    };

    match region.website_style() {
        WebsiteStyle::Dashed => format!("http://{bucket}.s3-website-{region}.amazonaws.com"),
        WebsiteStyle::Dotted => format!("http://{bucket}.s3-website.{region}.amazonaws.com"),
        WebsiteStyle::Unsupported => UNDEFINED_ENDPOINT.to_string(),
        WebsiteStyle::Unknown => String::new(),
    }
}
