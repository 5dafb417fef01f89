//! Exit code definitions for s3-inspect
//!
//! Scripts rely on these values; treat any renumbering as a breaking change.

use inspect_core::Error;

/// Exit codes for the s3-inspect application.
///
/// These codes follow a consistent convention to allow scripts and automation
/// to handle different error scenarios appropriately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Inspection completed successfully
    Success = 0,

    /// General/unspecified error
    GeneralError = 1,

    /// User input error: missing bucket, invalid option or config
    UsageError = 2,

    /// Provider or network failure
    NetworkError = 3,

    /// Authentication or permission failure
    AuthError = 4,

    /// Bucket does not exist
    NotFound = 5,

    /// Bucket (or prefix) holds no objects
    EmptyBucket = 8,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Create exit code from i32 value
    ///
    /// Returns None if the value doesn't correspond to a known exit code.
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::GeneralError),
            2 => Some(Self::UsageError),
            3 => Some(Self::NetworkError),
            4 => Some(Self::AuthError),
            5 => Some(Self::NotFound),
            8 => Some(Self::EmptyBucket),
            _ => None,
        }
    }

    /// Exit code matching a core error
    pub fn from_error(err: &Error) -> Self {
        Self::from_i32(err.exit_code()).unwrap_or(Self::GeneralError)
    }
}
