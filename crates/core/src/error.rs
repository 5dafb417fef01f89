//! Error types for inspect-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for inspect-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bucket inspection
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid command-line input
    #[error("Usage error: {0}")]
    Usage(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Provider rejected the credentials or the caller lacks permission
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Bucket does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other provider failure
    #[error("Provider error: {0}")]
    Provider(String),

    /// Listing returned no objects, so there is no oldest or newest
    #[error("Bucket '{0}' has no objects matching the request")]
    EmptyBucket(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            // UsageError
            Error::Usage(_) | Error::Config(_) | Error::TomlParse(_) | Error::InvalidUrl(_) => 2,
            Error::Provider(_) => 3,     // NetworkError
            Error::Auth(_) => 4,         // AuthError
            Error::NotFound(_) => 5,     // NotFound
            Error::EmptyBucket(_) => 8,  // EmptyBucket
            _ => 1,                      // GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::Usage("test".into()).exit_code(), 2);
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        assert_eq!(Error::TomlParse(parse_err).exit_code(), 2);
        assert_eq!(Error::Provider("test".into()).exit_code(), 3);
        assert_eq!(Error::Auth("test".into()).exit_code(), 4);
        assert_eq!(Error::NotFound("test".into()).exit_code(), 5);
        assert_eq!(Error::EmptyBucket("test".into()).exit_code(), 8);
        assert_eq!(
            Error::Io(std::io::Error::other("disk")).exit_code(),
            1
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::EmptyBucket("demo".into());
        assert_eq!(err.to_string(), "Bucket 'demo' has no objects matching the request");

        let err = Error::NotFound("bucket demo".into());
        assert_eq!(err.to_string(), "Not found: bucket demo");
    }
}
