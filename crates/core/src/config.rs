//! Configuration management
//!
//! This module handles loading the s3-inspect configuration file.
//! The configuration file is stored in TOML format at
//! ~/.config/s3-inspect/config.toml, or under `$S3_INSPECT_CONFIG_DIR`.
//!
//! Credentials are never stored here; the provider's default credential
//! chain supplies them.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Current configuration schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Environment variable that relocates the configuration directory
pub const CONFIG_DIR_ENV: &str = "S3_INSPECT_CONFIG_DIR";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Schema version
    pub schema_version: u32,

    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,

    /// Provider connection settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether colors apply, given if stdout is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Default settings for CLI behavior
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    /// Output format: "human" or "json"
    #[serde(default)]
    pub output: OutputFormat,

    /// Color mode: "auto", "always", or "never"
    #[serde(default)]
    pub color: ColorMode,
}

/// How to reach the storage provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    /// Shared-config profile used by the credential chain
    #[serde(default)]
    pub profile: Option<String>,

    /// Endpoint override for S3-compatible services
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Use path-style bucket addressing
    #[serde(default)]
    pub force_path_style: bool,

    /// Page size of the list call
    #[serde(default)]
    pub max_keys: Option<i32>,
}

impl ProviderConfig {
    /// Check values that would otherwise fail deep inside the SDK
    pub fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint_url {
            url::Url::parse(endpoint)?;
        }
        if let Some(max_keys) = self.max_keys
            && !(1..=1000).contains(&max_keys)
        {
            return Err(Error::Config(format!(
                "max_keys must be between 1 and 1000, got {max_keys}"
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            defaults: Defaults::default(),
            provider: ProviderConfig::default(),
        }
    }
}

/// Configuration manager handles loading config
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the default config path
    pub fn new() -> Result<Self> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| Error::Config("Could not determine config directory".into()))?
                .join("s3-inspect"),
        };
        Ok(Self {
            config_path: config_dir.join("config.toml"),
        })
    }

    /// Create a ConfigManager with a custom path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, returns a default configuration.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&content)?;

        if config.schema_version > SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "Configuration file version {} is newer than supported version {}. Please upgrade s3-inspect.",
                config.schema_version, SCHEMA_VERSION
            )));
        }

        config.provider.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let manager = ConfigManager::with_path(config_path);
        (manager, temp_dir)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.schema_version, SCHEMA_VERSION);
        assert_eq!(config.defaults.output, OutputFormat::Human);
        assert_eq!(config.defaults.color, ColorMode::Auto);
        assert_eq!(config.provider, ProviderConfig::default());
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let (manager, _temp_dir) = temp_config_manager();
        let config = manager.load().unwrap();
        assert_eq!(config.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn test_load_full_file() {
        let (manager, _temp_dir) = temp_config_manager();
        std::fs::write(
            manager.config_path(),
            r#"
            schema_version = 1

            [defaults]
            output = "json"
            color = "always"

            [provider]
            profile = "staging"
            endpoint_url = "http://localhost:9000"
            max_keys = 250
            "#,
        )
        .unwrap();

        let loaded = manager.load().unwrap();

        assert_eq!(loaded.defaults.output, OutputFormat::Json);
        assert_eq!(loaded.defaults.color, ColorMode::Always);
        assert_eq!(loaded.provider.profile.as_deref(), Some("staging"));
        assert_eq!(loaded.provider.max_keys, Some(250));
        assert!(!loaded.provider.force_path_style);
    }

    #[test]
    fn test_unknown_color_mode_rejected() {
        let (manager, _temp_dir) = temp_config_manager();
        std::fs::write(
            manager.config_path(),
            "schema_version = 1\n[defaults]\ncolor = \"sometimes\"\n",
        )
        .unwrap();

        let err = manager.load().unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_color_mode_enabled() {
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let (manager, _temp_dir) = temp_config_manager();
        std::fs::write(
            manager.config_path(),
            "schema_version = 1\n[provider]\nforce_path_style = true\n",
        )
        .unwrap();

        let config = manager.load().unwrap();
        assert!(config.provider.force_path_style);
        assert_eq!(config.defaults.output, OutputFormat::Human);
    }

    #[test]
    fn test_schema_version_too_new() {
        let (manager, _temp_dir) = temp_config_manager();

        let content = format!("schema_version = {}\n", SCHEMA_VERSION + 1);
        std::fs::write(manager.config_path(), content).unwrap();

        let result = manager.load();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("newer than supported"));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let provider = ProviderConfig {
            endpoint_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(provider.validate(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_max_keys_range() {
        let provider = ProviderConfig {
            max_keys: Some(0),
            ..Default::default()
        };
        assert!(matches!(provider.validate(), Err(Error::Config(_))));

        let provider = ProviderConfig {
            max_keys: Some(1000),
            ..Default::default()
        };
        assert!(provider.validate().is_ok());
    }
}
