//! Configuration management for `AirScan`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AirScanError;
use crate::advisory::UnknownSeasonPolicy;
use crate::models::Season;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `AirScan` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirScanConfig {
    /// Location store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Advisory evaluation settings
    #[serde(default)]
    pub advisory: AdvisoryConfig,
}

/// Location store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store directory location
    #[serde(default = "default_store_location")]
    pub location: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Advisory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// Handling of unrecognized season names (reject or ignore)
    #[serde(default = "default_unknown_season")]
    pub unknown_season: String,
    /// Season used when a request names none
    #[serde(default)]
    pub default_season: Option<String>,
}

fn default_store_location() -> String {
    "~/.cache/airscan".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_unknown_season() -> String {
    UnknownSeasonPolicy::default().to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            location: default_store_location(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            unknown_season: default_unknown_season(),
            default_season: None,
        }
    }
}

impl AirScanConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // AIRSCAN_LOGGING__LEVEL=debug overrides logging.level
        builder = builder.add_source(
            Environment::with_prefix("AIRSCAN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AirScanConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("airscan").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.store.location.is_empty() {
            self.store.location = default_store_location();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.advisory.unknown_season.is_empty() {
            self.advisory.unknown_season = default_unknown_season();
        }
        if self
            .advisory
            .default_season
            .as_ref()
            .is_some_and(|s| s.trim().is_empty())
        {
            self.advisory.default_season = None;
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_logging()?;
        self.validate_advisory()?;
        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AirScanError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AirScanError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    fn validate_advisory(&self) -> Result<()> {
        self.unknown_season_policy()?;
        self.default_season()?;
        Ok(())
    }

    /// Parsed `advisory.unknown_season`
    pub fn unknown_season_policy(&self) -> crate::Result<UnknownSeasonPolicy> {
        self.advisory.unknown_season.parse()
    }

    /// Parsed `advisory.default_season`, if set
    pub fn default_season(&self) -> crate::Result<Option<Season>> {
        self.advisory
            .default_season
            .as_deref()
            .map(|name| {
                name.parse::<Season>().map_err(|_| {
                    AirScanError::config(format!(
                        "Invalid default season '{name}'. Must be one of: winter, spring, summer, monsoon"
                    ))
                })
            })
            .transpose()
    }

    /// Store directory with a leading `~` expanded
    pub fn store_path(&self) -> Result<PathBuf> {
        let location = self.store.location.as_str();
        match location.strip_prefix("~") {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                let home = dirs::home_dir()
                    .ok_or_else(|| AirScanError::config("Unable to determine home directory"))?;
                Ok(home.join(rest.trim_start_matches('/')))
            }
            _ => Ok(PathBuf::from(location)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_config() {
        let config = AirScanConfig::default();
        assert_eq!(config.store.location, "~/.cache/airscan");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.advisory.unknown_season, "reject");
        assert!(config.advisory.default_season.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AirScanConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = AirScanConfig::default();
        config.logging.format = "xml".to_string();
        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("Invalid log format")
        );
    }

    #[test]
    fn test_config_validation_unknown_season_policy() {
        let mut config = AirScanConfig::default();
        config.advisory.unknown_season = "skip".to_string();
        assert!(config.validate().is_err());

        config.advisory.unknown_season = "ignore".to_string();
        assert_eq!(
            config.unknown_season_policy().unwrap(),
            UnknownSeasonPolicy::Ignore
        );
    }

    #[test]
    fn test_config_validation_default_season() {
        let mut config = AirScanConfig::default();
        config.advisory.default_season = Some("autumn".to_string());
        assert!(config.validate().is_err());

        config.advisory.default_season = Some("Monsoon".to_string());
        assert_eq!(config.default_season().unwrap(), Some(Season::Monsoon));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = AirScanConfig::default();
        config.store.location = String::new();
        config.logging.level = String::new();
        config.advisory.default_season = Some("  ".to_string());
        config.apply_defaults();
        assert_eq!(config.store.location, "~/.cache/airscan");
        assert_eq!(config.logging.level, "info");
        assert!(config.advisory.default_season.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_config(
            r#"
[store]
location = "/tmp/airscan-test-store"

[logging]
level = "debug"

[advisory]
unknown_season = "ignore"
default_season = "winter"
"#,
        );

        let config = AirScanConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.store.location, "/tmp/airscan-test-store");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.default_season().unwrap(), Some(Season::Winter));
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let (_dir, path) = write_config("[logging]\nformat = \"yaml\"\n");
        assert!(AirScanConfig::load_from_path(Some(path)).is_err());
    }

    #[test]
    fn test_store_path_expands_home() {
        let config = AirScanConfig::default();
        let path = config.store_path().unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with(".cache/airscan"));

        let mut config = AirScanConfig::default();
        config.store.location = "/var/lib/airscan".to_string();
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/var/lib/airscan"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = AirScanConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("airscan"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
