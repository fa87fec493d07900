//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default clock cadence in milliseconds
pub const DEFAULT_CLOCK_INTERVAL_MS: u64 = 1000;

/// Errors from loading or saving the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User configuration for the TUI
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Show the clock display in the header
    pub show_clock: Option<bool>,
    /// Clock refresh cadence in milliseconds
    pub clock_interval_ms: Option<u64>,
}

#[allow(dead_code)]
impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, defaulting when no file exists
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Effective clock visibility
    pub fn clock_enabled(&self) -> bool {
        self.show_clock.unwrap_or(true)
    }

    /// Effective clock cadence
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms.unwrap_or(DEFAULT_CLOCK_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.show_clock.is_none());
        assert!(config.clock_interval_ms.is_none());
    }

    #[test]
    fn test_effective_defaults() {
        let config = TuiConfig::default();
        assert!(config.clock_enabled());
        assert_eq!(config.clock_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_overrides_apply() {
        let config = TuiConfig {
            show_clock: Some(false),
            clock_interval_ms: Some(250),
        };
        assert!(!config.clock_enabled());
        assert_eq!(config.clock_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            show_clock: Some(true),
            clock_interval_ms: Some(1000),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.show_clock, Some(true));
        assert_eq!(parsed.clock_interval_ms, Some(1000));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.show_clock.is_none());
        assert!(parsed.clock_interval_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"show_clock": false, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.show_clock, Some(false));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
