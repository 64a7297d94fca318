//! Configuration module
//!
//! Settings are read from a TOML file (default
//! `~/.config/hotel-booking/config.toml`, overridable through the
//! `HOTEL_BOOKING_CONFIG` environment variable). Every field has a default,
//! so an empty file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::errors::ConfigError;

/// Environment variable holding an explicit config file path
pub const CONFIG_ENV_VAR: &str = "HOTEL_BOOKING_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub hotel: HotelConfig,
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Hotel property settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HotelConfig {
    /// Number of rooms, numbered `0..rooms`
    #[validate(range(min = 1))]
    pub rooms: u32,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self { rooms: 10 }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `hotel_booking=debug`
    #[validate(length(min = 1))]
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Load from `$HOTEL_BOOKING_CONFIG` or the default location
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());
        Self::load(&path)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

/// `<platform config dir>/hotel-booking/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hotel-booking")
        .join("config.toml")
}
