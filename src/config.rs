//! Viewer configuration.
//!
//! Display dimensions and demo run mode, loadable from a TOML file.
//! The detector's threshold and luma weights and the clock's tick rate
//! are design constants, not configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Display surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl DisplayConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Demo run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Run until interrupted (true) or consume a fixed number of ticks.
    pub continuous: bool,
    /// Number of ticks to consume if not continuous.
    pub tick_count: u32,
    /// Export the side-by-side composite when the run ends.
    pub export: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            continuous: false,
            tick_count: 30,
            export: false,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Run settings.
    #[serde(default)]
    pub run: RunConfig,
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Width or height is zero.
    #[error("invalid display dimensions")]
    InvalidDimensions,
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The config file could not be parsed.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.display.validate()?;
        Ok(config)
    }
}
