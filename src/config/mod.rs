//! # Configuration
//!
//! Settings are read from an optional TOML file. Every key has a default, so
//! an empty file (or no file at all) gives the full form with all four fields
//! required and the stock banner image.
//!
//! ```toml
//! [form]
//! require_email = false
//! require_color = true
//!
//! [banner]
//! path = "assets/OWBHolster.png"
//! width = 200
//! height = 150
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Each banner side must be between 1 and [`MAX_BANNER_SIDE`] pixels.
    #[error("Invalid banner size {width}x{height}")]
    BannerSize { width: u32, height: u32 },
}

/// Largest accepted banner width or height, in pixels.
pub const MAX_BANNER_SIDE: u32 = 4096;

/// Top-level application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomsConfig {
    pub form: FormConfig,
    pub banner: BannerConfig,
}

/// Which optional fields the order form insists on.
///
/// `name` and `holster_type` are always required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub require_email: bool,
    pub require_color: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            require_email: true,
            require_color: true,
        }
    }
}

/// Decorative image shown on the main window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("OWBHolster.png"),
            width: 200,
            height: 150,
        }
    }
}

impl BannerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |side: u32| (1..=MAX_BANNER_SIDE).contains(&side);
        if in_range(self.width) && in_range(self.height) {
            Ok(())
        } else {
            Err(ConfigError::BannerSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl HomsConfig {
    /// Parses TOML text and checks the values serde cannot.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.banner.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config");
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), ?config, "Config loaded");
        Ok(config)
    }
}
