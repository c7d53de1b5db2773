//! Decorative banner image for the main window.
//!
//! The image is optional. Any failure to read or decode it is reported to the
//! caller, which logs it and carries on without a banner.

use eframe::egui;
use holster_orders::config::{BannerConfig, ConfigError};
use image::imageops::FilterType;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("Failed to read banner image {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode banner image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Size(#[from] ConfigError),
}

/// Reads the configured image and scales it to the configured size.
pub fn load(config: &BannerConfig) -> Result<egui::ColorImage, BannerError> {
    debug!(path = %config.path.display(), "Loading banner");
    config.validate()?;
    let bytes = std::fs::read(&config.path).map_err(|source| BannerError::Io {
        path: config.path.clone(),
        source,
    })?;
    let banner = decode(&bytes, config.width, config.height).map_err(|source| {
        BannerError::Decode {
            path: config.path.clone(),
            source,
        }
    })?;
    info!(path = %config.path.display(), size = ?banner.size, "Banner loaded");
    Ok(banner)
}

/// Decodes encoded image bytes and resizes them to exactly `width` x `height`.
pub fn decode(bytes: &[u8], width: u32, height: u32) -> Result<egui::ColorImage, image::ImageError> {
    let resized = image::load_from_memory(bytes)?
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgba8();
    let size = [resized.width() as usize, resized.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, resized.as_raw()))
}
