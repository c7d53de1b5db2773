//! # HOMS Desktop
//!
//! The desktop shell for the Holster Order Management System.
//!
//! - **[app]**: The [`eframe::App`] that owns the [`OrderSession`](holster_orders::lifecycle::OrderSession)
//!   and forwards every click to it.
//! - **[ui]**: One module per window (main menu, order form, admin table, dialogs).
//! - **[banner]**: Loads the optional decorative image shown on the main window.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info homs --config homs.toml
//! homs --optional-email --no-image
//! ```

mod app;
mod banner;
mod ui;

use anyhow::anyhow;
use app::HomsApp;
use clap::Parser;
use eframe::egui;
use holster_orders::config::{ConfigError, HomsConfig};
use holster_orders::lifecycle::setup_tracing;
use std::path::PathBuf;
use tracing::info;

const WINDOW_TITLE: &str = "Holster Order Management System (HOMS)";

/// Holster Order Management System.
#[derive(Debug, Parser)]
#[command(name = "homs", version, about)]
struct Cli {
    /// TOML settings file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Banner image shown on the main window.
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Start without the banner image.
    #[arg(long, conflicts_with = "image")]
    no_image: bool,

    /// Accept orders without an email address.
    #[arg(long)]
    optional_email: bool,

    /// Accept orders without a color.
    #[arg(long)]
    optional_color: bool,
}

impl Cli {
    /// Loads the config file, if any, then applies command-line overrides.
    fn resolve_config(&self) -> Result<HomsConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => HomsConfig::load(path)?,
            None => HomsConfig::default(),
        };
        if let Some(image) = &self.image {
            config.banner.path = image.clone();
        }
        if self.no_image {
            config.banner.enabled = false;
        }
        if self.optional_email {
            config.form.require_email = false;
        }
        if self.optional_color {
            config.form.require_color = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    info!(?config, "Starting HOMS");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([500.0, 400.0])
            .with_min_inner_size([400.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Box::new(HomsApp::new(cc, config))),
    )
    .map_err(|e| anyhow!("UI event loop failed: {e}"))?;

    info!("HOMS closed");
    Ok(())
}
