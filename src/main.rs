//! bikemap - Terminal map of metro stations and live YouBike availability
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::time::Duration;

use bikemap_app::config::{self, Settings};
use bikemap_app::Engine;
use bikemap_core::Datasets;
use bikemap_platform::{ConfiguredLocationProvider, HttpStationFeed, LocationMode};
use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing::info;

/// Extra time the headless runner allows beyond the feed timeout
const HEADLESS_GRACE: Duration = Duration::from_secs(1);

/// bikemap - Terminal map of metro stations and live YouBike availability
#[derive(Parser, Debug)]
#[command(name = "bikemap")]
#[command(about = "Metro stations and live YouBike availability on a terminal map", long_about = None)]
struct Args {
    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured location provider
    #[arg(long, value_name = "MODE")]
    location: Option<LocationMode>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.or_else(config::default_config_path);

    if args.init_config {
        let path = config_path.ok_or_else(|| eyre!("No config directory on this platform"))?;
        config::init_config_file(&path)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    bikemap_core::logging::init()?;

    let settings = match &config_path {
        Some(path) => config::load_settings(path),
        None => Settings::default(),
    };

    let mode = args.location.unwrap_or(settings.location.mode);
    info!(%mode, "Location provider selected");

    let location = ConfiguredLocationProvider::new(mode, settings.location.coordinate());
    let feed = HttpStationFeed::new(settings.feed.endpoint()?, settings.feed.timeout())?;
    let wait = settings.feed.timeout() + HEADLESS_GRACE;

    let engine = Engine::new(settings, Datasets::bundled()?, location, feed);

    if args.headless {
        bikemap::run_headless(engine, wait).await?;
    } else {
        bikemap::run(engine).await?;
    }

    Ok(())
}
