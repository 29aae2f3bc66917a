//! Headless mode runner - one frame without the TUI
//!
//! Starts the engine, waits for both startup operations, writes a single
//! frame and exits.

use std::time::Duration;

use bikemap_app::{Engine, MapSurface};
use bikemap_core::prelude::*;
use bikemap_platform::{LocationProvider, StationFeed};

use super::NdjsonSurface;

/// Run in headless mode - output NDJSON to stdout instead of the TUI
///
/// `wait` bounds how long the startup operations may take; whatever state
/// exists when it elapses is written as-is.
pub async fn run_headless<L, F>(engine: Engine<L, F>, wait: Duration) -> Result<()>
where
    L: LocationProvider + Send + Sync + 'static,
    F: StationFeed + Send + Sync + 'static,
{
    let mut surface = NdjsonSurface::stdout();
    run_headless_with(engine, wait, &mut surface).await
}

/// Same as [`run_headless`], presenting to `surface`
pub async fn run_headless_with<L, F, S>(
    mut engine: Engine<L, F>,
    wait: Duration,
    surface: &mut S,
) -> Result<()>
where
    L: LocationProvider + Send + Sync + 'static,
    F: StationFeed + Send + Sync + 'static,
    S: MapSurface + ?Sized,
{
    info!("═══════════════════════════════════════════════════════");
    info!("bikemap starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    engine.start();

    if !engine.wait_until_idle(wait).await {
        warn!("Writing frame with operations still pending");
    }

    let result = engine.present(surface).map(|_| ());

    engine.shutdown();

    info!("bikemap headless mode exiting");
    result
}
