//! Settings parser for `<config_dir>/bikemap/config.toml`

use std::path::{Path, PathBuf};

use bikemap_core::prelude::*;
use bikemap_core::{MAX_REGION_DELTA, MIN_REGION_DELTA};

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const BIKEMAP_DIR: &str = "bikemap";

const DEFAULT_CONFIG: &str = r#"# bikemap configuration

[feed]
# Endpoint returning the YouBike station array
url = "https://data.ntpc.gov.tw/api/datasets/71CD1490-A2DF-4198-BEF1-318479775E8A/json/preview"
timeout_secs = 10

[location]
# fixed | denied | unsupported
mode = "fixed"
latitude = 25.024624
longitude = 121.544637

[map]
latitude = 25.024624
longitude = 121.544637
latitude_delta = 0.02
longitude_delta = 0.01

[ui]
show_metro = true
show_bikes = true
"#;

/// Platform config location, e.g. `~/.config/bikemap/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(BIKEMAP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// A missing, unreadable or malformed file falls back to defaults. Values that
/// parse but make no sense (a zero-width map, an impossible coordinate) are
/// replaced section by section.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let settings = match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                return Settings::default();
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            return Settings::default();
        }
    };

    sanitize(settings)
}

fn sanitize(mut settings: Settings) -> Settings {
    let defaults = Settings::default();

    let map = &settings.map;
    let span_ok = map.latitude_delta.is_finite()
        && map.longitude_delta.is_finite()
        && map.latitude_delta > 0.0
        && map.longitude_delta > 0.0;
    if !span_ok || !map.region().center().is_valid() {
        warn!("Ignoring invalid [map] section: {:?}", settings.map);
        settings.map = defaults.map;
    }

    // Below the minimum a pan step no longer clears the region-change threshold
    let map = &mut settings.map;
    let span = MIN_REGION_DELTA..=MAX_REGION_DELTA;
    if !span.contains(&map.latitude_delta) || !span.contains(&map.longitude_delta) {
        warn!(
            "Clamping [map] span {} x {} to {}..={}",
            map.latitude_delta, map.longitude_delta, MIN_REGION_DELTA, MAX_REGION_DELTA
        );
        map.latitude_delta = map.latitude_delta.clamp(MIN_REGION_DELTA, MAX_REGION_DELTA);
        map.longitude_delta = map.longitude_delta.clamp(MIN_REGION_DELTA, MAX_REGION_DELTA);
    }

    if let Err(e) = settings.feed.endpoint() {
        warn!("Ignoring [feed] url: {}", e);
        settings.feed.url = defaults.feed.url;
    }

    if !settings.location.coordinate().is_valid() {
        warn!(
            "Ignoring invalid [location] coordinate: {}",
            settings.location.coordinate()
        );
        settings.location.latitude = defaults.location.latitude;
        settings.location.longitude = defaults.location.longitude;
    }

    settings
}

/// Write the commented default config to `config_path` unless it already exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}
