//! Configuration types for bikemap
//!
//! Every section and field has a default so a partial `config.toml` (or none
//! at all) still yields a complete [`Settings`].

use std::time::Duration;

use bikemap_core::prelude::*;
use bikemap_core::{
    Coordinate, Region, DEFAULT_LATITUDE, DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE,
    DEFAULT_LONGITUDE_DELTA,
};
use bikemap_platform::{LocationMode, UBIKE_URL};
use serde::{Deserialize, Serialize};
use url::Url;

/// Global application settings (from config.toml)
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub feed: FeedSettings,

    #[serde(default)]
    pub location: LocationSettings,

    #[serde(default)]
    pub map: MapSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Live station feed settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedSettings {
    /// Endpoint returning the station array
    #[serde(default = "default_feed_url")]
    pub url: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl FeedSettings {
    /// Parsed endpoint URL
    pub fn endpoint(&self) -> Result<Url> {
        Url::parse(self.url.trim())
            .map_err(|e| Error::config(format!("invalid feed url {:?}: {}", self.url, e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where the "device" position comes from
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationSettings {
    #[serde(default)]
    pub mode: LocationMode,

    /// Position reported in `fixed` mode
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

impl LocationSettings {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            mode: LocationMode::default(),
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

/// Initial visible region
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MapSettings {
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    #[serde(default = "default_latitude_delta")]
    pub latitude_delta: f64,

    #[serde(default = "default_longitude_delta")]
    pub longitude_delta: f64,
}

impl MapSettings {
    pub fn region(&self) -> Region {
        Region::new(
            self.latitude,
            self.longitude,
            self.latitude_delta,
            self.longitude_delta,
        )
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            latitude_delta: default_latitude_delta(),
            longitude_delta: default_longitude_delta(),
        }
    }
}

/// Layer toggles
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_metro: bool,

    #[serde(default = "default_true")]
    pub show_bikes: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_metro: true,
            show_bikes: true,
        }
    }
}

fn default_feed_url() -> String {
    UBIKE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

fn default_latitude_delta() -> f64 {
    DEFAULT_LATITUDE_DELTA
}

fn default_longitude_delta() -> f64 {
    DEFAULT_LONGITUDE_DELTA
}

fn default_true() -> bool {
    true
}
