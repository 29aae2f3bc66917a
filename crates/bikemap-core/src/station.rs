//! Station records: metro stations from the bundled dataset and bike-share
//! stations from the open-data feed

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Coordinate;

/// A metro station on one line
///
/// Interchange stations appear once per line they serve, so the unique key is
/// the concatenation of `id` and `line`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroStation {
    pub id: String,
    pub line: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl MetroStation {
    /// Composite key, unique across the metro collection
    pub fn key(&self) -> String {
        format!("{}{}", self.id, self.line)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A bike-share station as served by the availability feed.
///
/// Field names follow the feed. The feed encodes every value as a string;
/// `sbi`/`tot` accept strings or numbers, `lat`/`lng` stay as text and are
/// parsed on demand by [`BikeStation::coordinate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeStation {
    /// Station number (unique id)
    pub sno: String,
    /// Station name
    pub sna: String,
    /// Street address
    #[serde(default)]
    pub ar: String,
    /// Bikes currently available
    #[serde(deserialize_with = "deserialize_count")]
    pub sbi: u32,
    /// Total docks
    #[serde(deserialize_with = "deserialize_count")]
    pub tot: u32,
    #[serde(deserialize_with = "deserialize_coordinate_text")]
    pub lat: String,
    #[serde(deserialize_with = "deserialize_coordinate_text")]
    pub lng: String,
}

impl BikeStation {
    /// Marker title: `"{name} {available}/{total}"`
    pub fn label(&self) -> String {
        format!("{} {}/{}", self.sna, self.sbi, self.tot)
    }

    /// Parse the textual `lat`/`lng` into a coordinate
    pub fn coordinate(&self) -> Result<Coordinate> {
        let latitude = parse_degrees(&self.lat)?;
        let longitude = parse_degrees(&self.lng)?;
        let coordinate = Coordinate::new(latitude, longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(Error::invalid_coordinate(format!("{},{}", self.lat, self.lng)))
        }
    }

    /// Dock occupancy split, `None` for stations without docks
    pub fn proportion(&self) -> Option<Proportion> {
        Proportion::new(self.sbi, self.tot)
    }
}

/// Occupied/available split of a bike station's docks
///
/// `occupied_percent + available_percent == 100` and both lie in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Proportion {
    /// Docks without a bike (`tot - sbi`)
    pub occupied: u32,
    /// Bikes available (`sbi`)
    pub available: u32,
    pub occupied_percent: f64,
    pub available_percent: f64,
}

impl Proportion {
    /// Returns `None` when `total` is zero. `available` above `total` is
    /// clamped so a bad feed row cannot produce negative slices.
    pub fn new(available: u32, total: u32) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let available = available.min(total);
        let available_percent = f64::from(available) / f64::from(total) * 100.0;
        Some(Self {
            occupied: total - available,
            available,
            occupied_percent: 100.0 - available_percent,
            available_percent,
        })
    }

    /// Available share as a ratio in `[0, 1]`
    pub fn available_ratio(&self) -> f64 {
        self.available_percent / 100.0
    }
}

fn parse_degrees(text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| Error::invalid_coordinate(text))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_coordinate(text))
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid station count {:?}", text))),
    }
}

fn deserialize_coordinate_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Degrees {
        Number(f64),
        Text(String),
    }

    Ok(match Degrees::deserialize(deserializer)? {
        Degrees::Number(n) => n.to_string(),
        Degrees::Text(text) => text,
    })
}
