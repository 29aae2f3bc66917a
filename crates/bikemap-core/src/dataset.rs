//! Bundled static datasets
//!
//! Two JSON documents are compiled into the binary: the metro station list
//! and a snapshot of the bike-share feed that is shown until the first live
//! fetch succeeds.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::station::{BikeStation, MetroStation};

const METRO_JSON: &str = include_str!("../data/metro.json");
const UBIKE_JSON: &str = include_str!("../data/ubike.json");

/// The station collections available before any network access
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub metro: Vec<MetroStation>,
    pub bikes: Vec<BikeStation>,
}

impl Datasets {
    /// Parse the datasets shipped with the binary
    pub fn bundled() -> Result<Self> {
        let metro = parse_metro_stations(METRO_JSON)
            .map_err(|e| Error::dataset(format!("bundled metro.json: {}", e)))?;
        let bikes = parse_bike_stations(UBIKE_JSON)
            .map_err(|e| Error::dataset(format!("bundled ubike.json: {}", e)))?;

        tracing::debug!(
            metro = metro.len(),
            bikes = bikes.len(),
            "Loaded bundled datasets"
        );

        Ok(Self { metro, bikes })
    }
}

/// Parse a JSON array of metro stations, rejecting duplicate `id + line` keys
pub fn parse_metro_stations(json: &str) -> Result<Vec<MetroStation>> {
    let stations: Vec<MetroStation> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(stations.len());
    for station in &stations {
        let key = station.key();
        if !seen.insert(key.clone()) {
            return Err(Error::DuplicateStationKey { key });
        }
    }

    Ok(stations)
}

/// Parse a JSON array of bike stations in the feed's shape
pub fn parse_bike_stations(json: &str) -> Result<Vec<BikeStation>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_datasets_parse() {
        let datasets = Datasets::bundled().unwrap();
        assert!(!datasets.metro.is_empty());
        assert!(!datasets.bikes.is_empty());
    }

    #[test]
    fn test_bundled_bike_coordinates_are_valid() {
        let datasets = Datasets::bundled().unwrap();
        for station in &datasets.bikes {
            assert!(
                station.coordinate().is_ok(),
                "station {} has a bad coordinate",
                station.sno
            );
            assert!(station.sbi <= station.tot);
        }
    }

    #[test]
    fn test_bundled_metro_has_interchanges() {
        // Interchange stations share an id across lines
        let datasets = Datasets::bundled().unwrap();
        let daan: Vec<_> = datasets.metro.iter().filter(|s| s.name == "大安").collect();
        assert_eq!(daan.len(), 2);
        assert_ne!(daan[0].key(), daan[1].key());
    }

    #[test]
    fn test_duplicate_metro_key_rejected() {
        let json = r#"[
            {"id":"011","line":"BR","name":"大安","address":"a","latitude":25.0,"longitude":121.0},
            {"id":"011","line":"BR","name":"大安","address":"a","latitude":25.0,"longitude":121.0}
        ]"#;
        let err = parse_metro_stations(json).unwrap_err();
        assert!(matches!(err, Error::DuplicateStationKey { ref key } if key == "011BR"));
    }

    #[test]
    fn test_same_id_on_different_lines_allowed() {
        let json = r#"[
            {"id":"011","line":"BR","name":"大安","address":"a","latitude":25.0,"longitude":121.0},
            {"id":"011","line":"R","name":"大安","address":"a","latitude":25.0,"longitude":121.0}
        ]"#;
        assert_eq!(parse_metro_stations(json).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_bike_stations_requires_array() {
        assert!(parse_bike_stations(r#"{"sno":"1"}"#).is_err());
        assert!(parse_bike_stations("[]").unwrap().is_empty());
    }
}
