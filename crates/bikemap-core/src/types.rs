//! Map domain types: coordinates, viewport regions, and the user marker

use serde::{Deserialize, Serialize};

/// Latitude of the default viewport center and user landmark
pub const DEFAULT_LATITUDE: f64 = 25.024624;

/// Longitude of the default viewport center and user landmark
pub const DEFAULT_LONGITUDE: f64 = 121.544637;

/// Default vertical span of the viewport, in degrees
pub const DEFAULT_LATITUDE_DELTA: f64 = 0.02;

/// Default horizontal span of the viewport, in degrees
pub const DEFAULT_LONGITUDE_DELTA: f64 = 0.01;

/// Minimum center movement (degrees, per axis) for a region change to count.
///
/// Map surfaces report settle events with floating-point jitter; anything at or
/// below this is treated as the same region.
pub const REGION_CHANGE_THRESHOLD: f64 = 0.0002;

/// Smallest span a zoom operation may produce, in degrees
///
/// A quarter-span pan at this zoom must still exceed [`REGION_CHANGE_THRESHOLD`].
pub const MIN_REGION_DELTA: f64 = 0.001;

/// Largest span a zoom operation may produce, in degrees
pub const MAX_REGION_DELTA: f64 = 5.0;

const DEFAULT_MARKER_NAME: &str = "國立臺北教育大學";
const DEFAULT_MARKER_ADDRESS: &str = "台北市和平東路二段134號";

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite and within WGS84 range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Edges of a region's bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// The visible map viewport: a center plus the span shown on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn new(latitude: f64, longitude: f64, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Whether `other` moved far enough from `self` to be a real region change.
    ///
    /// Strictly greater than [`REGION_CHANGE_THRESHOLD`] on either axis.
    pub fn differs_from(&self, other: &Region) -> bool {
        (other.latitude - self.latitude).abs() > REGION_CHANGE_THRESHOLD
            || (other.longitude - self.longitude).abs() > REGION_CHANGE_THRESHOLD
    }

    /// Same span, new center
    pub fn centered_on(&self, coordinate: Coordinate) -> Region {
        Region {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            ..*self
        }
    }

    /// Shift the center by a fraction of the current span on each axis
    ///
    /// Positive `lat_fraction` moves north, positive `lng_fraction` moves east.
    pub fn panned(&self, lat_fraction: f64, lng_fraction: f64) -> Region {
        Region {
            latitude: (self.latitude + self.latitude_delta * lat_fraction).clamp(-90.0, 90.0),
            longitude: self.longitude + self.longitude_delta * lng_fraction,
            ..*self
        }
    }

    /// Scale both spans by `factor`, keeping the center
    ///
    /// Factors below 1 zoom in. Spans are clamped to
    /// [`MIN_REGION_DELTA`]..=[`MAX_REGION_DELTA`].
    pub fn zoomed(&self, factor: f64) -> Region {
        Region {
            latitude_delta: (self.latitude_delta * factor)
                .clamp(MIN_REGION_DELTA, MAX_REGION_DELTA),
            longitude_delta: (self.longitude_delta * factor)
                .clamp(MIN_REGION_DELTA, MAX_REGION_DELTA),
            ..*self
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            south: self.latitude - self.latitude_delta / 2.0,
            west: self.longitude - self.longitude_delta / 2.0,
            north: self.latitude + self.latitude_delta / 2.0,
            east: self.longitude + self.longitude_delta / 2.0,
        }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let b = self.bounds();
        (b.south..=b.north).contains(&coordinate.latitude)
            && (b.west..=b.east).contains(&coordinate.longitude)
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new(
            DEFAULT_LATITUDE,
            DEFAULT_LONGITUDE,
            DEFAULT_LATITUDE_DELTA,
            DEFAULT_LONGITUDE_DELTA,
        )
    }
}

/// The single map point representing the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMarker {
    pub coordinate: Coordinate,
    pub name: String,
    pub address: String,
}

impl UserMarker {
    pub fn new(coordinate: Coordinate, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            coordinate,
            name: name.into(),
            address: address.into(),
        }
    }

    /// Move the marker, keeping its name and address
    pub fn move_to(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }
}

impl Default for UserMarker {
    fn default() -> Self {
        Self::new(
            Coordinate::default(),
            DEFAULT_MARKER_NAME,
            DEFAULT_MARKER_ADDRESS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region_matches_landmark() {
        let region = Region::default();
        assert_eq!(region.center(), UserMarker::default().coordinate);
        assert_eq!(region.latitude_delta, 0.02);
        assert_eq!(region.longitude_delta, 0.01);
    }

    #[test]
    fn test_differs_from_ignores_jitter() {
        let region = Region::default();
        let jitter = Region {
            latitude: region.latitude + 0.0001,
            longitude: region.longitude - 0.00019,
            ..region
        };
        assert!(!region.differs_from(&jitter));
    }

    #[test]
    fn test_differs_from_single_axis() {
        let region = Region::default();
        let moved = Region {
            longitude: region.longitude + 0.0003,
            ..region
        };
        assert!(region.differs_from(&moved));
        assert!(moved.differs_from(&region));
    }

    #[test]
    fn test_differs_from_ignores_span_changes() {
        let region = Region::default();
        assert!(!region.differs_from(&region.zoomed(0.5)));
    }

    #[test]
    fn test_centered_on_keeps_span() {
        let region = Region::new(0.0, 0.0, 0.3, 0.4);
        let moved = region.centered_on(Coordinate::new(25.03, 121.55));
        assert_eq!(moved.latitude, 25.03);
        assert_eq!(moved.longitude, 121.55);
        assert_eq!(moved.latitude_delta, 0.3);
        assert_eq!(moved.longitude_delta, 0.4);
    }

    #[test]
    fn test_panned_moves_by_fraction_of_span() {
        let region = Region::new(25.0, 121.0, 0.02, 0.01);
        let north = region.panned(0.25, 0.0);
        assert!((north.latitude - 25.005).abs() < 1e-12);
        assert_eq!(north.longitude, 121.0);

        let west = region.panned(0.0, -0.5);
        assert!((west.longitude - 120.995).abs() < 1e-12);
    }

    #[test]
    fn test_zoomed_is_clamped() {
        let region = Region::new(25.0, 121.0, 0.001, 0.001);
        let zoomed = region.zoomed(0.1);
        assert_eq!(zoomed.latitude_delta, MIN_REGION_DELTA);
        assert_eq!(zoomed.center(), region.center());

        let wide = Region::new(25.0, 121.0, 4.0, 4.0).zoomed(2.0);
        assert_eq!(wide.longitude_delta, MAX_REGION_DELTA);
    }

    #[test]
    fn test_bounds_and_contains() {
        let region = Region::new(25.0, 121.0, 0.02, 0.01);
        let b = region.bounds();
        assert!((b.north - 25.01).abs() < 1e-12);
        assert!((b.west - 120.995).abs() < 1e-12);
        assert!(region.contains(Coordinate::new(25.009, 121.004)));
        assert!(!region.contains(Coordinate::new(25.011, 121.0)));
    }

    #[test]
    fn test_region_serializes_camel_case() {
        let json = serde_json::to_value(Region::default()).unwrap();
        assert!(json.get("latitudeDelta").is_some());
        assert!(json.get("longitudeDelta").is_some());
    }

    #[test]
    fn test_user_marker_move_keeps_label() {
        let mut marker = UserMarker::default();
        marker.move_to(Coordinate::new(25.03, 121.55));
        assert_eq!(marker.coordinate, Coordinate::new(25.03, 121.55));
        assert_eq!(marker.name, "國立臺北教育大學");
        assert_eq!(marker.address, "台北市和平東路二段134號");
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(25.0, 121.0).is_valid());
        assert!(!Coordinate::new(95.0, 121.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }
}
