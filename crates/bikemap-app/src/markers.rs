//! Marker projection: the pure mapping from [`AppState`] to a [`MapFrame`]
//!
//! Every surface (terminal canvas, headless NDJSON, test mocks) renders from a
//! `MapFrame` only, so what ends up on screen is decided here.

use bikemap_core::prelude::*;
use bikemap_core::{BikeStation, Coordinate, MetroStation, Proportion, Region, UserMarker};
use serde::Serialize;

use crate::state::{AppState, FeedStatus, LocationStatus, StationSource, StatusMessage};

/// Glyph drawn for every metro station
pub const METRO_GLYPH: &str = "Ⓜ";

/// Glyph drawn for the user marker
pub const USER_GLYPH: &str = "◉";

/// Occupied-dock slice color
pub const OCCUPIED_SLICE_COLOR: &str = "#FACFC9";

/// Available-bike slice color
pub const AVAILABLE_SLICE_COLOR: &str = "#5674AC";

/// One slice of a station's availability pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Dock count this slice stands for
    pub count: u32,
    /// Share of the whole, 0..=100
    pub percent: f64,
    /// `#RRGGBB`
    pub color: &'static str,
}

/// Two-slice availability pie: occupied docks then available bikes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub occupied: PieSlice,
    pub available: PieSlice,
}

impl PieChart {
    pub fn from_proportion(proportion: Proportion) -> Self {
        Self {
            occupied: PieSlice {
                count: proportion.occupied,
                percent: proportion.occupied_percent,
                color: OCCUPIED_SLICE_COLOR,
            },
            available: PieSlice {
                count: proportion.available,
                percent: proportion.available_percent,
                color: AVAILABLE_SLICE_COLOR,
            },
        }
    }

    /// Slices in drawing order
    pub fn slices(&self) -> [&PieSlice; 2] {
        [&self.occupied, &self.available]
    }
}

/// What a marker stands for
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerKind {
    User,
    Metro {
        line: String,
        glyph: &'static str,
    },
    Bike {
        available: u32,
        total: u32,
        /// `None` for stations with no docks
        pie: Option<PieChart>,
    },
}

/// A single point on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Stable identity within its layer
    pub key: String,
    pub coordinate: Coordinate,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: MarkerKind,
}

impl Marker {
    pub fn user(marker: &UserMarker) -> Self {
        Self {
            key: "user".to_string(),
            coordinate: marker.coordinate,
            title: marker.name.clone(),
            description: marker.address.clone(),
            kind: MarkerKind::User,
        }
    }

    pub fn metro(station: &MetroStation) -> Self {
        Self {
            key: station.key(),
            coordinate: station.coordinate(),
            title: station.name.clone(),
            description: station.address.clone(),
            kind: MarkerKind::Metro {
                line: station.line.clone(),
                glyph: METRO_GLYPH,
            },
        }
    }

    /// Fails when the station's coordinate strings do not parse
    pub fn bike(station: &BikeStation) -> Result<Self> {
        Ok(Self {
            key: station.sno.clone(),
            coordinate: station.coordinate()?,
            title: station.label(),
            description: station.ar.clone(),
            kind: MarkerKind::Bike {
                available: station.sbi,
                total: station.tot,
                pie: station.proportion().map(PieChart::from_proportion),
            },
        })
    }

    pub fn pie(&self) -> Option<&PieChart> {
        match &self.kind {
            MarkerKind::Bike { pie, .. } => pie.as_ref(),
            _ => None,
        }
    }
}

/// Outstanding async work, for spinners and the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Activity {
    pub locating: bool,
    pub loading_stations: bool,
    pub tick: u64,
}

impl Activity {
    pub fn is_busy(&self) -> bool {
        self.locating || self.loading_stations
    }
}

/// Everything a surface needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFrame {
    pub region: Region,
    pub user: Marker,
    pub metro: Vec<Marker>,
    pub bikes: Vec<Marker>,
    /// Whether the recenter control is shown
    pub recenter_visible: bool,
    pub message: Option<StatusMessage>,
    /// Key of the selected bike marker
    pub selected: Option<String>,
    pub activity: Activity,
    /// "bundled" or "live HH:MM:SS"
    pub station_source: String,
    /// False when the platform has no location capability
    pub location_supported: bool,
}

impl MapFrame {
    /// Derive a frame from state. Pure apart from `warn!` on skipped markers.
    pub fn project(state: &AppState) -> Self {
        let metro = if state.settings.ui.show_metro {
            state.metro_stations.iter().map(Marker::metro).collect()
        } else {
            Vec::new()
        };

        let bikes = if state.settings.ui.show_bikes {
            bike_markers(&state.bike_stations)
        } else {
            Vec::new()
        };

        let selected = state
            .selected_bike_station()
            .map(|station| station.sno.clone())
            .filter(|sno| bikes.iter().any(|m| &m.key == sno));

        let station_source = match &state.station_source {
            StationSource::Bundled => "bundled".to_string(),
            StationSource::Live { fetched_at } => {
                format!("live {}", fetched_at.format("%H:%M:%S"))
            }
        };

        Self {
            region: state.region,
            user: Marker::user(&state.user_marker),
            metro,
            bikes,
            recenter_visible: state.recenter_visible(),
            message: state.message.clone(),
            selected,
            activity: Activity {
                locating: state.location_status == LocationStatus::Requesting,
                loading_stations: state.feed_status == FeedStatus::Loading,
                tick: state.tick,
            },
            station_source,
            location_supported: state.location_supported,
        }
    }

    /// All markers: user first, then metro, then bikes
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        std::iter::once(&self.user)
            .chain(self.metro.iter())
            .chain(self.bikes.iter())
    }

    /// Markers inside the visible region
    pub fn visible_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers()
            .filter(|m| self.region.contains(m.coordinate))
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        let key = self.selected.as_ref()?;
        self.bikes.iter().find(|m| &m.key == key)
    }
}

/// One marker per station with a parseable coordinate
pub fn bike_markers(stations: &[BikeStation]) -> Vec<Marker> {
    stations
        .iter()
        .filter_map(|station| match Marker::bike(station) {
            Ok(marker) => Some(marker),
            Err(e) => {
                warn!("Skipping bike station {} ({}): {}", station.sno, station.sna, e);
                None
            }
        })
        .collect()
}
