//! Application state (Model in TEA pattern)

use bikemap_core::{BikeStation, Coordinate, Datasets, MetroStation, Region, UserMarker};
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::Settings;

/// Shown when the platform cannot provide a location at all
pub const UNSUPPORTED_PLATFORM_MESSAGE: &str =
    "Oops, this will not work on Sketch in an Android emulator. Try it on your device!";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Progress of the device location flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Requesting,
    Located,
    Denied,
    Failed,
    Unsupported,
}

/// Progress of the live station feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Where the current bike collection came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StationSource {
    /// Snapshot compiled into the binary
    #[default]
    Bundled,
    /// Last successful feed fetch
    Live { fetched_at: DateTime<Local> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Error,
}

/// Which flow produced a status message
///
/// A later success of the same flow clears it; other flows leave it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSource {
    Location,
    Feed,
    Platform,
}

/// The single user-visible message line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
    pub source: MessageSource,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Visible viewport
    pub region: Region,

    pub user_marker: UserMarker,

    /// True after a location fix centered the view, false once the user pans
    pub on_current_location: bool,

    /// Loaded once, never mutated
    pub metro_stations: Vec<MetroStation>,

    /// Replaced wholesale by each successful fetch
    pub bike_stations: Vec<BikeStation>,

    pub station_source: StationSource,

    pub location_status: LocationStatus,

    pub feed_status: FeedStatus,

    /// False when the platform has no location capability
    pub location_supported: bool,

    pub message: Option<StatusMessage>,

    /// Index into `bike_stations`
    pub selected_station: Option<usize>,

    pub settings: Settings,

    /// Animation frame counter, advanced while an operation is pending
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default region and marker with no stations
    pub fn new() -> Self {
        Self {
            phase: AppPhase::Running,
            region: Region::default(),
            user_marker: UserMarker::default(),
            on_current_location: false,
            metro_stations: Vec::new(),
            bike_stations: Vec::new(),
            station_source: StationSource::Bundled,
            location_status: LocationStatus::Idle,
            feed_status: FeedStatus::Idle,
            location_supported: true,
            message: None,
            selected_station: None,
            settings: Settings::default(),
            tick: 0,
        }
    }

    /// Initial state from configuration and the bundled datasets
    pub fn with_settings(settings: Settings, datasets: Datasets) -> Self {
        Self {
            region: settings.map.region(),
            metro_stations: datasets.metro,
            bike_stations: datasets.bikes,
            settings,
            ..Self::new()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Whether an async operation is still outstanding
    pub fn is_busy(&self) -> bool {
        self.location_status == LocationStatus::Requesting
            || self.feed_status == FeedStatus::Loading
    }

    /// The recenter control shows only while the view is off the user
    pub fn recenter_visible(&self) -> bool {
        !self.on_current_location
    }

    // ─────────────────────────────────────────────────────────
    // Region
    // ─────────────────────────────────────────────────────────

    /// Commit a settled region if it moved past the threshold.
    ///
    /// Returns true if the region was replaced.
    pub fn apply_region_change(&mut self, region: Region) -> bool {
        if !self.region.differs_from(&region) {
            return false;
        }
        self.region = region;
        self.on_current_location = false;
        true
    }

    /// Move the view and the user marker onto a fix, keeping spans and labels
    pub fn apply_location_fix(&mut self, coordinate: Coordinate) {
        self.region = self.region.centered_on(coordinate);
        self.user_marker.move_to(coordinate);
        self.on_current_location = true;
        self.location_status = LocationStatus::Located;
    }

    // ─────────────────────────────────────────────────────────
    // Stations
    // ─────────────────────────────────────────────────────────

    /// Swap in a fetched collection, keeping the selection on the same station
    pub fn replace_bike_stations(&mut self, stations: Vec<BikeStation>) {
        let selected_sno = self.selected_bike_station().map(|s| s.sno.clone());

        self.bike_stations = stations;
        self.selected_station = selected_sno
            .and_then(|sno| self.bike_stations.iter().position(|s| s.sno == sno));
        self.station_source = StationSource::Live {
            fetched_at: Local::now(),
        };
        self.feed_status = FeedStatus::Loaded;
    }

    pub fn selected_bike_station(&self) -> Option<&BikeStation> {
        self.selected_station
            .and_then(|index| self.bike_stations.get(index))
    }

    pub fn select_next_station(&mut self) {
        let len = self.bike_stations.len();
        if len == 0 {
            self.selected_station = None;
            return;
        }
        self.selected_station = Some(match self.selected_station {
            Some(index) => (index + 1) % len,
            None => 0,
        });
    }

    pub fn select_previous_station(&mut self) {
        let len = self.bike_stations.len();
        if len == 0 {
            self.selected_station = None;
            return;
        }
        self.selected_station = Some(match self.selected_station {
            Some(0) | None => len - 1,
            Some(index) => (index - 1).min(len - 1),
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected_station = None;
    }

    // ─────────────────────────────────────────────────────────
    // Status message
    // ─────────────────────────────────────────────────────────

    pub fn show_error(&mut self, source: MessageSource, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            text: text.into(),
            level: MessageLevel::Error,
            source,
        });
    }

    pub fn show_info(&mut self, source: MessageSource, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            text: text.into(),
            level: MessageLevel::Info,
            source,
        });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Clear the message only if `source` produced it
    pub fn clear_message_from(&mut self, source: MessageSource) {
        if self.message.as_ref().is_some_and(|m| m.source == source) {
            self.message = None;
        }
    }
}
