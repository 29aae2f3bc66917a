//! Message types for the application (TEA pattern)

use bikemap_core::{BikeStation, Coordinate, Region};

use crate::input_key::InputKey;

/// Zoom step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// View mounted: launch the location request and the feed fetch
    Startup,

    /// Keyboard event from the terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Map Surface Events
    // ─────────────────────────────────────────────────────────
    /// The map surface settled on a new region
    RegionChangeComplete(Region),

    /// Change the visible span, keeping the center
    Zoom(ZoomDirection),

    /// Recenter control activated: ask for a fresh device location
    RecenterRequested,

    // ─────────────────────────────────────────────────────────
    // Location Results
    // ─────────────────────────────────────────────────────────
    /// A position fix arrived
    LocationResolved { coordinate: Coordinate },
    /// The permission prompt was declined
    LocationPermissionDenied,
    /// Location services are not available on this platform
    LocationUnsupported,
    /// Permission was granted but no fix could be taken
    LocationFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Station Feed
    // ─────────────────────────────────────────────────────────
    /// Fetch the live station list again
    ReloadStations,
    /// Feed fetch succeeded; replaces the whole collection
    StationsLoaded { stations: Vec<BikeStation> },
    /// Feed fetch failed (network, HTTP status or payload)
    StationFeedFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Station Selection
    // ─────────────────────────────────────────────────────────
    SelectNextStation,
    SelectPreviousStation,
    ClearSelection,

    /// Hide the status message
    DismissMessage,
}
