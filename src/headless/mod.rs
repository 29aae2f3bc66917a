//! Headless mode - NDJSON marker output instead of the TUI
//!
//! The headless surface writes one frame as newline-delimited JSON: one
//! `marker` event per marker, followed by a single `summary` event.
//!
//! # Example Output
//!
//! ```json
//! {"event":"marker","marker":{"key":"user","kind":"user",...},"timestamp":1704700001000}
//! {"event":"marker","marker":{"key":"500101001","title":"Test 5/20","kind":"bike",...},"timestamp":1704700001000}
//! {"event":"summary","metro":117,"bikes":1,"source":"live 10:42:07","centered":true,...}
//! ```

pub mod runner;

use std::io::{self, Write};

use bikemap_app::{MapFrame, MapSurface, Marker, StatusMessage};
use bikemap_core::prelude::*;
use bikemap_core::Region;
use chrono::Utc;
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// One projected marker
    Marker { marker: Marker, timestamp: i64 },

    /// Written once after the markers of a frame
    Summary {
        region: Region,
        metro: usize,
        bikes: usize,
        source: String,
        centered: bool,
        location_supported: bool,
        message: Option<StatusMessage>,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn marker(marker: &Marker) -> Self {
        Self::Marker {
            marker: marker.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn summary(frame: &MapFrame) -> Self {
        Self::Summary {
            region: frame.region,
            metro: frame.metro.len(),
            bikes: frame.bikes.len(),
            source: frame.station_source.clone(),
            centered: !frame.recenter_visible,
            location_supported: frame.location_supported,
            message: frame.message.clone(),
            timestamp: Self::now(),
        }
    }

    /// Events for a whole frame, in output order
    pub fn for_frame(frame: &MapFrame) -> Vec<Self> {
        let mut events: Vec<Self> = frame.markers().map(Self::marker).collect();
        events.push(Self::summary(frame));
        events
    }
}

/// [`MapSurface`] that writes NDJSON to any writer
pub struct NdjsonSurface<W: Write> {
    writer: W,
}

impl NdjsonSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> NdjsonSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MapSurface for NdjsonSurface<W> {
    fn present(&mut self, frame: &MapFrame) -> Result<()> {
        for event in HeadlessEvent::for_frame(frame) {
            let json = serde_json::to_string(&event)?;
            writeln!(self.writer, "{}", json)?;
        }

        // Flush so piped readers see the frame immediately
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikemap_app::AppState;
    use bikemap_core::Datasets;
    use bikemap_platform::test_utils::test_station;

    fn lines(output: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8(output.to_vec())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).expect("invalid JSON"))
            .collect()
    }

    #[test]
    fn test_marker_event_serialization() {
        let station = test_station("500101001", "Test", 5, 20, "25.04", "121.56");
        let marker = Marker::bike(&station).unwrap();

        let json = serde_json::to_string(&HeadlessEvent::marker(&marker)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["event"], "marker");
        assert_eq!(value["marker"]["key"], "500101001");
        assert_eq!(value["marker"]["kind"], "bike");
        assert_eq!(value["marker"]["title"], "Test 5/20");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_surface_writes_markers_then_summary() {
        let state = AppState::with_settings(Default::default(), Datasets::bundled().unwrap());
        let frame = MapFrame::project(&state);
        let mut surface = NdjsonSurface::new(Vec::new());

        surface.present(&frame).unwrap();

        let events = lines(&surface.into_inner());
        let marker_count = 1 + frame.metro.len() + frame.bikes.len();
        assert_eq!(events.len(), marker_count + 1);
        assert_eq!(events[0]["marker"]["kind"], "user");

        let summary = events.last().unwrap();
        assert_eq!(summary["event"], "summary");
        assert_eq!(summary["metro"], frame.metro.len());
        assert_eq!(summary["source"], "bundled");
        assert_eq!(summary["centered"], false);
        assert!(summary["message"].is_null());
    }
}
