//! Engine - shared orchestration for the TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the shutdown signal
//! and the platform services. Runners feed it input, ask it for frames, and
//! call [`Engine::shutdown`] on the way out.

use std::time::Duration;

use bikemap_core::prelude::*;
use bikemap_core::Datasets;
use bikemap_platform::{LocationProvider, StationFeed};
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use crate::actions::Services;
use crate::config::Settings;
use crate::markers::MapFrame;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::surface::MapSurface;

/// Capacity of the unified message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for bikemap.
///
/// Generic over the location and feed capabilities so tests can swap in
/// scripted doubles.
pub struct Engine<L, F> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key poller).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Send `true` to stop background tasks
    pub shutdown_tx: watch::Sender<bool>,

    /// Clone for background tasks
    pub shutdown_rx: watch::Receiver<bool>,

    services: Services<L, F>,

    /// Last frame handed to a surface, for change detection
    last_frame: Option<MapFrame>,
}

impl<L, F> Engine<L, F>
where
    L: LocationProvider + Send + Sync + 'static,
    F: StationFeed + Send + Sync + 'static,
{
    /// Create an Engine from loaded settings and datasets.
    ///
    /// Does not spawn anything; call [`Engine::start`] from inside a runtime.
    pub fn new(settings: Settings, datasets: Datasets, location: L, feed: F) -> Self {
        let mut state = AppState::with_settings(settings, datasets);
        state.location_supported = LocationProvider::is_supported(&location);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        debug!(
            metro = state.metro_stations.len(),
            bikes = state.bike_stations.len(),
            feed = StationFeed::endpoint(&feed),
            "Engine created"
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            services: Services::new(location, feed),
            last_frame: None,
        }
    }

    /// Mount the view: launch the startup operations
    pub fn start(&mut self) {
        self.process_message(Message::Startup);
    }

    /// Forward SIGINT/SIGTERM into the message channel as `Message::Quit`
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.services,
            &self.shutdown_rx,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Process channel messages until no operation is pending.
    ///
    /// Returns false if `timeout` elapsed first.
    pub async fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        while self.state.is_busy() {
            match tokio::time::timeout_at(deadline, self.msg_rx.recv()).await {
                Ok(Some(msg)) => self.process_message(msg),
                Ok(None) => return false,
                Err(_) => {
                    warn!("Startup operations still pending after {:?}", timeout);
                    return false;
                }
            }
        }

        true
    }

    /// Current projection of state
    pub fn frame(&self) -> MapFrame {
        MapFrame::project(&self.state)
    }

    /// Hand the current frame to `surface` if it differs from the last one.
    ///
    /// Returns whether the surface was called.
    pub fn present<S>(&mut self, surface: &mut S) -> Result<bool>
    where
        S: MapSurface + ?Sized,
    {
        let frame = self.frame();
        if self.last_frame.as_ref() == Some(&frame) {
            return Ok(false);
        }

        surface.present(&frame)?;
        self.last_frame = Some(frame);
        Ok(true)
    }

    /// Make the next [`Engine::present`] call redraw unconditionally
    pub fn force_redraw(&mut self) {
        self.last_frame = None;
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal background tasks to stop. Results still in flight are dropped.
    pub fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(true);
        self.msg_rx.close();
        info!("Engine shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FeedStatus, LocationStatus, StationSource};
    use crate::surface::MockMapSurface;
    use bikemap_core::{Coordinate, Region};
    use bikemap_platform::test_utils::{test_station, ScriptedLocationProvider, StaticStationFeed};

    const WAIT: Duration = Duration::from_secs(2);

    fn engine(
        location: ScriptedLocationProvider,
        feed: StaticStationFeed,
    ) -> Engine<ScriptedLocationProvider, StaticStationFeed> {
        let datasets = Datasets::bundled().unwrap();
        Engine::new(Settings::default(), datasets, location, feed)
    }

    #[tokio::test]
    async fn test_startup_runs_both_operations() {
        let location = ScriptedLocationProvider::granted(Coordinate::new(25.03, 121.55));
        let feed = StaticStationFeed::with_stations(vec![test_station(
            "500101001", "Test", 5, 20, "25.04", "121.56",
        )]);
        let mut engine = engine(location.clone(), feed.clone());

        engine.start();
        assert!(engine.state.is_busy());
        assert!(engine.wait_until_idle(WAIT).await);

        assert_eq!(location.permission_requests(), 1);
        assert_eq!(feed.fetches(), 1);

        let state = &engine.state;
        assert_eq!(state.region.center(), Coordinate::new(25.03, 121.55));
        assert_eq!(state.user_marker.coordinate, Coordinate::new(25.03, 121.55));
        assert!(state.on_current_location);
        assert_eq!(state.bike_stations.len(), 1);
        assert!(matches!(state.station_source, StationSource::Live { .. }));

        let frame = engine.frame();
        assert!(!frame.recenter_visible);
        assert_eq!(frame.bikes.len(), 1);
        assert_eq!(frame.bikes[0].title, "Test 5/20");
    }

    #[tokio::test]
    async fn test_permission_denied_keeps_bundled_markers() {
        let mut engine = engine(
            ScriptedLocationProvider::denied(),
            StaticStationFeed::failing("offline"),
        );
        let bundled_bikes = engine.state.bike_stations.len();
        let bundled_metro = engine.state.metro_stations.len();

        engine.start();
        assert!(engine.wait_until_idle(WAIT).await);

        assert_eq!(engine.state.location_status, LocationStatus::Denied);
        assert_eq!(engine.state.feed_status, FeedStatus::Failed);
        assert_eq!(engine.state.region, Region::default());

        let frame = engine.frame();
        assert_eq!(frame.metro.len(), bundled_metro);
        assert!(!frame.bikes.is_empty());
        assert!(frame.bikes.len() <= bundled_bikes);
        assert!(frame.message.is_some());
    }

    #[tokio::test]
    async fn test_unsupported_platform_launches_nothing() {
        let location = ScriptedLocationProvider::unsupported();
        let feed = StaticStationFeed::with_stations(vec![]);
        let mut engine = engine(location.clone(), feed.clone());

        engine.start();

        assert!(!engine.state.is_busy());
        assert!(engine.wait_until_idle(WAIT).await);
        assert_eq!(location.permission_requests(), 0);
        assert_eq!(feed.fetches(), 0);
        assert_eq!(engine.state.location_status, LocationStatus::Unsupported);
        assert!(!engine.frame().bikes.is_empty());
    }

    #[tokio::test]
    async fn test_recenter_after_pan() {
        let location = ScriptedLocationProvider::granted(Coordinate::new(25.03, 121.55));
        let mut engine = engine(location.clone(), StaticStationFeed::with_stations(vec![]));

        engine.start();
        assert!(engine.wait_until_idle(WAIT).await);
        assert!(!engine.frame().recenter_visible);

        let panned = engine.state.region.panned(0.25, 0.0);
        engine.process_message(Message::RegionChangeComplete(panned));
        assert!(engine.frame().recenter_visible);

        engine.process_message(Message::RecenterRequested);
        assert!(engine.wait_until_idle(WAIT).await);

        assert_eq!(location.permission_requests(), 2);
        assert!(!engine.frame().recenter_visible);
        assert_eq!(engine.state.region.center(), Coordinate::new(25.03, 121.55));
    }

    #[tokio::test]
    async fn test_present_skips_unchanged_frames() {
        let mut engine = engine(
            ScriptedLocationProvider::denied(),
            StaticStationFeed::with_stations(vec![]),
        );
        let mut surface = MockMapSurface::new();
        surface.expect_present().times(2).returning(|_| Ok(()));

        assert!(engine.present(&mut surface).unwrap());
        assert!(!engine.present(&mut surface).unwrap());

        engine.process_message(Message::SelectNextStation);
        assert!(engine.present(&mut surface).unwrap());
    }

    #[tokio::test]
    async fn test_force_redraw() {
        let mut engine = engine(
            ScriptedLocationProvider::denied(),
            StaticStationFeed::with_stations(vec![]),
        );
        let mut surface = MockMapSurface::new();
        surface.expect_present().times(2).returning(|_| Ok(()));

        engine.present(&mut surface).unwrap();
        engine.force_redraw();
        assert!(engine.present(&mut surface).unwrap());
    }

    #[tokio::test]
    async fn test_surface_error_propagates() {
        let mut engine = engine(
            ScriptedLocationProvider::denied(),
            StaticStationFeed::with_stations(vec![]),
        );
        let mut surface = MockMapSurface::new();
        surface
            .expect_present()
            .returning(|_| Err(Error::terminal("gone")));

        assert!(engine.present(&mut surface).is_err());
    }

    #[tokio::test]
    async fn test_shutdown_drops_late_results() {
        let mut engine = engine(
            ScriptedLocationProvider::granted(Coordinate::new(25.03, 121.55)),
            StaticStationFeed::with_stations(vec![]),
        );

        engine.shutdown();
        engine.start();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(engine.drain_pending_messages(), 0);
        assert_eq!(engine.state.region, Region::default());
    }

    #[tokio::test]
    async fn test_quit_message() {
        let mut engine = engine(
            ScriptedLocationProvider::denied(),
            StaticStationFeed::with_stations(vec![]),
        );

        engine.msg_sender().send(Message::Quit).await.unwrap();
        assert_eq!(engine.drain_pending_messages(), 1);
        assert!(engine.should_quit());
    }
}
