//! Main update function - handles state transitions (TEA pattern)

use bikemap_core::prelude::*;

use crate::message::{Message, ZoomDirection};
use crate::state::{
    AppState, FeedStatus, LocationStatus, MessageSource, UNSUPPORTED_PLATFORM_MESSAGE,
};

use super::{keys::handle_key, UpdateAction, UpdateResult, ZOOM_IN_FACTOR};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Startup => handle_startup(state),

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_busy() {
                state.tick = state.tick.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Map Surface Events
        // ─────────────────────────────────────────────────────────
        Message::RegionChangeComplete(region) => {
            if state.apply_region_change(region) {
                trace!(
                    "Region committed: {}, {} (span {} x {})",
                    region.latitude,
                    region.longitude,
                    region.latitude_delta,
                    region.longitude_delta
                );
            }
            UpdateResult::none()
        }

        Message::Zoom(direction) => {
            let factor = match direction {
                ZoomDirection::In => ZOOM_IN_FACTOR,
                ZoomDirection::Out => 1.0 / ZOOM_IN_FACTOR,
            };
            state.region = state.region.zoomed(factor);
            UpdateResult::none()
        }

        Message::RecenterRequested => request_location(state),

        // ─────────────────────────────────────────────────────────
        // Location Results
        // ─────────────────────────────────────────────────────────
        Message::LocationResolved { coordinate } => {
            info!("Centered on device location {}", coordinate);
            state.apply_location_fix(coordinate);
            state.clear_message_from(MessageSource::Location);
            UpdateResult::none()
        }

        Message::LocationPermissionDenied => {
            state.location_status = LocationStatus::Denied;
            state.show_error(MessageSource::Location, Error::PermissionDenied.to_string());
            UpdateResult::none()
        }

        Message::LocationUnsupported => {
            mark_unsupported(state);
            UpdateResult::none()
        }

        Message::LocationFailed { error } => {
            warn!("Location fix failed: {}", error);
            state.location_status = LocationStatus::Failed;
            state.show_error(
                MessageSource::Location,
                format!("Failed to get current location: {}", error),
            );
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Station Feed
        // ─────────────────────────────────────────────────────────
        Message::ReloadStations => {
            if state.feed_status == FeedStatus::Loading {
                debug!("Station fetch already in flight");
                return UpdateResult::none();
            }
            state.feed_status = FeedStatus::Loading;
            UpdateResult::action(UpdateAction::FetchStations)
        }

        Message::StationsLoaded { stations } => {
            info!("Loaded {} live bike stations", stations.len());
            state.replace_bike_stations(stations);
            state.clear_message_from(MessageSource::Feed);
            UpdateResult::none()
        }

        Message::StationFeedFailed { error } => {
            warn!("Station feed failed: {}", error);
            state.feed_status = FeedStatus::Failed;
            state.show_error(
                MessageSource::Feed,
                format!("Failed to load bike stations: {}", error),
            );
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Station Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNextStation => {
            state.select_next_station();
            UpdateResult::none()
        }

        Message::SelectPreviousStation => {
            state.select_previous_station();
            UpdateResult::none()
        }

        Message::ClearSelection => {
            state.clear_selection();
            UpdateResult::none()
        }

        Message::DismissMessage => {
            state.clear_message();
            UpdateResult::none()
        }
    }
}

/// Launch both startup operations, unordered.
///
/// On a platform without location support neither is launched and only the
/// bundled data is shown.
fn handle_startup(state: &mut AppState) -> UpdateResult {
    if !state.location_supported {
        info!("Location unsupported on this platform, skipping startup operations");
        mark_unsupported(state);
        return UpdateResult::none();
    }

    match request_location(state).action {
        Some(action) => UpdateResult::action_then(action, Message::ReloadStations),
        None => UpdateResult::message(Message::ReloadStations),
    }
}

fn request_location(state: &mut AppState) -> UpdateResult {
    if !state.location_supported {
        mark_unsupported(state);
        return UpdateResult::none();
    }

    if state.location_status == LocationStatus::Requesting {
        debug!("Location request already in flight");
        return UpdateResult::none();
    }

    state.location_status = LocationStatus::Requesting;
    UpdateResult::action(UpdateAction::RequestLocation)
}

fn mark_unsupported(state: &mut AppState) {
    state.location_supported = false;
    state.location_status = LocationStatus::Unsupported;
    state.show_error(MessageSource::Platform, UNSUPPORTED_PLATFORM_MESSAGE);
}
