//! Key event handlers for the map view

use crate::input_key::InputKey;
use crate::message::{Message, ZoomDirection};
use crate::state::AppState;

use super::PAN_STEP;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Pan
        InputKey::Up | InputKey::Char('k') => pan(state, PAN_STEP, 0.0),
        InputKey::Down | InputKey::Char('j') => pan(state, -PAN_STEP, 0.0),
        InputKey::Left | InputKey::Char('h') => pan(state, 0.0, -PAN_STEP),
        InputKey::Right | InputKey::Char('l') => pan(state, 0.0, PAN_STEP),

        // Zoom
        InputKey::Char('+' | '=') => Some(Message::Zoom(ZoomDirection::In)),
        InputKey::Char('-' | '_') => Some(Message::Zoom(ZoomDirection::Out)),

        // Recenter control only reacts while it is shown
        InputKey::Char('c') | InputKey::Enter if state.recenter_visible() => {
            Some(Message::RecenterRequested)
        }

        // Station selection
        InputKey::Tab => Some(Message::SelectNextStation),
        InputKey::BackTab => Some(Message::SelectPreviousStation),
        InputKey::Esc => Some(Message::ClearSelection),

        InputKey::Char('r') => Some(Message::ReloadStations),
        InputKey::Char('x') => Some(Message::DismissMessage),

        _ => None,
    }
}

/// A pan is reported the way a map surface would: as the settled region
fn pan(state: &AppState, lat_fraction: f64, lng_fraction: f64) -> Option<Message> {
    Some(Message::RegionChangeComplete(
        state.region.panned(lat_fraction, lng_fraction),
    ))
}
