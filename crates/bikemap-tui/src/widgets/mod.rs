//! Custom widget components

mod map_canvas;
mod recenter_control;
mod station_detail;
mod status_bar;

pub use map_canvas::{glyph, MapCanvas, BIKE_GLYPH, SELECTED_BIKE_GLYPH};
pub use recenter_control::RecenterControl;
pub use station_detail::{truncate_to_width, StationDetail};
pub use status_bar::StatusBar;
