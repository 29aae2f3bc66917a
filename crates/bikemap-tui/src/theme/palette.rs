//! Color palette for the map view.

use std::str::FromStr;

use bikemap_app::markers::{AVAILABLE_SLICE_COLOR, OCCUPIED_SLICE_COLOR};
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Markers ---
pub const USER_MARKER: Color = Color::LightGreen;
pub const METRO_MARKER: Color = Color::LightCyan;
/// Station with no bikes left
pub const BIKE_EMPTY: Color = Color::Red;
/// Station under a third full
pub const BIKE_LOW: Color = Color::Yellow;
pub const SELECTED_MARKER: Color = Color::Magenta;

/// Parse a `#RRGGBB` string, falling back to the terminal default
pub fn hex(color: &str) -> Color {
    Color::from_str(color).unwrap_or(Color::Reset)
}

/// Available-bike slice color
pub fn available_slice() -> Color {
    hex(AVAILABLE_SLICE_COLOR)
}

/// Occupied-dock slice color
pub fn occupied_slice() -> Color {
    hex(OCCUPIED_SLICE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_colors_parse() {
        assert_eq!(available_slice(), Color::Rgb(0x56, 0x74, 0xAC));
        assert_eq!(occupied_slice(), Color::Rgb(0xFA, 0xCF, 0xC9));
    }

    #[test]
    fn test_bad_hex_falls_back() {
        assert_eq!(hex("not-a-color"), Color::Reset);
    }
}
