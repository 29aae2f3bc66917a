//! Semantic style builders.

use bikemap_app::markers::Marker;
use bikemap_app::MarkerKind;
use bikemap_app::MessageLevel;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

/// Rounded panel with a title
pub fn panel(title: &str, active: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if active {
            border_active()
        } else {
            border_inactive()
        })
        .title(format!(" {} ", title))
}

// --- Status styles ---
pub fn message(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::default().fg(palette::STATUS_GREEN),
        MessageLevel::Error => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn busy() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Marker styles ---

/// Marker color by kind; bikes shade by how many are left
pub fn marker(marker: &Marker, selected: bool) -> Style {
    if selected {
        return Style::default()
            .fg(palette::SELECTED_MARKER)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let fg = match &marker.kind {
        MarkerKind::User => palette::USER_MARKER,
        MarkerKind::Metro { .. } => palette::METRO_MARKER,
        MarkerKind::Bike { available: 0, .. } => palette::BIKE_EMPTY,
        MarkerKind::Bike {
            pie: Some(pie), ..
        } if pie.available.percent < 100.0 / 3.0 => palette::BIKE_LOW,
        MarkerKind::Bike { .. } => palette::available_slice(),
    };

    Style::default().fg(fg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikemap_app::markers::Marker;
    use bikemap_platform::test_utils::test_station;
    use ratatui::style::Color;

    fn bike(sbi: u32, tot: u32) -> Marker {
        Marker::bike(&test_station("1", "S", sbi, tot, "25.0", "121.5")).unwrap()
    }

    #[test]
    fn test_bike_marker_shading() {
        assert_eq!(marker(&bike(0, 10), false).fg, Some(palette::BIKE_EMPTY));
        assert_eq!(marker(&bike(2, 10), false).fg, Some(palette::BIKE_LOW));
        assert_eq!(
            marker(&bike(8, 10), false).fg,
            Some(Color::Rgb(0x56, 0x74, 0xAC))
        );
    }

    #[test]
    fn test_selected_overrides_kind() {
        assert_eq!(
            marker(&bike(8, 10), true).fg,
            Some(palette::SELECTED_MARKER)
        );
    }
}
