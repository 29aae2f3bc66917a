//! Map canvas widget
//!
//! Projects the region's bounding box onto the terminal and prints one glyph
//! per visible marker. Longitude is x, latitude is y.

use bikemap_app::markers::{Marker, MarkerKind, USER_GLYPH};
use bikemap_app::MapFrame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{canvas::Canvas, Widget},
};

use crate::theme::styles;

pub const BIKE_GLYPH: &str = "●";
pub const SELECTED_BIKE_GLYPH: &str = "◆";

/// Map canvas showing every marker inside the region
pub struct MapCanvas<'a> {
    frame: &'a MapFrame,
}

impl<'a> MapCanvas<'a> {
    pub fn new(frame: &'a MapFrame) -> Self {
        Self { frame }
    }

    fn is_selected(&self, marker: &Marker) -> bool {
        matches!(marker.kind, MarkerKind::Bike { .. })
            && self.frame.selected.as_deref() == Some(marker.key.as_str())
    }

    /// Visible markers, bottom layer first: bikes, metro, then the user
    fn paint_order(&self) -> Vec<&'a Marker> {
        let region = self.frame.region;
        let visible = |m: &&Marker| region.contains(m.coordinate);

        let mut markers: Vec<&Marker> = self.frame.bikes.iter().filter(visible).collect();
        markers.extend(self.frame.metro.iter().filter(visible));
        markers.extend(std::iter::once(&self.frame.user).filter(visible));

        // Selected station last so its label stays readable
        if let Some(index) = markers.iter().position(|m| self.is_selected(m)) {
            let selected = markers.remove(index);
            markers.push(selected);
        }

        markers
    }
}

/// Glyph drawn for a marker
pub fn glyph(marker: &Marker, selected: bool) -> &'static str {
    match &marker.kind {
        MarkerKind::User => USER_GLYPH,
        MarkerKind::Metro { glyph, .. } => glyph,
        MarkerKind::Bike { .. } if selected => SELECTED_BIKE_GLYPH,
        MarkerKind::Bike { .. } => BIKE_GLYPH,
    }
}

impl Widget for MapCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bounds = self.frame.region.bounds();
        let title = format!("Map {}", self.frame.region.center());
        let markers = self.paint_order();

        Canvas::default()
            .block(styles::panel(&title, false))
            .x_bounds([bounds.west, bounds.east])
            .y_bounds([bounds.south, bounds.north])
            .paint(|ctx| {
                for marker in &markers {
                    let selected = self.is_selected(marker);
                    let text = if selected {
                        format!("{} {}", glyph(marker, true), marker.title)
                    } else {
                        glyph(marker, false).to_string()
                    };
                    ctx.print(
                        marker.coordinate.longitude,
                        marker.coordinate.latitude,
                        Span::styled(text, styles::marker(marker, selected)),
                    );
                }
            })
            .render(area, buf);
    }
}
