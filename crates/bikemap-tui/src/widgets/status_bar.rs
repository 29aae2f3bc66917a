//! Status bar widget
//!
//! First row: centering state, station counts and source, pending operations.
//! Second row: the status message, or key hints when there is none.

use bikemap_app::MapFrame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{self, styles};

const KEY_HINTS: &str =
    "←↑↓→/hjkl pan  +/- zoom  c recenter  Tab station  Esc clear  r reload  x dismiss  q quit";

pub struct StatusBar<'a> {
    frame: &'a MapFrame,
}

impl<'a> StatusBar<'a> {
    pub fn new(frame: &'a MapFrame) -> Self {
        Self { frame }
    }

    fn center_indicator(&self) -> Span<'static> {
        if !self.frame.location_supported {
            Span::styled("○ no location", styles::text_muted())
        } else if self.frame.recenter_visible {
            Span::styled("◎ off-center", styles::text_secondary())
        } else {
            Span::styled("◉ on location", styles::text_primary())
        }
    }

    fn counts(&self) -> Span<'static> {
        Span::styled(
            format!(
                "Metro {}  Bikes {} ({})",
                self.frame.metro.len(),
                self.frame.bikes.len(),
                self.frame.station_source
            ),
            styles::text_secondary(),
        )
    }

    fn activity(&self) -> Option<Span<'static>> {
        let activity = self.frame.activity;
        let label = match (activity.locating, activity.loading_stations) {
            (true, true) => "locating, loading stations",
            (true, false) => "locating",
            (false, true) => "loading stations",
            (false, false) => return None,
        };
        Some(Span::styled(
            format!("{} {}", theme::spinner(activity.tick), label),
            styles::busy(),
        ))
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = || Span::styled(" │ ", styles::text_muted());

        let mut segments = vec![Span::raw(" "), self.center_indicator(), separator(), self.counts()];

        if let Some(activity) = self.activity() {
            segments.push(separator());
            segments.push(activity);
        }

        segments
    }

    fn second_line(&self) -> Line<'static> {
        match &self.frame.message {
            Some(message) => Line::from(vec![
                Span::styled(format!(" {}", message.text), styles::message(message.level)),
                Span::styled("  [x]", styles::text_muted()),
            ]),
            None => Line::from(Span::styled(format!(" {}", KEY_HINTS), styles::text_muted())),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border reads as a separator from the map
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![Line::from(self.build_segments()), self.second_line()];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::STATUS_BAR_HEIGHT;
    use crate::test_utils::{bundled_frame, TestTerminal};
    use bikemap_app::{MessageLevel, MessageSource, StatusMessage};

    fn render(frame: &MapFrame) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, STATUS_BAR_HEIGHT);
        term.render_widget(StatusBar::new(frame), term.area());
        term
    }

    #[test]
    fn test_counts_and_source() {
        let frame = bundled_frame();
        let term = render(&frame);

        let expected = format!(
            "Metro {}  Bikes {} (bundled)",
            frame.metro.len(),
            frame.bikes.len()
        );
        assert!(term.buffer_contains(&expected));
        assert!(term.buffer_contains("off-center"));
        assert!(term.buffer_contains("q quit"));
    }

    #[test]
    fn test_activity_and_message() {
        let mut frame = bundled_frame();
        frame.activity.locating = true;
        frame.activity.loading_stations = true;
        frame.message = Some(StatusMessage {
            text: "Permission to access location was denied".to_string(),
            level: MessageLevel::Error,
            source: MessageSource::Location,
        });

        let term = render(&frame);

        assert!(term.buffer_contains("locating, loading stations"));
        assert!(term.buffer_contains("Permission to access location was denied"));
        assert!(!term.buffer_contains("q quit"));
    }

    #[test]
    fn test_centered_indicator() {
        let mut frame = bundled_frame();
        frame.recenter_visible = false;

        assert!(render(&frame).buffer_contains("on location"));

        frame.location_supported = false;
        assert!(render(&frame).buffer_contains("no location"));
    }
}
