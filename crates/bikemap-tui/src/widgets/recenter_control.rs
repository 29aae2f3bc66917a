//! Recenter control: shown while the view is off the user's position

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::theme::{self, styles};

pub struct RecenterControl {
    locating: bool,
    tick: u64,
}

impl RecenterControl {
    pub fn new(locating: bool, tick: u64) -> Self {
        Self { locating, tick }
    }

    fn label(&self) -> Line<'static> {
        if self.locating {
            Line::from(vec![
                Span::styled(theme::spinner(self.tick), styles::busy()),
                Span::styled(" Locating", styles::text_secondary()),
            ])
        } else {
            Line::from(vec![
                Span::styled("◎ Recenter ", styles::text_primary()),
                Span::styled("[c]", styles::text_muted()),
            ])
        }
    }
}

impl Widget for RecenterControl {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_active());

        Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{RECENTER_HEIGHT, RECENTER_WIDTH};
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_idle_label() {
        let mut term = TestTerminal::with_size(RECENTER_WIDTH, RECENTER_HEIGHT);
        term.render_widget(RecenterControl::new(false, 0), term.area());

        assert!(term.buffer_contains("Recenter"));
        assert!(term.buffer_contains("[c]"));
    }

    #[test]
    fn test_locating_label_spins() {
        let mut term = TestTerminal::with_size(RECENTER_WIDTH, RECENTER_HEIGHT);
        term.render_widget(RecenterControl::new(true, 1), term.area());

        assert!(term.buffer_contains("Locating"));
        assert!(term.buffer_contains(theme::SPINNER_FRAMES[1]));
    }
}
