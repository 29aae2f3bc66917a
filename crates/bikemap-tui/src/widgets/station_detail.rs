//! Selected station panel
//!
//! Shows the marker label, the address, and the two-slice availability split
//! as a gauge: the filled part is available bikes, the rest occupied docks.

use bikemap_app::markers::{Marker, MarkerKind, PieChart};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

pub struct StationDetail<'a> {
    marker: &'a Marker,
}

impl<'a> StationDetail<'a> {
    pub fn new(marker: &'a Marker) -> Self {
        Self { marker }
    }

    fn counts_line(pie: &PieChart) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("■ {} bikes ({:.0}%)", pie.available.count, pie.available.percent),
                Style::default().fg(palette::hex(pie.available.color)),
            ),
            Span::raw("   "),
            Span::styled(
                format!("■ {} empty docks ({:.0}%)", pie.occupied.count, pie.occupied.percent),
                Style::default().fg(palette::hex(pie.occupied.color)),
            ),
        ])
    }
}

/// Cut `text` to at most `max` terminal columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl Widget for StationDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_width = area.width.saturating_sub(4) as usize;
        let title = truncate_to_width(&self.marker.title, title_width);
        let block = styles::panel(&title, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [address_row, gauge_row, counts_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let address = truncate_to_width(&self.marker.description, inner.width as usize);
        Paragraph::new(Span::styled(address, styles::text_secondary())).render(address_row, buf);

        let pie = match &self.marker.kind {
            MarkerKind::Bike { pie, .. } => pie.as_ref(),
            _ => None,
        };

        match pie {
            Some(pie) => {
                Gauge::default()
                    .gauge_style(
                        Style::default()
                            .fg(palette::hex(pie.available.color))
                            .bg(palette::hex(pie.occupied.color)),
                    )
                    .ratio((pie.available.percent / 100.0).clamp(0.0, 1.0))
                    .label(format!("{:.0}% available", pie.available.percent))
                    .render(gauge_row, buf);

                Paragraph::new(Self::counts_line(pie)).render(counts_row, buf);
            }
            None => {
                Paragraph::new(Span::styled("No docks at this station", styles::text_muted()))
                    .render(gauge_row, buf);
            }
        }
    }
}
