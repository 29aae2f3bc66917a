//! Main render/view function (View in TEA pattern)


use bikemap_app::MapFrame;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render a complete map frame
///
/// Pure: everything drawn comes from `map`.
pub fn view(frame: &mut Frame, map: &MapFrame) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let selected = map.selected_marker();
    let areas = layout::create(area, selected.is_some());

    frame.render_widget(widgets::MapCanvas::new(map), areas.map);

    let control_area = layout::recenter_area(areas.map);
    if map.recenter_visible && !control_area.is_empty() {
        frame.render_widget(
            widgets::RecenterControl::new(map.activity.locating, map.activity.tick),
            control_area,
        );
    }

    if let (Some(marker), Some(detail_area)) = (selected, areas.detail) {
        frame.render_widget(widgets::StationDetail::new(marker), detail_area);
    }

    frame.render_widget(widgets::StatusBar::new(map), areas.status);
}
