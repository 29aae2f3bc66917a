//! Screen layout definitions for the map view

use ratatui::layout::{Constraint, Layout, Rect};

/// Status bar height: top border + message row + key hints row
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Station detail panel height (bordered: address, gauge, counts)
pub const DETAIL_HEIGHT: u16 = 5;

/// Recenter control size (bordered single row)
pub const RECENTER_WIDTH: u16 = 16;
pub const RECENTER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Map canvas
    pub map: Rect,

    /// Selected station panel, present only with a selection
    pub detail: Option<Rect>,

    pub status: Rect,
}

/// Split the screen into map, optional detail panel, and status bar
pub fn create(area: Rect, with_detail: bool) -> ScreenAreas {
    if with_detail {
        let [map, detail, status] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(DETAIL_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        ScreenAreas {
            map,
            detail: Some(detail),
            status,
        }
    } else {
        let [map, status] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(area);

        ScreenAreas {
            map,
            detail: None,
            status,
        }
    }
}

/// Top-right corner of the map, inside its border
pub fn recenter_area(map: Rect) -> Rect {
    let width = RECENTER_WIDTH.min(map.width.saturating_sub(2));
    let height = RECENTER_HEIGHT.min(map.height.saturating_sub(2));
    Rect::new(
        map.x + map.width.saturating_sub(width + 1),
        map.y + 1,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_detail() {
        let layout = create(Rect::new(0, 0, 80, 24), false);

        assert!(layout.detail.is_none());
        assert_eq!(layout.status.height, STATUS_BAR_HEIGHT);
        assert_eq!(layout.map.height, 24 - STATUS_BAR_HEIGHT);
        assert_eq!(layout.status.y, 24 - STATUS_BAR_HEIGHT);
    }

    #[test]
    fn test_layout_with_detail() {
        let layout = create(Rect::new(0, 0, 80, 24), true);

        let detail = layout.detail.unwrap();
        assert_eq!(detail.height, DETAIL_HEIGHT);
        assert_eq!(layout.map.height, 24 - STATUS_BAR_HEIGHT - DETAIL_HEIGHT);
        assert_eq!(detail.y, layout.map.y + layout.map.height);
    }

    #[test]
    fn test_recenter_area_in_top_right() {
        let map = Rect::new(0, 0, 80, 20);
        let area = recenter_area(map);

        assert_eq!(area.width, RECENTER_WIDTH);
        assert_eq!(area.x + area.width, 79);
        assert_eq!(area.y, 1);
    }

    #[test]
    fn test_recenter_area_on_tiny_map() {
        let area = recenter_area(Rect::new(0, 0, 6, 3));
        assert!(area.width <= 4);
        assert!(area.height <= 1);
    }
}
