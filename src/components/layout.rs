//! Screen layout calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Full height of the carousel, in rows
pub const CAROUSEL_ROWS: u16 = 9;
/// Height of the page indicator
pub const INDICATOR_ROWS: u16 = 1;
/// Height of the search bar
pub const SEARCH_ROWS: u16 = 3;

/// Main screen layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub carousel: Rect,
    pub indicator: Rect,
    pub search: Rect,
    pub list: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Rows of the carousel and indicator still visible at `scroll_offset`.
///
/// Scrolling pushes content up, so the carousel disappears first and the
/// indicator after it.
pub fn visible_header_rows(has_carousel: bool, scroll_offset: u16) -> (u16, u16) {
    if !has_carousel {
        return (0, 0);
    }
    let carousel = CAROUSEL_ROWS.saturating_sub(scroll_offset);
    let indicator = INDICATOR_ROWS.saturating_sub(scroll_offset.saturating_sub(CAROUSEL_ROWS));
    (carousel, indicator)
}

/// Calculate the screen layout: header, search bar, list, help bar
pub fn calculate_screen_layout(area: Rect, has_carousel: bool, scroll_offset: u16) -> ScreenLayout {
    let (carousel_rows, indicator_rows) = visible_header_rows(has_carousel, scroll_offset);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(carousel_rows),
            Constraint::Length(indicator_rows),
            Constraint::Length(SEARCH_ROWS),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenLayout {
        carousel: chunks[0],
        indicator: chunks[1],
        search: chunks[2],
        list: chunks[3],
        help: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_header_at_top() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 80, 40), true, 0);
        assert_eq!(layout.carousel.height, CAROUSEL_ROWS);
        assert_eq!(layout.indicator.height, INDICATOR_ROWS);
        assert_eq!(layout.search.y, CAROUSEL_ROWS + INDICATOR_ROWS);
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_header_collapses_with_scroll() {
        assert_eq!(visible_header_rows(true, 4), (5, 1));
        assert_eq!(visible_header_rows(true, CAROUSEL_ROWS), (0, 1));
        assert_eq!(visible_header_rows(true, CAROUSEL_ROWS + 1), (0, 0));
        assert_eq!(visible_header_rows(true, 100), (0, 0));

        let layout = calculate_screen_layout(Rect::new(0, 0, 80, 40), true, 100);
        assert_eq!(layout.search.y, 0);
    }

    #[test]
    fn test_no_carousel() {
        assert_eq!(visible_header_rows(false, 0), (0, 0));
        let layout = calculate_screen_layout(Rect::new(0, 0, 80, 40), false, 0);
        assert_eq!(layout.search.y, 0);
        assert_eq!(layout.carousel.height, 0);
    }

    #[test]
    fn test_centered_popup() {
        let popup = centered_popup(Rect::new(0, 0, 80, 24), 40, 8);
        assert_eq!(popup, Rect::new(20, 8, 40, 8));

        let clamped = centered_popup(Rect::new(0, 0, 20, 5), 40, 8);
        assert_eq!(clamped, Rect::new(0, 0, 20, 5));
    }
}
