// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Banner (3 rows: winner / celebration / notices)   |
// +-------------------------+------------------------+
// | Main Panel (65%)         | History Sidebar (35%) |
// | (tab-switched content)   |                        |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: tab bar and roster counters.
    pub status_bar: Rect,
    /// Second row: winner banner, celebration, and transient notices.
    pub banner: Rect,
    /// Left side of the middle section: tab-switched content area.
    pub main_panel: Rect,
    /// Right side of the middle section: past winners.
    pub sidebar: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the layout from the available terminal area.
///
/// Fixed heights for the status bar, banner, and help bar; the
/// remaining space is split between the main panel and the history
/// sidebar.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | banner(3) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar = vertical[0];
    let banner = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    // Horizontal: main panel (65%) | sidebar (35%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(middle);

    AppLayout {
        status_bar,
        banner,
        main_panel: horizontal[0],
        sidebar: horizontal[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    fn all_rects(layout: &AppLayout) -> [(&'static str, Rect); 5] {
        [
            ("status_bar", layout.status_bar),
            ("banner", layout.banner),
            ("main_panel", layout.main_panel),
            ("sidebar", layout.sidebar),
            ("help_bar", layout.help_bar),
        ]
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        for (name, rect) in all_rects(&layout) {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_fixed_row_heights() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.banner.height, 3);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn layout_main_panel_wider_than_sidebar() {
        let layout = build_layout(test_area());
        assert!(
            layout.main_panel.width > layout.sidebar.width,
            "Main panel ({}) should be wider than sidebar ({})",
            layout.main_panel.width,
            layout.sidebar.width
        );
    }

    #[test]
    fn layout_main_and_sidebar_share_a_row() {
        let layout = build_layout(test_area());
        assert_eq!(layout.main_panel.y, layout.sidebar.y);
        assert_eq!(layout.main_panel.height, layout.sidebar.height);
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area);
        for (name, rect) in all_rects(&layout) {
            assert!(
                rect.x + rect.width <= area.width && rect.y + rect.height <= area.height,
                "{} {:?} exceeds area {:?}",
                name,
                rect,
                area
            );
        }
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        let area = Rect::new(0, 0, 40, 14);
        let layout = build_layout(area);
        for (name, rect) in all_rects(&layout) {
            assert!(
                rect.width > 0 && rect.height > 0,
                "Small terminal: {} has zero area",
                name
            );
        }
    }
}
