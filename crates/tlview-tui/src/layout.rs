//! Screen layout definitions for the TUI
//!
//! Body panels across the top (when there are any), then the search input,
//! the table, the pagination bar and the key hints footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the panel strip, borders included
const PANELS_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Body panel strip; zero height when no panels are shown
    pub panels: Rect,
    pub search: Rect,
    pub table: Rect,
    pub pagination: Rect,
    pub footer: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `panel_count` - Number of body panels to show above the table
pub fn create(area: Rect, panel_count: usize) -> ScreenAreas {
    let panels_height = if panel_count > 0 { PANELS_HEIGHT } else { 0 };

    let [panels, search, table, pagination, footer] = Layout::vertical([
        Constraint::Length(panels_height),
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        panels,
        search,
        table,
        pagination,
        footer,
    }
}

/// Split the panel strip into `count` equal columns
pub fn panel_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::horizontal(vec![Constraint::Fill(1); count])
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_panels() {
        let layout = create(Rect::new(0, 0, 80, 24), 2);

        assert_eq!(layout.panels.height, PANELS_HEIGHT);
        assert_eq!(layout.search.y, 5);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.table.y, 8);
        assert_eq!(layout.table.height, 14); // 24 - 5 - 3 - 1 - 1
        assert_eq!(layout.pagination.y, 22);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_layout_without_panels() {
        let layout = create(Rect::new(0, 0, 80, 24), 0);

        assert_eq!(layout.panels.height, 0);
        assert_eq!(layout.search.y, 0);
        assert_eq!(layout.table.height, 19);
    }

    #[test]
    fn test_panel_columns() {
        let columns = panel_columns(Rect::new(0, 0, 80, 5), 2);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].width + columns[1].width, 80);
        assert!(panel_columns(Rect::new(0, 0, 80, 5), 0).is_empty());
    }
}
