//! Pagination control bar

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use tlview_core::PageControl;
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

/// Control bar: « ‹ … 3 4 [5] 6 7 … › » followed by a page summary.
pub struct PaginationBar<'a> {
    controls: &'a [PageControl],
    page: usize,
    total_pages: usize,
    total_matches: usize,
}

impl<'a> PaginationBar<'a> {
    pub fn new(controls: &'a [PageControl], page: usize, total_pages: usize) -> Self {
        Self {
            controls,
            page,
            total_pages,
            total_matches: 0,
        }
    }

    pub fn total_matches(mut self, total: usize) -> Self {
        self.total_matches = total;
        self
    }

    /// Rect of every control laid out left to right, clipped to `area`.
    fn control_rects(&self, area: Rect) -> Vec<(Rect, &'a PageControl)> {
        let mut x = area.x;
        let right = area.x.saturating_add(area.width);
        let mut out = Vec::with_capacity(self.controls.len());

        for control in self.controls {
            let width = control.label().width() as u16 + 2;
            if x.saturating_add(width) > right {
                break;
            }
            out.push((Rect::new(x, area.y, width, 1), control));
            x = x.saturating_add(width + 1);
        }
        out
    }

    /// Clickable regions and the page each one navigates to.
    pub fn hit_regions(&self, area: Rect) -> Vec<(Rect, usize)> {
        self.control_rects(area)
            .into_iter()
            .filter_map(|(rect, control)| control.target().map(|page| (rect, page)))
            .collect()
    }

    fn summary(&self) -> String {
        format!(
            "Page {} of {} · {} records",
            self.page, self.total_pages, self.total_matches
        )
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let rects = self.control_rects(area);
        let mut end = area.x;
        for (rect, control) in &rects {
            let style = match control {
                c if c.is_active() => styles::focused_selected(),
                PageControl::Ellipsis => styles::text_muted(),
                _ => Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::STRIPE_BG),
            };
            buf.set_string(rect.x, rect.y, format!(" {} ", control.label()), style);
            end = rect.x + rect.width;
        }

        let summary = self.summary();
        let summary_width = summary.width() as u16;
        let right = area.x + area.width;
        if end + 2 + summary_width <= right {
            buf.set_string(
                right - summary_width,
                area.y,
                &summary,
                styles::text_muted(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use tlview_core::page_controls;

    #[test]
    fn test_renders_controls_and_summary() {
        let controls = page_controls(1, 3);
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            PaginationBar::new(&controls, 1, 3).total_matches(25),
            term.area(),
        );

        assert!(term.line_contains(0, " 1   2   3   ›   » "));
        assert!(term.buffer_contains("Page 1 of 3 · 25 records"));
        assert!(!term.buffer_contains("«"));
    }

    #[test]
    fn test_active_page_is_highlighted() {
        let controls = page_controls(2, 3);
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(PaginationBar::new(&controls, 2, 3), term.area());

        let regions = PaginationBar::new(&controls, 2, 3).hit_regions(term.area());
        let (active_rect, _) = regions
            .iter()
            .find(|(_, page)| *page == 2)
            .copied()
            .expect("number 2 region");
        assert_eq!(term.buffer()[(active_rect.x + 1, 0)].bg, palette::ACCENT);
    }

    #[test]
    fn test_hit_regions_skip_ellipsis() {
        let controls = page_controls(6, 12);
        let bar = PaginationBar::new(&controls, 6, 12);
        let regions = bar.hit_regions(Rect::new(0, 0, 80, 1));

        // 11 controls, two of them ellipses
        assert_eq!(regions.len(), 9);
        assert_eq!(regions[0], (Rect::new(0, 0, 3, 1), 1));
        assert_eq!(regions[1], (Rect::new(4, 0, 3, 1), 5));
        assert_eq!(regions.last().map(|(_, p)| *p), Some(12));
    }

    #[test]
    fn test_narrow_area_clips_controls() {
        let controls = page_controls(6, 12);
        let bar = PaginationBar::new(&controls, 6, 12);
        let regions = bar.hit_regions(Rect::new(0, 0, 10, 1));
        assert_eq!(regions.len(), 2);
    }
}
