//! Search input widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const PLACEHOLDER: &str = "Search...";

/// Single-line search input bound to the search term
pub struct SearchInput<'a> {
    term: &'a str,
    focused: bool,
    total_matches: usize,
}

impl<'a> SearchInput<'a> {
    pub fn new(term: &'a str) -> Self {
        Self {
            term,
            focused: false,
            total_matches: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn total_matches(mut self, total: usize) -> Self {
        self.total_matches = total;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        if self.term.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.term, styles::text_primary()));
        }
        if self.focused {
            spans.push(Span::styled("_", styles::keybinding()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);

        let status = format!("{} matches", self.total_matches);
        let status_width = status.len() as u16;
        if inner.width > status_width + 10 {
            let style = if self.total_matches > 0 {
                styles::status_green()
            } else {
                styles::status_red()
            };
            buf.set_string(
                inner.x + inner.width - status_width,
                inner.y,
                &status,
                style,
            );
        }
    }
}
