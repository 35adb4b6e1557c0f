//! Key hints footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tlview_app::Focus;

use crate::theme::styles;

/// One-line list of the keys that do something in the current focus
pub struct KeyHints {
    focus: Focus,
}

impl KeyHints {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Search => &[
                ("type", "filter"),
                ("Ctrl+U", "clear"),
                ("Tab/↓", "table"),
                ("Ctrl+C", "quit"),
            ],
            Focus::Table => &[
                ("↑↓", "move"),
                ("Enter", "details"),
                ("←→", "page"),
                ("1-9", "jump"),
                ("/", "search"),
                ("b", "panels"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {key} "), styles::keybinding()));
            spans.push(Span::styled(format!("{action} "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
