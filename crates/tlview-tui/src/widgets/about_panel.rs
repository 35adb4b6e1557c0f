//! Background/about panel for one body record

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};
use tlview_app::PanelView;

use crate::theme::styles;

pub struct AboutPanel<'a> {
    panel: &'a PanelView<'a>,
}

impl<'a> AboutPanel<'a> {
    pub fn new(panel: &'a PanelView<'a>) -> Self {
        Self { panel }
    }
}

impl Widget for AboutPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match &self.panel.background_url {
            Some(url) => format!(" {} ", url),
            None => " About ".to_string(),
        };
        let block = styles::glass_block(false)
            .title(title)
            .title_style(styles::text_muted())
            .style(Style::default().bg(styles::panel_background(self.panel.opacity)));

        Paragraph::new(self.panel.about_text.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Color;
    use tlview_core::Opacity;

    fn panel(opacity: u8) -> PanelView<'static> {
        PanelView {
            id: "1",
            background_url: Some("https://host/bg.jpg".to_string()),
            opacity: Opacity::from_percent(i64::from(opacity)),
            about_html: "<p>Welcome to the show</p>",
            about_text: "Welcome to the show".to_string(),
        }
    }

    #[test]
    fn test_renders_text_and_background_title() {
        let panel = panel(100);
        let mut term = TestTerminal::with_size(50, 4);
        term.render_widget(AboutPanel::new(&panel), term.area());

        assert!(term.buffer_contains("Welcome to the show"));
        assert!(term.buffer_contains("https://host/bg.jpg"));
    }

    #[test]
    fn test_background_shade_follows_opacity() {
        let panel = panel(0);
        let mut term = TestTerminal::with_size(50, 4);
        term.render_widget(AboutPanel::new(&panel), term.area());

        assert_eq!(term.buffer()[(2, 1)].bg, Color::Rgb(0, 0, 0));
    }
}
