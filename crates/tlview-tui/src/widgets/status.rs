//! Loading and error screens shown instead of the table

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Braille spinner frames, one per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const APP_NAME: &str = "tlview";

/// Centered box in the middle of the screen, shared by both screens
fn center_box(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Length(height),
        Constraint::Percentage(35),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage(20),
        Constraint::Percentage(60),
        Constraint::Percentage(20),
    ])
    .areas(middle);
    center
}

pub struct LoadingScreen<'a> {
    message: &'a str,
    frame: u64,
}

impl<'a> LoadingScreen<'a> {
    pub fn new(message: &'a str, frame: u64) -> Self {
        Self { message, frame }
    }

    fn spinner(&self) -> &'static str {
        SPINNER[(self.frame as usize) % SPINNER.len()]
    }
}

impl Widget for LoadingScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let center = center_box(area, 7);
        Clear.render(center, buf);

        let lines = vec![
            Line::from(Span::styled(APP_NAME, styles::accent_bold())),
            Line::from(""),
            Line::from(vec![
                Span::styled(self.spinner(), styles::accent_bold()),
                Span::raw(" "),
                Span::styled(self.message, styles::text_secondary()),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_inactive())
            .style(Style::default().bg(palette::DEEPEST_BG));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(center, buf);
    }
}

pub struct ErrorScreen<'a> {
    message: &'a str,
}

impl<'a> ErrorScreen<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let center = center_box(area, 8);
        Clear.render(center, buf);

        let lines = vec![
            Line::from(Span::styled(
                format!("Error fetching data: {}", self.message),
                styles::status_red(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[q]", styles::keybinding()),
                Span::styled(" Quit", styles::text_muted()),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::STATUS_RED))
            .style(Style::default().bg(palette::DEEPEST_BG));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(center, buf);
    }
}
