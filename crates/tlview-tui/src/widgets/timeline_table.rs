//! Timeline table widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use tlview_app::RowView;
use tlview_client::AssetResolver;

use super::truncate_to_width;
use crate::theme::{palette, styles};

/// Width of the image/icon/audio marker columns
const MARKER_WIDTH: usize = 6;

const HEADERS: [&str; 11] = [
    "Id",
    "Episode",
    "Title",
    "Media",
    "Image",
    "Icon",
    "Audio",
    "Status",
    "Active",
    "Create Date",
    "Category",
];

/// Table of the current page window
pub struct TimelineTable<'a> {
    rows: &'a [RowView<'a>],
    focused: bool,
}

impl<'a> TimelineTable<'a> {
    pub fn new(rows: &'a [RowView<'a>]) -> Self {
        Self {
            rows,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Screen rect of each visible row, paired with its window index.
    ///
    /// Call after rendering so `offset` reflects any scrolling the table did.
    pub fn row_regions(area: Rect, row_count: usize, offset: usize) -> Vec<(Rect, usize)> {
        let inner = styles::glass_block(false).inner(area);
        // Header takes the first inner line
        let body_top = inner.y + 1;
        let visible = inner.height.saturating_sub(1) as usize;

        (offset..row_count)
            .take(visible)
            .enumerate()
            .map(|(line, index)| {
                let rect = Rect::new(inner.x, body_top + line as u16, inner.width, 1);
                (rect, index)
            })
            .collect()
    }

    fn widths() -> [Constraint; 11] {
        let marker = MARKER_WIDTH as u16;
        [
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(marker),
            Constraint::Length(marker),
            Constraint::Length(marker),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ]
    }
}

/// Short marker for an asset column: the file name cut to the column width
fn asset_marker(path: &str) -> String {
    truncate_to_width(AssetResolver::file_name(path), MARKER_WIDTH)
}

fn table_row<'a>(row: &'a RowView<'a>) -> Row<'a> {
    let record = row.record;
    let audio = if row.audio_url.is_some() {
        Span::styled("▶ play", styles::accent())
    } else {
        Span::raw("")
    };

    let cells = vec![
        Cell::from(record.id.as_str()),
        Cell::from(record.episode.as_str()),
        Cell::from(Span::styled(record.title.as_str(), styles::text_primary())),
        Cell::from(record.media_name.as_str()),
        Cell::from(asset_marker(&record.image)),
        Cell::from(asset_marker(&record.icon)),
        Cell::from(audio),
        Cell::from(record.status.as_str()),
        Cell::from(record.is_active.as_str()),
        Cell::from(record.create_date.as_str()),
        Cell::from(record.category.as_str()),
    ];

    let style = if row.index % 2 == 1 {
        Style::default().bg(palette::STRIPE_BG)
    } else {
        Style::default()
    };
    Row::new(cells).style(style.fg(palette::TEXT_SECONDARY))
}

impl StatefulWidget for TimelineTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let block = styles::glass_block(self.focused).title(" Timeline ");

        if self.rows.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No matching records",
                styles::text_muted(),
            )))
            .block(block)
            .render(area, buf);
            return;
        }

        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(styles::label());

        let table = Table::new(self.rows.iter().map(table_row), Self::widths())
            .header(header)
            .block(block)
            .row_highlight_style(styles::focused_selected());

        StatefulWidget::render(table, area, buf, state);
    }
}
