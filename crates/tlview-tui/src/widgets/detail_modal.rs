//! Item details modal

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use tlview_app::DetailView;

use super::modal_overlay;
use crate::theme::styles;

const MAX_WIDTH: u16 = 90;
const MAX_HEIGHT: u16 = 22;

/// Modal with every field of the selected record
pub struct DetailModal<'a> {
    detail: &'a DetailView<'a>,
}

impl<'a> DetailModal<'a> {
    pub fn new(detail: &'a DetailView<'a>) -> Self {
        Self { detail }
    }

    /// Where the modal sits within `area`; anything outside is backdrop.
    pub fn modal_rect(area: Rect) -> Rect {
        modal_overlay::centered_rect(
            MAX_WIDTH.min(area.width.saturating_sub(4)),
            MAX_HEIGHT.min(area.height.saturating_sub(2)),
            area,
        )
    }

    fn field(name: &'static str, value: &'a str) -> Vec<Span<'a>> {
        vec![
            Span::styled(format!("{name}: "), styles::label()),
            Span::styled(value, styles::text_primary()),
            Span::raw("  "),
        ]
    }

    fn asset_line(name: &'static str, url: Option<&'a str>) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{name}: "), styles::label()),
            match url {
                Some(url) => Span::styled(url, styles::accent()),
                None => Span::styled("-", styles::text_muted()),
            },
        ])
    }

    fn content(&self) -> Vec<Line<'a>> {
        let d = self.detail;
        let r = d.record;
        let epoch = match &d.epoch_display {
            Some(time) => format!("{} ({time})", r.epoch),
            None => r.epoch.clone(),
        };

        let mut lines = vec![
            Line::from(Span::styled(r.title.as_str(), styles::accent_bold())),
            Line::from(""),
            Line::from(
                [
                    Self::field("ID", &r.id),
                    Self::field("Media", &r.media_number),
                    Self::field("Category", &r.category),
                ]
                .concat(),
            ),
            Line::from(Span::styled("Description:", styles::label())),
            Line::from(Span::styled(r.description.as_str(), styles::text_secondary())),
            Line::from(
                [
                    Self::field("Status", &r.status),
                    Self::field("isActive", &r.is_active),
                ]
                .concat(),
            ),
            Line::from(
                [
                    Self::field("RemoteId", &r.remote_id),
                    Self::field("inId", &r.in_id),
                ]
                .concat(),
            ),
            Line::from(
                [
                    Self::field("CreateDate", &r.create_date),
                    Self::field("MediaName", &r.media_name),
                    vec![
                        Span::styled("Epoch: ", styles::label()),
                        Span::styled(epoch, styles::text_primary()),
                    ],
                ]
                .concat(),
            ),
            Line::from(""),
            Self::asset_line("Image", d.image_url.as_deref()),
            Self::asset_line("Icon", d.icon_url.as_deref()),
        ];

        if d.audio_url.is_some() {
            lines.push(Self::asset_line("Audio", d.audio_url.as_deref()));
        }
        lines.push(Line::from(Self::field("AudioSize", &r.audio_size)));
        lines
    }

    fn hints(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("[Esc]", styles::keybinding()),
            Span::styled(" Close  ", styles::text_muted()),
        ];
        if self.detail.audio_url.is_some() {
            spans.push(Span::styled("[a]", styles::keybinding()));
            spans.push(Span::styled(" Play audio  ", styles::text_muted()));
        }
        if self.detail.image_url.is_some() {
            spans.push(Span::styled("[i]", styles::keybinding()));
            spans.push(Span::styled(" Open image", styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for DetailModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = Self::modal_rect(area);
        modal_overlay::render_shadow(buf, modal);
        Clear.render(modal, buf);

        let block = styles::modal_block(" Item Details ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.content())
            .wrap(Wrap { trim: false })
            .render(body, buf);
        Paragraph::new(self.hints()).render(footer, buf);
    }
}
