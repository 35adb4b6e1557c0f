//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::{Block, TableState};
use ratatui::Frame;
use tlview_app::{derive_view, AppState, Focus, ReadyView, ViewModel};

use crate::hit_map::HitMap;
use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    AboutPanel, DetailModal, ErrorScreen, KeyHints, LoadingScreen, PaginationBar, SearchInput,
    TimelineTable,
};

/// Render the complete UI (View function in TEA)
///
/// Reads the state only through `derive_view`. Returns the clickable regions
/// of the frame so mouse events can be mapped back to messages.
pub fn view(frame: &mut Frame, state: &AppState) -> HitMap {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    match derive_view(state) {
        ViewModel::Loading {
            message,
            frame: animation_frame,
        } => {
            frame.render_widget(LoadingScreen::new(message, animation_frame), area);
            HitMap::default()
        }
        ViewModel::Error { message } => {
            frame.render_widget(ErrorScreen::new(&message), area);
            HitMap::default()
        }
        ViewModel::Ready(ready) => render_ready(frame, &ready),
    }
}

fn render_ready(frame: &mut Frame, view: &ReadyView<'_>) -> HitMap {
    let area = frame.area();
    let areas = layout::create(area, view.panels.len());

    let columns = layout::panel_columns(areas.panels, view.panels.len());
    for (panel, column) in view.panels.iter().zip(columns) {
        frame.render_widget(AboutPanel::new(panel), column);
    }

    let table_focused = view.focus == Focus::Table;
    frame.render_widget(
        SearchInput::new(view.search_term)
            .focused(!table_focused && view.modal.is_none())
            .total_matches(view.total_matches),
        areas.search,
    );

    let mut table_state = TableState::default();
    if table_focused && !view.rows.is_empty() {
        table_state.select(Some(view.cursor));
    }
    frame.render_stateful_widget(
        TimelineTable::new(&view.rows).focused(table_focused),
        areas.table,
        &mut table_state,
    );

    let bar = PaginationBar::new(&view.controls, view.page, view.total_pages)
        .total_matches(view.total_matches);
    let controls = bar.hit_regions(areas.pagination);
    frame.render_widget(bar, areas.pagination);

    frame.render_widget(KeyHints::new(view.focus), areas.footer);

    if let Some(detail) = &view.modal {
        frame.render_widget(DetailModal::new(detail), area);
        return HitMap {
            modal: Some(DetailModal::modal_rect(area)),
            ..HitMap::default()
        };
    }

    let rows = if view.rows.is_empty() {
        Vec::new()
    } else {
        TimelineTable::row_regions(areas.table, view.rows.len(), table_state.offset())
    };

    HitMap {
        rows,
        controls,
        search: Some(areas.search),
        modal: None,
    }
}
