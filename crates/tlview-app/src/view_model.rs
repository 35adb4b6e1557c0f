//! Pure projection of `AppState` into what the view shows
//!
//! `derive_view` is the only thing renderers and headless output read. It
//! borrows records from the state instead of cloning them.

use serde::Serialize;

use crate::state::{AppState, Focus, LoadState};
use tlview_core::{BodyRecord, Opacity, PageControl, TimelineRecord};

/// Shown while the fetch is outstanding
pub const LOADING_MESSAGE: &str = "Please wait as we load the appropriate data";

/// Everything the view needs for one frame. Exactly one state holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewModel<'a> {
    Loading { message: &'static str, frame: u64 },
    Error { message: String },
    Ready(ReadyView<'a>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadyView<'a> {
    /// Empty when panels are hidden
    pub panels: Vec<PanelView<'a>>,
    pub search_term: &'a str,
    pub focus: Focus,
    /// The current page window
    pub rows: Vec<RowView<'a>>,
    pub page: usize,
    /// At least 1, even for an empty result
    pub total_pages: usize,
    pub controls: Vec<PageControl>,
    pub cursor: usize,
    pub total_matches: usize,
    pub modal: Option<DetailView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView<'a> {
    pub id: &'a str,
    pub background_url: Option<String>,
    pub opacity: Opacity,
    pub about_html: &'a str,
    pub about_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView<'a> {
    /// Position within the page window, as passed to `SelectRecord`
    pub index: usize,
    pub record: &'a TimelineRecord,
    pub image_url: Option<String>,
    pub icon_url: Option<String>,
    /// Present only when the record has audio
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView<'a> {
    pub record: &'a TimelineRecord,
    pub image_url: Option<String>,
    pub icon_url: Option<String>,
    pub audio_url: Option<String>,
    pub epoch_display: Option<String>,
}

/// Project the state into a view model.
pub fn derive_view(state: &AppState) -> ViewModel<'_> {
    match &state.load_state {
        LoadState::Loading { animation_frame } => ViewModel::Loading {
            message: LOADING_MESSAGE,
            frame: *animation_frame,
        },
        LoadState::Failed(failure) => ViewModel::Error {
            message: failure.message.clone(),
        },
        LoadState::Ready => ViewModel::Ready(ready_view(state)),
    }
}

fn ready_view(state: &AppState) -> ReadyView<'_> {
    let panels = if state.show_body_panels {
        state.body.iter().map(|b| panel_view(state, b)).collect()
    } else {
        Vec::new()
    };

    let rows = state
        .page_records()
        .enumerate()
        .map(|(index, record)| RowView {
            index,
            record,
            image_url: state.assets.resolve(&record.image),
            icon_url: state.assets.resolve(&record.icon),
            audio_url: state.assets.resolve(&record.audio),
        })
        .collect();

    let modal = state
        .modal_visible
        .then(|| state.selected_record())
        .flatten()
        .map(|record| DetailView {
            record,
            image_url: state.assets.resolve(&record.image),
            icon_url: state.assets.resolve(&record.icon),
            audio_url: state.assets.resolve(&record.audio),
            epoch_display: record.epoch_display(),
        });

    ReadyView {
        panels,
        search_term: &state.search_term,
        focus: state.focus,
        rows,
        page: state.current_page,
        total_pages: state.total_pages(),
        controls: state.page_controls(),
        cursor: state.cursor,
        total_matches: state.filtered.len(),
        modal,
    }
}

fn panel_view<'a>(state: &AppState, body: &'a BodyRecord) -> PanelView<'a> {
    PanelView {
        id: &body.id,
        background_url: state.assets.resolve(&body.background),
        opacity: body.background_opacity,
        about_html: body.about.as_str(),
        about_text: body.about.to_plain_text(),
    }
}
