//! Main update function - handles state transitions (TEA pattern)

use crate::message::{AssetKind, Message};
use crate::state::{AppState, Focus};
use tlview_core::prelude::*;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Start => {
            if state.request_fetch() {
                UpdateResult::action(UpdateAction::FetchTimeline)
            } else {
                debug!("Start received twice, fetch already requested");
                UpdateResult::none()
            }
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View State Reducers
        // ─────────────────────────────────────────────────────────
        Message::SearchChanged(term) => {
            state.set_search_term(&term);
            UpdateResult::none()
        }

        Message::Paginate(page) => {
            state.set_page(page);
            UpdateResult::none()
        }

        Message::SelectRecord(index) => {
            state.select_record(index);
            UpdateResult::none()
        }

        Message::CloseModal => {
            state.close_modal();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Results
        // ─────────────────────────────────────────────────────────
        Message::FetchCompleted(payload) => {
            state.fetch_completed(payload);
            UpdateResult::none()
        }

        Message::FetchFailed(failure) => {
            state.fetch_failed(failure);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Terminal Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusSearch => {
            state.focus = Focus::Search;
            UpdateResult::none()
        }

        Message::FocusTable => {
            state.focus = Focus::Table;
            UpdateResult::none()
        }

        Message::ToggleFocus => {
            state.toggle_focus();
            UpdateResult::none()
        }

        Message::CursorUp => {
            state.cursor_up();
            UpdateResult::none()
        }

        Message::CursorDown => {
            state.cursor_down();
            UpdateResult::none()
        }

        Message::ToggleBodyPanels => {
            state.toggle_body_panels();
            UpdateResult::none()
        }

        Message::OpenAsset(kind) => handle_open_asset(state, kind),
    }
}

fn handle_open_asset(state: &AppState, kind: AssetKind) -> UpdateResult {
    if !state.modal_visible {
        return UpdateResult::none();
    }
    let Some(record) = state.selected_record() else {
        return UpdateResult::none();
    };

    let path = match kind {
        AssetKind::Audio => &record.audio,
        AssetKind::Image => &record.image,
    };

    match state.assets.resolve(path) {
        Some(url) => UpdateResult::action(UpdateAction::OpenAsset { url }),
        None => {
            debug!("Record {} has no {:?} asset", record.id, kind);
            UpdateResult::none()
        }
    }
}
