//! Key event handlers for each focus and overlay

use crate::input_key::InputKey;
use crate::message::{AssetKind, Message};
use crate::state::{AppState, Focus, LoadState};
use tlview_core::PageControl;

/// Convert key events to messages based on current state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.load_state {
        LoadState::Loading { .. } | LoadState::Failed(_) => handle_key_not_ready(key),
        LoadState::Ready if state.modal_visible => handle_key_modal(key),
        LoadState::Ready => match state.focus {
            Focus::Search => handle_key_search(state, key),
            Focus::Table => handle_key_table(state, key),
        },
    }
}

/// Handle key events while loading or after a failed fetch
fn handle_key_not_ready(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while the detail modal is open
fn handle_key_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseModal),
        InputKey::Char('a') => Some(Message::OpenAsset(AssetKind::Audio)),
        InputKey::Char('i') => Some(Message::OpenAsset(AssetKind::Image)),
        _ => None,
    }
}

/// Handle key events while typing in the search input
fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::Down | InputKey::Enter | InputKey::Esc => Some(Message::FocusTable),
        InputKey::Backspace => {
            let mut term = state.search_term.clone();
            term.pop()?;
            Some(Message::SearchChanged(term))
        }
        // Clear the whole term
        InputKey::CharCtrl('u') => {
            if state.search_term.is_empty() {
                None
            } else {
                Some(Message::SearchChanged(String::new()))
            }
        }
        InputKey::Char(c) => {
            let mut term = state.search_term.clone();
            term.push(c);
            Some(Message::SearchChanged(term))
        }
        _ => None,
    }
}

/// Handle key events while the table is focused
fn handle_key_table(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        InputKey::Char('/') => Some(Message::FocusSearch),
        InputKey::Char('b') => Some(Message::ToggleBodyPanels),

        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Enter => {
            if state.cursor < state.page_window().len() {
                Some(Message::SelectRecord(state.cursor))
            } else {
                None
            }
        }

        // Pagination keys only fire when the matching control is rendered
        InputKey::Left | InputKey::Char('h') => rendered_target(state, |c| {
            matches!(c, PageControl::Previous { .. })
        }),
        InputKey::Right | InputKey::Char('l') => {
            rendered_target(state, |c| matches!(c, PageControl::Next { .. }))
        }
        InputKey::Home => rendered_target(state, |c| matches!(c, PageControl::First)),
        InputKey::End => rendered_target(state, |c| matches!(c, PageControl::Last { .. })),
        key => {
            let digit = key.page_digit()?;
            rendered_target(
                state,
                |c| matches!(c, PageControl::Number { page, .. } if *page == digit),
            )
        }
    }
}

fn rendered_target(state: &AppState, pick: impl Fn(&PageControl) -> bool) -> Option<Message> {
    state
        .page_controls()
        .into_iter()
        .find(|c| pick(c))
        .and_then(|c| c.target())
        .map(Message::Paginate)
}
