//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use tlview_core::{FetchFailure, TimelinePayload};

/// Asset of the selected record that can be handed to the system opener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Audio,
    Image,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Emitted once by the event loop before the first frame
    Start,

    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View State Reducers
    // ─────────────────────────────────────────────────────────
    /// Replace the search term; refilters and returns to page 1
    SearchChanged(String),
    /// Jump to a page taken from a rendered control
    Paginate(usize),
    /// Open the detail modal for a row of the current page window
    SelectRecord(usize),
    /// Hide the detail modal, keeping the selection
    CloseModal,

    // ─────────────────────────────────────────────────────────
    // Fetch Results
    // ─────────────────────────────────────────────────────────
    FetchCompleted(TimelinePayload),
    FetchFailed(FetchFailure),

    // ─────────────────────────────────────────────────────────
    // Terminal Navigation
    // ─────────────────────────────────────────────────────────
    FocusSearch,
    FocusTable,
    ToggleFocus,
    /// Move the row highlight up within the page window
    CursorUp,
    /// Move the row highlight down within the page window
    CursorDown,
    ToggleBodyPanels,
    /// Open an asset of the selected record with the system opener
    OpenAsset(AssetKind),
}
