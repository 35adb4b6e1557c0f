//! Application state (Model in TEA pattern)
//!
//! `AppState` is owned by the event loop and only mutated through the
//! reducer methods below, each called from `handler::update`.

use serde::Serialize;

use crate::config::Settings;
use tlview_client::AssetResolver;
use tlview_core::prelude::*;
use tlview_core::{
    display_total_pages, filter_indices, normalize_term, page_controls, page_range, BodyRecord,
    FetchFailure, PageControl, TimelinePayload, TimelineRecord, PAGE_SIZE,
};

/// Lifecycle of the single fetch. Exactly one of these holds at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch outstanding; the frame counter drives the spinner
    Loading { animation_frame: u64 },
    /// Fetch failed; terminal for the session
    Failed(FetchFailure),
    /// Payload stored
    Ready,
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Loading { animation_frame: 0 }
    }
}

/// Which widget receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    #[default]
    Search,
    Table,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub load_state: LoadState,

    /// Background/about panels, in payload order
    pub body: Vec<BodyRecord>,

    /// Full timeline, immutable once fetched
    pub timeline: Vec<TimelineRecord>,

    /// Indices into `timeline` matching `search_term`, in timeline order
    pub filtered: Vec<usize>,

    /// Lower-cased search term
    pub search_term: String,

    /// 1-based current page
    pub current_page: usize,

    /// Index into `timeline` of the record last opened in the modal
    pub selected: Option<usize>,

    pub modal_visible: bool,

    pub focus: Focus,

    /// Highlighted row within the page window
    pub cursor: usize,

    pub show_body_panels: bool,

    pub settings: Settings,

    pub assets: AssetResolver,

    fetch_requested: bool,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let assets = match AssetResolver::new(&settings.source.asset_base) {
            Ok(resolver) => resolver,
            Err(e) => {
                warn!("Invalid asset base, using default: {}", e);
                AssetResolver::default()
            }
        };

        Self {
            load_state: LoadState::default(),
            body: Vec::new(),
            timeline: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            selected: None,
            modal_visible: false,
            focus: Focus::default(),
            cursor: 0,
            show_body_panels: settings.ui.show_body_panels,
            settings,
            assets,
            fetch_requested: false,
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading { .. })
    }

    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }

    /// Mark the fetch as requested. Returns `false` if it already was.
    pub fn request_fetch(&mut self) -> bool {
        if self.fetch_requested {
            return false;
        }
        self.fetch_requested = true;
        true
    }

    /// Store a successful payload. Ignored unless the fetch is outstanding.
    pub fn fetch_completed(&mut self, payload: TimelinePayload) -> bool {
        if !self.is_loading() {
            warn!("Ignoring fetch completion: fetch already settled");
            return false;
        }

        self.body = payload.body;
        self.timeline = payload.timeline;
        self.filtered = filter_indices(&self.timeline, &self.search_term);
        self.current_page = 1;
        self.cursor = 0;
        self.load_state = LoadState::Ready;
        info!(
            "Timeline ready: {} records, {} panels",
            self.timeline.len(),
            self.body.len()
        );
        true
    }

    /// Store a fetch failure. Ignored unless the fetch is outstanding.
    pub fn fetch_failed(&mut self, failure: FetchFailure) -> bool {
        if !self.is_loading() {
            warn!("Ignoring fetch failure: fetch already settled");
            return false;
        }

        error!("Timeline fetch failed: {}", failure);
        self.load_state = LoadState::Failed(failure);
        true
    }

    pub fn tick(&mut self) {
        if let LoadState::Loading { animation_frame } = &mut self.load_state {
            *animation_frame = animation_frame.wrapping_add(1);
        }
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    // ─────────────────────────────────────────────────────────
    // Search & Pagination
    // ─────────────────────────────────────────────────────────

    /// Replace the search term, refilter and return to page 1.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = normalize_term(term);
        self.filtered = filter_indices(&self.timeline, &self.search_term);
        self.current_page = 1;
        self.cursor = 0;
        debug!(
            "Search '{}' matched {} of {} records",
            self.search_term,
            self.filtered.len(),
            self.timeline.len()
        );
    }

    /// Set the current page. Callers only pass values from rendered
    /// controls; before the payload is ready this is a no-op.
    pub fn set_page(&mut self, page: usize) -> bool {
        if !self.is_ready() {
            debug!("Ignoring page change to {} before data is ready", page);
            return false;
        }
        self.current_page = page;
        self.cursor = 0;
        true
    }

    /// `ceil(|filtered| / PAGE_SIZE)`, at least 1.
    pub fn total_pages(&self) -> usize {
        display_total_pages(self.filtered.len(), PAGE_SIZE)
    }

    /// Timeline indices of the current page window.
    pub fn page_window(&self) -> &[usize] {
        let range = page_range(self.filtered.len(), self.current_page, PAGE_SIZE);
        &self.filtered[range]
    }

    /// Records of the current page window.
    pub fn page_records(&self) -> impl Iterator<Item = &TimelineRecord> + '_ {
        self.page_window().iter().map(|&idx| &self.timeline[idx])
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        page_controls(self.current_page, self.total_pages())
    }

    // ─────────────────────────────────────────────────────────
    // Detail Selection
    // ─────────────────────────────────────────────────────────

    /// Open the modal for row `index` of the page window. Out-of-window
    /// indices are ignored.
    pub fn select_record(&mut self, index: usize) -> bool {
        let Some(&timeline_idx) = self.page_window().get(index) else {
            debug!("Ignoring selection of row {} outside the page window", index);
            return false;
        };
        self.selected = Some(timeline_idx);
        self.modal_visible = true;
        self.cursor = index;
        true
    }

    /// Hide the modal. The selection is kept.
    pub fn close_modal(&mut self) {
        self.modal_visible = false;
    }

    pub fn selected_record(&self) -> Option<&TimelineRecord> {
        self.selected.and_then(|idx| self.timeline.get(idx))
    }

    // ─────────────────────────────────────────────────────────
    // Terminal Navigation
    // ─────────────────────────────────────────────────────────

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.page_window().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Table,
            Focus::Table => Focus::Search,
        };
    }

    pub fn toggle_body_panels(&mut self) {
        self.show_body_panels = !self.show_body_panels;
    }
}
