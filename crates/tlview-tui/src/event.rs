//! Terminal event polling

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tlview_app::message::Message;
use tlview_app::InputKey;
use tlview_core::prelude::*;

use crate::hit_map::{HitMap, HitTarget};

/// Two presses on the same cell within this window count as a double-click
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Tracks the previous left press to recognise double-clicks
#[derive(Debug, Default)]
pub struct ClickTracker {
    last: Option<(u16, u16, Instant)>,
}

impl ClickTracker {
    /// Record a press; true when it completes a double-click.
    pub fn register(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let double = matches!(
            self.last,
            Some((c, r, at)) if c == column && r == row && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        self.last = if double {
            None
        } else {
            Some((column, row, now))
        };
        double
    }
}

/// Translate a mouse event into a message using the last frame's regions.
pub fn mouse_to_message(
    mouse: MouseEvent,
    tracker: &mut ClickTracker,
    hits: &HitMap,
    now: Instant,
) -> Option<Message> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let double = tracker.register(mouse.column, mouse.row, now);
    match hits.target_at(mouse.column, mouse.row)? {
        HitTarget::Row(index) if double => Some(Message::SelectRecord(index)),
        HitTarget::Row(_) => None,
        HitTarget::Control(page) => Some(Message::Paginate(page)),
        HitTarget::Search => Some(Message::FocusSearch),
        HitTarget::Backdrop => Some(Message::CloseModal),
    }
}

/// Poll for terminal events with timeout
pub fn poll(tracker: &mut ClickTracker, hits: &HitMap) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            Event::Mouse(mouse) => Ok(mouse_to_message(mouse, tracker, hits, Instant::now())),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}
