//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use tlview_app::config::Settings;
use tlview_app::message::Message;
use tlview_app::state::AppState;
use tlview_app::{process, signals};
use tlview_client::TimelineSource;
use tlview_core::prelude::*;

use crate::event::{self, ClickTracker};
use crate::hit_map::HitMap;
use crate::{render, terminal};

/// Run the TUI against a timeline source until the user quits
pub async fn run<S>(settings: Settings, source: Arc<S>) -> Result<()>
where
    S: TimelineSource + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mouse = settings.ui.mouse;
    let mut term = ratatui::init();
    if mouse {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("Failed to enable mouse capture: {}", e);
        }
    }

    let mut state = AppState::new(settings);

    // Unified message channel (fetch results, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    // Kick off the one timeline fetch
    process::process_message(&mut state, Message::Start, &msg_tx, &source);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &source);
    signal_task.abort();

    if mouse {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("Failed to disable mouse capture: {}", e);
        }
    }
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: &Arc<S>,
) -> Result<()>
where
    S: TimelineSource + Sync + 'static,
{
    let mut hits = HitMap::default();
    let mut clicks = ClickTracker::default();

    while !state.should_quit() {
        // Process background messages (fetch result, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, source);
        }

        // Render
        terminal.draw(|frame| hits = render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(&mut clicks, &hits)? {
            process::process_message(state, message, &msg_tx, source);
        }
    }

    info!("Exiting event loop");
    Ok(())
}
