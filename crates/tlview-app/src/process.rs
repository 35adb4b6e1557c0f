//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages and hands any resulting action to `handle_action`.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use tlview_client::TimelineSource;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
) where
    S: TimelineSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                source,
                &state.settings.behavior.opener,
            );
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
