//! Action handlers: UpdateAction dispatch and background task spawning

use std::process::Command;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::message::Message;
use crate::UpdateAction;
use tlview_client::TimelineSource;
use tlview_core::prelude::*;
use tlview_core::FetchFailure;

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    source: &Arc<S>,
    opener: &str,
) where
    S: TimelineSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchTimeline => {
            spawn_fetch_timeline(Arc::clone(source), msg_tx);
        }

        UpdateAction::OpenAsset { url } => {
            let opener = opener.to_string();
            tokio::spawn(async move {
                if let Err(e) = open_url(&url, &opener) {
                    error!("Failed to open {}: {}", url, e);
                }
            });
        }
    }
}

/// Spawn the single timeline fetch; the result comes back as a message.
pub fn spawn_fetch_timeline<S>(source: Arc<S>, msg_tx: mpsc::Sender<Message>)
where
    S: TimelineSource + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = fetch_timeline(source.as_ref()).await;
        if msg_tx.send(msg).await.is_err() {
            debug!("Fetch finished after the event loop exited");
        }
    });
}

/// Run the fetch and turn its outcome into the matching message.
pub async fn fetch_timeline<S>(source: &S) -> Message
where
    S: TimelineSource + Sync,
{
    let started = Instant::now();
    info!("Fetching timeline");

    match source.fetch().await {
        Ok(payload) => {
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Fetched {} timeline records",
                payload.timeline.len()
            );
            Message::FetchCompleted(payload)
        }
        Err(e) => {
            warn!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Timeline fetch failed: {}", e
            );
            Message::FetchFailed(FetchFailure::from(&e))
        }
    }
}

/// Open `url` with `opener`, or the platform default when it is empty.
pub fn open_url(url: &str, opener: &str) -> std::io::Result<()> {
    if !opener.is_empty() {
        Command::new(opener).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlview_core::{Error, TimelinePayload, TimelineRecord};

    struct FixedSource(Option<TimelinePayload>);

    impl TimelineSource for FixedSource {
        async fn fetch(&self) -> tlview_core::Result<TimelinePayload> {
            self.0
                .clone()
                .ok_or_else(|| Error::http_status(503, "http://test/feed"))
        }
    }

    #[tokio::test]
    async fn test_fetch_timeline_success_message() {
        let source = FixedSource(Some(TimelinePayload {
            body: Vec::new(),
            timeline: vec![TimelineRecord::default(); 3],
        }));

        match fetch_timeline(&source).await {
            Message::FetchCompleted(payload) => assert_eq!(payload.timeline.len(), 3),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeline_failure_message() {
        let source = FixedSource(None);
        match fetch_timeline(&source).await {
            Message::FetchFailed(failure) => {
                assert!(failure.message.contains("503"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spawned_fetch_reports_over_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        let source = Arc::new(FixedSource(Some(TimelinePayload::default())));

        handle_action(UpdateAction::FetchTimeline, tx, &source, "");

        let msg = rx.recv().await.expect("fetch result");
        assert!(matches!(msg, Message::FetchCompleted(_)));
    }

    #[test]
    fn test_open_url_with_missing_opener_fails() {
        let result = open_url("https://example.com", "tlview-no-such-opener-binary");
        assert!(result.is_err());
    }
}
