//! Headless mode - JSON view output instead of the TUI
//!
//! Performs the same single fetch as the TUI, applies an optional search
//! term and page through the same reducers, and prints the derived view as
//! one JSON document on stdout.
//!
//! # Example Output
//!
//! ```json
//! {"state":"error","message":"Request failed with status code 500: https://host/feed"}
//! ```
//!
//! # Exit Codes
//!
//! - `0` - the ready view was printed
//! - `1` - the fetch failed; the error view was printed
//! - `2` - the requested page is out of range; nothing was printed to stdout

use std::io::{self, Write};

use tlview_app::actions::fetch_timeline;
use tlview_app::config::Settings;
use tlview_app::{derive_view, update, AppState, Message, UpdateAction};
use tlview_client::TimelineSource;
use tlview_core::prelude::*;

/// What the caller asked to see
#[derive(Debug, Clone, Default)]
pub struct HeadlessRequest {
    pub search: Option<String>,
    pub page: Option<usize>,
}

/// Output of a headless run, before anything is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessReport {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: i32,
}

/// Run a message through `update`, following chained messages. Actions are
/// not executed here.
fn apply(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut msg = Some(message);
    let mut action = None;
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(a) = result.action {
            debug!("Headless: deferred action {:?}", a);
            action = action.or(Some(a));
        }
        msg = result.message;
    }
    action
}

/// Fetch once, apply the request and produce the report.
pub async fn render<S>(
    source: &S,
    settings: Settings,
    request: &HeadlessRequest,
) -> Result<HeadlessReport>
where
    S: TimelineSource + Sync,
{
    let mut state = AppState::new(settings);

    if apply(&mut state, Message::Start) == Some(UpdateAction::FetchTimeline) {
        let outcome = fetch_timeline(source).await;
        apply(&mut state, outcome);
    }

    if !state.is_ready() {
        return Ok(HeadlessReport {
            stdout: Some(serde_json::to_string(&derive_view(&state))?),
            stderr: None,
            exit_code: 1,
        });
    }

    if let Some(term) = &request.search {
        apply(&mut state, Message::SearchChanged(term.clone()));
    }

    if let Some(page) = request.page {
        let total = state.total_pages();
        if page < 1 || page > total {
            warn!("Headless: page {} out of range 1-{}", page, total);
            return Ok(HeadlessReport {
                stdout: None,
                stderr: Some(format!("Page {page} is out of range (1-{total})")),
                exit_code: 2,
            });
        }
        apply(&mut state, Message::Paginate(page));
    }

    Ok(HeadlessReport {
        stdout: Some(serde_json::to_string(&derive_view(&state))?),
        stderr: None,
        exit_code: 0,
    })
}

/// Run headless mode, write the report and return the exit code.
pub async fn run_headless<S>(source: &S, settings: Settings, request: &HeadlessRequest) -> Result<i32>
where
    S: TimelineSource + Sync,
{
    info!("tlview starting in HEADLESS mode");

    let report = render(source, settings, request).await?;

    if let Some(out) = &report.stdout {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", out)?;
        stdout.flush()?;
    }
    if let Some(err) = &report.stderr {
        eprintln!("{}", err);
    }

    info!("Headless run finished with exit code {}", report.exit_code);
    Ok(report.exit_code)
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
                .ok_or_else(|| Error::http("connection refused"))
        }
    }

    fn source(n: usize) -> FixedSource {
        FixedSource(Some(TimelinePayload {
            body: Vec::new(),
            timeline: (1..=n)
                .map(|i| TimelineRecord {
                    id: i.to_string(),
                    title: format!("Show {i}"),
                    ..Default::default()
                })
                .collect(),
        }))
    }

    #[tokio::test]
    async fn test_default_request_prints_first_page() {
        let report = render(&source(25), Settings::default(), &HeadlessRequest::default())
            .await
            .unwrap();

        assert_eq!(report.exit_code, 0);
        let json: serde_json::Value = serde_json::from_str(report.stdout.as_deref().unwrap()).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["rows"].as_array().unwrap().len(), 10);
        assert_eq!(json["total_pages"], 3);
    }

    #[tokio::test]
    async fn test_out_of_range_page_exits_2() {
        let request = HeadlessRequest {
            search: None,
            page: Some(4),
        };
        let report = render(&source(25), Settings::default(), &request).await.unwrap();

        assert_eq!(report.exit_code, 2);
        assert!(report.stdout.is_none());
        assert!(report.stderr.unwrap().contains("1-3"));
    }

    #[tokio::test]
    async fn test_fetch_failure_prints_error_view() {
        let report = render(&FixedSource(None), Settings::default(), &HeadlessRequest::default())
            .await
            .unwrap();

        assert_eq!(report.exit_code, 1);
        let json: serde_json::Value = serde_json::from_str(report.stdout.as_deref().unwrap()).unwrap();
        assert_eq!(json["state"], "error");
        assert_eq!(json["message"], "Network error: connection refused");
    }
}
