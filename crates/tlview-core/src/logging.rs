//! File logging for both front ends
//!
//! stdout belongs to the TUI or to the headless JSON report, so every run
//! logs to `<data_local_dir>/tlview/logs/`. Each mode writes its own daily
//! file, so a scripted headless run never interleaves with an interactive
//! session. `TLVIEW_LOG` overrides the filter:
//!
//! ```bash
//! TLVIEW_LOG=debug tlview
//! TLVIEW_LOG=tlview_client=trace tlview --headless
//! ```

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const DEFAULT_FILTER: &str = "tlview=info,warn";

/// Which front end this process runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Tui,
    Headless,
}

impl RunMode {
    fn file_prefix(self) -> &'static str {
        match self {
            RunMode::Tui => "tlview.log",
            RunMode::Headless => "tlview-headless.log",
        }
    }
}

/// Install the global subscriber and record which build is starting.
pub fn init(mode: RunMode, version: &str) -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, mode.file_prefix());
    let filter =
        EnvFilter::try_from_env("TLVIEW_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        version,
        ?mode,
        log_dir = %log_dir.display(),
        "tlview starting"
    );

    Ok(())
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tlview")
        .join("logs")
}
