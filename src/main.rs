//! tlview - A terminal viewer for a remote media timeline
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use tlview::headless::HeadlessRequest;
use tlview_app::config::{load_settings, load_settings_from};
use tlview_client::HttpTimelineSource;
use tlview_core::logging::{self, RunMode};
use tlview_core::prelude::*;

/// tlview - A terminal viewer for a remote media timeline
#[derive(Parser, Debug)]
#[command(name = "tlview")]
#[command(about = "Search and page through a remote media timeline", long_about = None)]
struct Args {
    /// Timeline endpoint (overrides the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Search term to apply before printing (headless only)
    #[arg(long, requires = "headless")]
    search: Option<String>,

    /// Page to print (headless only)
    #[arg(long, requires = "headless")]
    page: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let mode = if args.headless {
        RunMode::Headless
    } else {
        RunMode::Tui
    };
    logging::init(mode, env!("CARGO_PKG_VERSION"))?;

    let mut settings = match &args.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings(),
    };
    if let Some(url) = args.url {
        settings.source.url = url;
    }

    if args.headless {
        let source = HttpTimelineSource::new(&settings.source.url)?;
        let request = HeadlessRequest {
            search: args.search,
            page: args.page,
        };
        let code = tlview::run_headless(&source, settings, &request).await?;
        if code != 0 {
            std::process::exit(code);
        }
        return Ok(());
    }

    tlview::run(settings).await
}
