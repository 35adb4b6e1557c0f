//! Application entry point for the interactive TUI

use std::sync::Arc;

use tlview_app::config::Settings;
use tlview_client::HttpTimelineSource;
use tlview_core::prelude::*;

/// Run the TUI against the configured endpoint.
///
/// Logging and error reporting must already be initialized.
pub async fn run(settings: Settings) -> Result<()> {
    info!("Timeline endpoint: {}", settings.source.url);
    info!("Asset base: {}", settings.source.asset_base);

    let source = Arc::new(HttpTimelineSource::new(&settings.source.url)?);

    let result = tlview_tui::run(settings, source).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("tlview exiting");
    result
}
