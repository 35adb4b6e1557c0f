//! HTTP implementation of [`TimelineSource`]

use tlview_core::prelude::*;
use tlview_core::TimelinePayload;
use url::Url;

use crate::source::TimelineSource;

/// Fetches the payload with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpTimelineSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpTimelineSource {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::invalid_url(url, e.to_string()))?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("tlview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl TimelineSource for HttpTimelineSource {
    async fn fetch(&self) -> Result<TimelinePayload> {
        debug!("Fetching timeline from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Timeline request returned {}", status);
            return Err(Error::http_status(status.as_u16(), self.url.as_str()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let payload: TimelinePayload = serde_json::from_slice(&bytes)?;
        info!(
            "Loaded {} timeline records and {} body panels",
            payload.timeline.len(),
            payload.body.len()
        );
        Ok(payload)
    }
}
