//! Timeline source abstraction

use tlview_core::{Result, TimelinePayload};

/// Produces the timeline payload.
///
/// The viewer performs exactly one fetch per run; implementations do not
/// retry and do not time out.
#[trait_variant::make(TimelineSource: Send)]
pub trait LocalTimelineSource {
    /// Fetch and decode the full payload
    async fn fetch(&self) -> Result<TimelinePayload>;
}
