//! # tlview-client - Timeline Endpoint Client
//!
//! Fetches the timeline payload over HTTP and resolves relative asset paths
//! against the asset host.
//!
//! ## Public API
//!
//! - [`TimelineSource`] - Async trait for anything that can produce a payload
//! - [`HttpTimelineSource`] - `reqwest`-backed implementation
//! - [`AssetResolver`] - Maps relative `Image`/`Icon`/`Audio`/`Background`
//!   paths to absolute URLs

pub mod assets;
pub mod http;
pub mod source;

pub use assets::AssetResolver;
pub use http::HttpTimelineSource;
pub use source::{LocalTimelineSource, TimelineSource};

/// Endpoint serving the timeline payload
pub const DEFAULT_TIMELINE_URL: &str = "https://arthurfrost.qflo.co.za/php/getTimeline.php";

/// Host that relative asset paths are resolved against
pub const DEFAULT_ASSET_BASE: &str = "https://arthurfrost.qflo.co.za/";
