//! # tlview-core - Core Domain Types
//!
//! Foundation crate for tlview. Provides the timeline domain types, the
//! search filter, page arithmetic, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TimelinePayload`] - Decoded response of the timeline endpoint
//! - [`TimelineRecord`] - One row of episode metadata
//! - [`BodyRecord`] - A background/about panel
//! - [`Opacity`] - Clamped 0-100 background opacity
//!
//! ### Markup (`html`)
//! - [`TrustedHtml`] - Unsanitized markup trusted from the endpoint
//!
//! ### Filtering (`filter`)
//! - [`filter_indices()`] - Matching record indices in input order
//!
//! ### Pagination (`pagination`)
//! - [`PAGE_SIZE`] - Records per page
//! - [`page_controls()`] - Control bar for a page
//! - [`PageControl`] - One control bar element
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`FetchFailure`] - The user-visible fetch error
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tlview_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod html;
pub mod logging;
pub mod pagination;
pub mod types;

/// Prelude for common imports used throughout all tlview crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, FetchFailure, Result};
pub use filter::{filter_indices, matches, normalize_term};
pub use html::TrustedHtml;
pub use pagination::{
    display_total_pages, page_controls, page_range, total_pages, PageControl, PAGE_SIZE,
};
pub use types::{BodyRecord, Opacity, TimelinePayload, TimelineRecord};
