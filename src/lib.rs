//! tlview Library
//!
//! A terminal viewer for a remote media timeline. The binary parses the
//! command line and hands off to [`app::run`] or [`headless::run_headless`].

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::run;
pub use headless::run_headless;
