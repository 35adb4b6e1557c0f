//! tlview-tui - Terminal UI for tlview
//!
//! This crate provides the ratatui-based terminal interface: it drives the
//! `tlview-app` state machine from terminal events and draws each frame from
//! the derived view model.

pub mod event;
pub mod hit_map;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
