//! tlview-app - Application state and orchestration for tlview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `Message`s go through `handler::update`, which mutates
//! `AppState` and returns `UpdateAction`s for the event loop to run.
//! `view_model::derive_view` projects the state for any renderer.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod view_model;

// Re-export primary types
pub use handler::{handle_key, update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{AssetKind, Message};
pub use state::{AppState, Focus, LoadState};
pub use view_model::{derive_view, DetailView, PanelView, ReadyView, RowView, ViewModel};
