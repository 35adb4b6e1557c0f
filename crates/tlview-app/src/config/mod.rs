//! Configuration file parsing for tlview
//!
//! Settings live in `<config dir>/tlview/config.toml` unless a path is
//! given explicitly on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from};
pub use types::*;
