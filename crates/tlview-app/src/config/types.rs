//! Configuration types for tlview
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `SourceSettings` - Endpoint and asset host
//! - `BehaviorSettings` - External opener
//! - `UiSettings` - Terminal presentation toggles

use serde::{Deserialize, Serialize};
use tlview_client::{DEFAULT_ASSET_BASE, DEFAULT_TIMELINE_URL};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the timeline and its assets come from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Timeline endpoint
    #[serde(default = "default_url")]
    pub url: String,

    /// Host that relative asset paths are resolved against
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            asset_base: default_asset_base(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_TIMELINE_URL.to_string()
}

fn default_asset_base() -> String {
    DEFAULT_ASSET_BASE.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Command used to open asset URLs. Empty uses the platform default.
    #[serde(default)]
    pub opener: String,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the background/about panels above the table
    #[serde(default = "default_true")]
    pub show_body_panels: bool,

    /// Capture mouse events (double-click rows, click page controls)
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_body_panels: true,
            mouse: true,
        }
    }
}

fn default_true() -> bool {
    true
}
