//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use tlview_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "tlview";

/// `<platform config dir>/tlview/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    match default_config_path() {
        Some(path) => load_lenient(&path),
        None => {
            debug!("No platform config directory, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicitly requested file.
///
/// Unlike [`load_settings`], a missing or invalid file is an error: the
/// user asked for this file by name.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))?;
    info!("Loaded settings from {:?}", path);
    Ok(settings)
}

fn load_lenient(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lenient_missing_file_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_lenient(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_lenient_invalid_toml_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_lenient(&path), Settings::default());
    }

    #[test]
    fn test_load_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[source]
url = "http://localhost:8080/feed.json"

[behavior]
opener = "firefox"

[ui]
show_body_panels = false
"#,
        )
        .unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.source.url, "http://localhost:8080/feed.json");
        assert_eq!(settings.behavior.opener, "firefox");
        assert!(!settings.ui.show_body_panels);
        assert!(settings.ui.mouse);

        assert_eq!(load_lenient(&path), settings);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = tempdir().unwrap();
        let err = load_settings_from(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_explicit_invalid_file_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nmouse = \"sometimes\"").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("tlview/config.toml"));
        }
    }
}
