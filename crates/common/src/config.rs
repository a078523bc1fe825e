//! Filter configuration.
//!
//! The host property system owns how these values are edited; this
//! module only defines the on-disk shape and defaults. All area
//! dimensions are physical millimeters on the digitizer surface.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for one filter instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    /// The physical area reports must fall inside.
    pub area: AreaConfig,

    /// Touch modality settings.
    pub touch: TouchConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// The user-defined area, centered at `(center_x_mm, center_y_mm)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Width of the area (mm).
    pub width_mm: f32,

    /// Height of the area (mm).
    pub height_mm: f32,

    /// Center position on the X axis (mm).
    pub center_x_mm: f32,

    /// Center position on the Y axis (mm).
    pub center_y_mm: f32,
}

/// Touch subsystem settings.
///
/// The touch sensor usually reports a different logical range than the
/// pen on the same physical surface, and that range is not exposed by
/// the digitizer specification, so the maxima are user-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouchConfig {
    /// Whether touch reports are filtered at all.
    pub enabled: bool,

    /// Maximum logical value of the touch X axis.
    pub max_x: f32,

    /// Maximum logical value of the touch Y axis.
    pub max_y: f32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "relarea=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            width_mm: 1.0,
            height_mm: 1.0,
            center_x_mm: 0.0,
            center_y_mm: 0.0,
        }
    }
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_x: 4095.0,
            max_y: 4095.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl FilterConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("relarea").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_plugin_properties() {
        let config = FilterConfig::default();
        assert_eq!(config.area.width_mm, 1.0);
        assert_eq!(config.area.height_mm, 1.0);
        assert_eq!(config.area.center_x_mm, 0.0);
        assert_eq!(config.area.center_y_mm, 0.0);
        assert!(!config.touch.enabled);
        assert_eq!(config.touch.max_x, 4095.0);
        assert_eq!(config.touch.max_y, 4095.0);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = FilterConfig::default();
        config.area.width_mm = 30.0;
        config.touch.enabled = true;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FilterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.area.width_mm, 30.0);
        assert!(parsed.touch.enabled);
    }

    #[test]
    fn test_load_and_save_through_config_dir() {
        // One test owns XDG_CONFIG_HOME end to end; splitting these
        // cases up would race on the process-global environment.
        let dir = std::env::temp_dir().join(format!("relarea-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::env::set_var("XDG_CONFIG_HOME", &dir);

        // No file yet: defaults.
        let config = FilterConfig::load();
        assert_eq!(config.area.width_mm, 1.0);

        // Malformed file: warn and fall back to defaults.
        let path = dir.join("relarea").join("config.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        let config = FilterConfig::load();
        assert_eq!(config.area.width_mm, 1.0);
        assert!(!config.touch.enabled);

        // save() then load() returns what was saved.
        let mut config = FilterConfig::default();
        config.area.width_mm = 25.0;
        config.area.center_x_mm = 50.0;
        config.touch.enabled = true;
        config.save().unwrap();

        let loaded = FilterConfig::load();
        assert_eq!(loaded.area.width_mm, 25.0);
        assert_eq!(loaded.area.center_x_mm, 50.0);
        assert!(loaded.touch.enabled);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_config_rejected_cleanly() {
        // Older config files missing whole sections should fail to
        // parse (load() then falls back to defaults) rather than panic.
        let result = serde_json::from_str::<FilterConfig>(r#"{"area":{}}"#);
        assert!(result.is_err());
    }
}
