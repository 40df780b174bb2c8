//! Hover configuration system.
//!
//! Provides TOML-based settings with live reload, validation, and the
//! `update-setting` key mapping used by the settings page. All config
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hover_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod reload;
pub mod schema;
pub mod settings;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{HoverConfig, CONFIG_SCHEMA_VERSION};
pub use settings::{apply_update, reset_settings, settings_snapshot, SettingChange};
pub use toml_writer::{save_config, save_config_to_path};
pub use watcher::ConfigWatcher;

use hover_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<HoverConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HoverConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = HoverConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"general\""));
        assert!(json.contains("\"shortcuts\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"animation\""));
        assert!(json.contains("\"content\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = HoverConfig::default();
        let json = config_to_json(&config);
        let parsed: HoverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.window.canvas_width, 1400);
        assert_eq!(parsed.shortcuts, config.shortcuts);
    }
}
