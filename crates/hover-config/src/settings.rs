//! Live `update-setting` handling.
//!
//! The settings page addresses values by flat keys (`alwaysOnTop`,
//! `shortcuts.search`, ...). This module maps those keys onto
//! [`HoverConfig`] and reports which part of the running session must be
//! re-applied.

use hover_common::{Action, ConfigError};
use serde_json::{json, Value};

use crate::schema::{HoverConfig, ThemePreference};

/// Part of the session affected by a settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingChange {
    AlwaysOnTop,
    Shortcuts,
    CanvasResize,
    Theme,
    Onboarding,
    /// Launch at login was switched on or off.
    AutoStart,
}

/// Apply one `update-setting` message to the config.
///
/// Values of the wrong type are rejected without touching the config.
pub fn apply_update(
    config: &mut HoverConfig,
    key: &str,
    value: &Value,
) -> Result<SettingChange, ConfigError> {
    if let Some(action_name) = key.strip_prefix("shortcuts.") {
        let action: Action = action_name
            .parse()
            .map_err(|_| ConfigError::UnknownSetting(key.to_string()))?;
        let accelerator = expect_str(key, value)?;
        config.shortcuts.set_binding(action, accelerator.trim());
        return Ok(SettingChange::Shortcuts);
    }

    match key {
        "alwaysOnTop" => {
            config.general.always_on_top = expect_bool(key, value)?;
            Ok(SettingChange::AlwaysOnTop)
        }
        "shortcutsGlobal" => {
            config.shortcuts.global = expect_bool(key, value)?;
            Ok(SettingChange::Shortcuts)
        }
        "enableCanvasResizing" => {
            config.general.canvas_resize_enabled = expect_bool(key, value)?;
            Ok(SettingChange::CanvasResize)
        }
        "autoStart" => {
            config.general.auto_start = expect_bool(key, value)?;
            Ok(SettingChange::AutoStart)
        }
        "onboardingShown" => {
            config.general.onboarding_shown = expect_bool(key, value)?;
            Ok(SettingChange::Onboarding)
        }
        "theme" => {
            config.general.theme = match expect_str(key, value)? {
                "system" => ThemePreference::System,
                "light" => ThemePreference::Light,
                "dark" => ThemePreference::Dark,
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "theme must be system, light or dark, got {other:?}"
                    )))
                }
            };
            Ok(SettingChange::Theme)
        }
        _ => Err(ConfigError::UnknownSetting(key.to_string())),
    }
}

/// Everything that differs between two configs, in a stable order.
///
/// Used when a reload replaces the whole config at once.
pub fn diff(old: &HoverConfig, new: &HoverConfig) -> Vec<SettingChange> {
    let mut changes = Vec::new();
    if old.general.always_on_top != new.general.always_on_top {
        changes.push(SettingChange::AlwaysOnTop);
    }
    if old.shortcuts != new.shortcuts {
        changes.push(SettingChange::Shortcuts);
    }
    if old.general.canvas_resize_enabled != new.general.canvas_resize_enabled {
        changes.push(SettingChange::CanvasResize);
    }
    if old.general.theme != new.general.theme {
        changes.push(SettingChange::Theme);
    }
    if old.general.onboarding_shown != new.general.onboarding_shown {
        changes.push(SettingChange::Onboarding);
    }
    if old.general.auto_start != new.general.auto_start {
        changes.push(SettingChange::AutoStart);
    }
    changes
}

/// `config` with every user-facing setting back at its default.
///
/// Only the sections the settings page edits are reset; window geometry,
/// animation, content and logging stay as configured.
pub fn reset_settings(config: &HoverConfig) -> HoverConfig {
    let defaults = HoverConfig::default();
    HoverConfig {
        general: defaults.general,
        shortcuts: defaults.shortcuts,
        ..config.clone()
    }
}

/// The settings object sent to pages in `settings-updated` and in answer to
/// `get-settings`, keyed the same way `update-setting` addresses values.
pub fn settings_snapshot(config: &HoverConfig) -> Value {
    let shortcuts: serde_json::Map<String, Value> = config
        .shortcuts
        .bindings()
        .into_iter()
        .map(|(action, accel)| (action.config_name().to_string(), Value::from(accel)))
        .collect();

    json!({
        "alwaysOnTop": config.general.always_on_top,
        "shortcutsGlobal": config.shortcuts.global,
        "enableCanvasResizing": config.general.canvas_resize_enabled,
        "onboardingShown": config.general.onboarding_shown,
        "autoStart": config.general.auto_start,
        "theme": config.general.theme.as_str(),
        "shortcuts": shortcuts,
    })
}

fn expect_bool(key: &str, value: &Value) -> Result<bool, ConfigError> {
    value
        .as_bool()
        .ok_or_else(|| ConfigError::ValidationError(format!("{key} expects a boolean, got {value}")))
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, ConfigError> {
    value
        .as_str()
        .ok_or_else(|| ConfigError::ValidationError(format!("{key} expects a string, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_on_top_update() {
        let mut config = HoverConfig::default();
        let change = apply_update(&mut config, "alwaysOnTop", &json!(false)).unwrap();
        assert_eq!(change, SettingChange::AlwaysOnTop);
        assert!(!config.general.always_on_top);
    }

    #[test]
    fn shortcut_binding_update() {
        let mut config = HoverConfig::default();
        let change = apply_update(&mut config, "shortcuts.search", &json!(" Alt+K ")).unwrap();
        assert_eq!(change, SettingChange::Shortcuts);
        assert_eq!(config.shortcuts.search, "Alt+K");
    }

    #[test]
    fn shortcut_scope_update() {
        let mut config = HoverConfig::default();
        let change = apply_update(&mut config, "shortcutsGlobal", &json!(false)).unwrap();
        assert_eq!(change, SettingChange::Shortcuts);
        assert!(!config.shortcuts.global);
    }

    #[test]
    fn canvas_and_theme_updates() {
        let mut config = HoverConfig::default();
        assert_eq!(
            apply_update(&mut config, "enableCanvasResizing", &json!(false)).unwrap(),
            SettingChange::CanvasResize
        );
        assert!(!config.general.canvas_resize_enabled);

        assert_eq!(
            apply_update(&mut config, "theme", &json!("light")).unwrap(),
            SettingChange::Theme
        );
        assert_eq!(config.general.theme, ThemePreference::Light);
    }

    #[test]
    fn auto_start_update() {
        let mut config = HoverConfig::default();
        assert!(!config.general.auto_start);
        let change = apply_update(&mut config, "autoStart", &json!(true)).unwrap();
        assert_eq!(change, SettingChange::AutoStart);
        assert!(config.general.auto_start);
        assert_eq!(settings_snapshot(&config)["autoStart"], true);
    }

    #[test]
    fn reset_restores_page_settings_only() {
        let mut config = HoverConfig::default();
        config.general.always_on_top = false;
        config.general.auto_start = true;
        config.general.onboarding_shown = true;
        config.shortcuts.search = "Alt+K".into();
        config.window.canvas_width = 1200;
        config.content.url = "https://example.com/".into();

        let reset = reset_settings(&config);
        assert!(reset.general.always_on_top);
        assert!(!reset.general.auto_start);
        assert!(!reset.general.onboarding_shown);
        assert_eq!(reset.shortcuts, HoverConfig::default().shortcuts);
        assert_eq!(reset.window.canvas_width, 1200);
        assert_eq!(reset.content.url, "https://example.com/");
        assert_eq!(
            diff(&config, &reset),
            vec![
                SettingChange::AlwaysOnTop,
                SettingChange::Shortcuts,
                SettingChange::Onboarding,
                SettingChange::AutoStart
            ]
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut config = HoverConfig::default();
        let err = apply_update(&mut config, "autoCheckNotifications", &json!(true)).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSetting(ref k) if k == "autoCheckNotifications"));

        let err = apply_update(&mut config, "shortcuts.launchRocket", &json!("Alt+L")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSetting(_)));
    }

    #[test]
    fn wrong_type_leaves_config_untouched() {
        let mut config = HoverConfig::default();
        assert!(apply_update(&mut config, "alwaysOnTop", &json!("yes")).is_err());
        assert!(config.general.always_on_top);

        assert!(apply_update(&mut config, "theme", &json!("sepia")).is_err());
        assert_eq!(config.general.theme, ThemePreference::System);
    }

    #[test]
    fn diff_reports_each_changed_section() {
        let old = HoverConfig::default();
        assert!(diff(&old, &old.clone()).is_empty());

        let mut new = old.clone();
        new.general.always_on_top = false;
        new.shortcuts.global = false;
        new.general.theme = ThemePreference::Dark;
        assert_eq!(
            diff(&old, &new),
            vec![
                SettingChange::AlwaysOnTop,
                SettingChange::Shortcuts,
                SettingChange::Theme
            ]
        );
    }

    #[test]
    fn snapshot_uses_update_keys() {
        let config = HoverConfig::default();
        let snapshot = settings_snapshot(&config);
        assert_eq!(snapshot["alwaysOnTop"], true);
        assert_eq!(snapshot["shortcutsGlobal"], true);
        assert_eq!(snapshot["enableCanvasResizing"], true);
        assert_eq!(snapshot["theme"], "system");
        assert_eq!(snapshot["shortcuts"]["showHide"], config.shortcuts.show_hide.as_str());
        assert_eq!(snapshot["shortcuts"].as_object().unwrap().len(), 10);
    }
}
