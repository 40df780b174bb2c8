//! Configuration schema types for Hover.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the application ships with.

mod animation;
mod content;
mod general;
mod shortcuts;
mod system;
mod window;

pub use animation::*;
pub use content::*;
pub use general::*;
pub use shortcuts::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Hover.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HoverConfig {
    pub general: GeneralConfig,
    pub shortcuts: ShortcutConfig,
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hover_common::Action;

    #[test]
    fn default_config_has_correct_general() {
        let config = HoverConfig::default();
        assert!(config.general.always_on_top);
        assert!(config.general.canvas_resize_enabled);
        assert_eq!(config.general.theme, ThemePreference::System);
        assert!(!config.general.onboarding_shown);
    }

    #[test]
    fn default_config_has_correct_animation() {
        let config = HoverConfig::default();
        assert_eq!(config.animation.duration_ms, 200);
        assert_eq!(config.animation.steps, 20);
        assert_eq!(config.animation.scroll_restore_delay_ms, 100);
        assert_eq!(config.animation.recenter_delay_ms, 10);
    }

    #[test]
    fn default_config_has_correct_content() {
        let config = HoverConfig::default();
        assert_eq!(config.content.url, "https://gemini.google.com/app");
        assert_eq!(config.content.partition, "gemini-session");
        assert!(config.content.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn default_shortcuts_are_global() {
        let config = HoverConfig::default();
        assert!(config.shortcuts.global);
        if cfg!(target_os = "macos") {
            assert_eq!(config.shortcuts.show_hide, "Command+G");
            assert_eq!(config.shortcuts.screenshot, "Command+Alt+S");
        } else {
            assert_eq!(config.shortcuts.show_hide, "Alt+G");
            assert_eq!(config.shortcuts.quit, "Control+W");
            assert_eq!(config.shortcuts.close_window, "Alt+Q");
        }
    }

    #[test]
    fn shortcut_binding_lookup_covers_every_action() {
        let shortcuts = ShortcutConfig::default();
        let bindings = shortcuts.bindings();
        assert_eq!(bindings.len(), Action::ALL.len());
        for (action, accel) in bindings {
            assert_eq!(shortcuts.binding(action), accel);
            assert!(!accel.is_empty());
        }
    }

    #[test]
    fn set_binding_replaces_one_entry() {
        let mut shortcuts = ShortcutConfig::default();
        let before_quit = shortcuts.quit.clone();
        shortcuts.set_binding(Action::Refresh, "Alt+F5");
        assert_eq!(shortcuts.refresh, "Alt+F5");
        assert_eq!(shortcuts.binding(Action::Refresh), "Alt+F5");
        assert_eq!(shortcuts.quit, before_quit);
    }

    #[test]
    fn theme_preference_from_toml() {
        let config: HoverConfig = toml::from_str(
            r#"
[general]
theme = "dark"
always_on_top = false
"#,
        )
        .unwrap();
        assert_eq!(config.general.theme, ThemePreference::Dark);
        assert!(!config.general.always_on_top);
        assert!(config.general.canvas_resize_enabled);
    }

    #[test]
    fn log_level_filters() {
        assert_eq!(LogLevel::Warning.as_filter(), "warn");
        assert_eq!(LogLevel::default().as_filter(), "info");
    }

    #[test]
    fn empty_toml_is_default() {
        let config: HoverConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.canvas_width, 1400);
        assert_eq!(config.shortcuts, ShortcutConfig::default());
    }
}
