//! Shortcut table validation utilities.

use crate::schema::ShortcutConfig;
use hover_common::ConfigError;
use std::collections::HashMap;

/// Returns all shortcuts as `(action name, accelerator)` pairs.
pub fn all_shortcuts(config: &ShortcutConfig) -> Vec<(&'static str, &str)> {
    config
        .bindings()
        .into_iter()
        .map(|(action, accel)| (action.config_name(), accel))
        .collect()
}

/// Validate that no two actions are mapped to the same accelerator.
///
/// Comparison ignores case and whitespace, so `"alt+g"` collides with
/// `"Alt + G"`.
pub fn validate_no_duplicates(config: &ShortcutConfig) -> Result<(), ConfigError> {
    let binds = all_shortcuts(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in &binds {
        let key: String = binding
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate shortcut '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shortcuts_have_no_duplicates() {
        let config = ShortcutConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_shortcuts_returns_10_entries() {
        let config = ShortcutConfig::default();
        assert_eq!(all_shortcuts(&config).len(), 10);
    }

    #[test]
    fn detects_duplicate_shortcuts() {
        let config = ShortcutConfig {
            search: "Alt+G".into(),
            show_hide: "Alt+G".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate shortcut"));
        assert!(err.contains("showHide"));
        assert!(err.contains("search"));
    }

    #[test]
    fn duplicate_detection_ignores_case_and_spaces() {
        let config = ShortcutConfig {
            show_hide: "Alt+G".into(),
            refresh: "alt + g".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn all_shortcuts_uses_action_names() {
        let config = ShortcutConfig::default();
        let names: Vec<&str> = all_shortcuts(&config).iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"showHide"));
        assert!(names.contains(&"newChatPro"));
        assert!(names.contains(&"closeWindow"));
    }
}
