//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_hover_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, hover_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[general]
always_on_top = false

[shortcuts]
global = false
search = "Alt+K"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(!config.general.always_on_top);
    assert!(!config.shortcuts.global);
    assert_eq!(config.shortcuts.search, "Alt+K");
    // Defaults preserved
    assert!(config.general.canvas_resize_enabled);
    assert_eq!(config.window.canvas_width, 1400);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, hover_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_keeps_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[animation]
steps = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.animation.steps, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hover").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!(config.general.always_on_top);
    assert_eq!(config.window.margin, 20);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::HoverConfig;

    let content = default_config_toml();
    let config: HoverConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.animation.steps, 20);
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("hover"));
        assert!(path_str.ends_with("config.toml"));
    }
}
