//! Persist settings changed at runtime (`update-setting`, onboarding).
//!
//! The file is replaced atomically so a crash mid-save never leaves a
//! truncated config behind for the next launch.

use std::path::Path;

use hover_common::ConfigError;

use crate::schema::HoverConfig;
use crate::toml_loader::default_config_path;

/// First line of every file written by the app.
const HEADER: &str = "# Hover settings. Edits made while Hover runs are picked up live.\n\n";

/// Save to the platform default location.
pub fn save_config(config: &HoverConfig) -> Result<(), ConfigError> {
    save_config_to_path(config, &default_config_path()?)
}

/// Save to `path`, creating missing parent directories.
pub fn save_config_to_path(config: &HoverConfig, path: &Path) -> Result<(), ConfigError> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("settings are not representable as TOML: {e}")))?;
    let contents = format!("{HEADER}{body}");

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
    }
    replace_file(path, &contents)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "settings saved");
    Ok(())
}

/// Write a sibling temp file and rename it over `path`. Some platforms
/// refuse to rename over an open file; then the target is written in place.
fn replace_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let staged = path.with_extension("toml.tmp");
    std::fs::write(&staged, contents).map_err(|e| io_error("write", &staged, e))?;

    match std::fs::rename(&staged, path) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::warn!(path = %path.display(), "rename failed ({e}); writing in place");
            let _ = std::fs::remove_file(&staged);
            std::fs::write(path, contents).map_err(|e| io_error("write", path, e))
        }
    }
}

fn io_error(op: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("could not {op} {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn saved_file_loads_back_with_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = HoverConfig::default();
        config.general.onboarding_shown = true;
        config.general.always_on_top = false;
        config.shortcuts.global = false;
        save_config_to_path(&config, &path).unwrap();

        let parsed = crate::toml_loader::load_from_path(&path).unwrap();
        assert!(parsed.general.onboarding_shown);
        assert!(!parsed.general.always_on_top);
        assert!(!parsed.shortcuts.global);
        assert_eq!(parsed.shortcuts, config.shortcuts);
        assert_eq!(parsed.content.url, config.content.url);
    }

    #[test]
    fn saved_file_starts_with_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        save_config_to_path(&HoverConfig::default(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# Hover settings."));
    }

    #[test]
    fn missing_directories_are_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("config.toml");

        save_config_to_path(&HoverConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn no_staging_file_is_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        save_config_to_path(&HoverConfig::default(), &path).unwrap();
        save_config_to_path(&HoverConfig::default(), &path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
