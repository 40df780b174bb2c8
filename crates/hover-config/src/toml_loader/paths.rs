//! Where the config file lives, and writing the commented first-run file.

use hover_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// `<config_dir>/hover/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("hover").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the documented template to `path`. Every setting in it is
/// commented out, so the file loads as the defaults.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let failed = |what: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("first-run config at {}: {e}", what.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| failed(dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| failed(path, e))?;

    info!(path = %path.display(), "wrote first-run config");
    Ok(())
}
