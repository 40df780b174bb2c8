//! Full configuration validation.
//!
//! Validates numeric ranges, the content address, and shortcut uniqueness.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod geometry;
mod helpers;


use crate::keybinds;
use crate::schema::HoverConfig;
use hover_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HoverConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.shortcuts) {
        errors.push(e.to_string());
    }

    geometry::validate_window(&mut errors, config);
    geometry::validate_animation(&mut errors, config);
    geometry::validate_content(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
