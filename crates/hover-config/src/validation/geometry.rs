//! Window geometry and animation validation.

use crate::schema::HoverConfig;

use super::helpers::validate_range;

/// Validate window sizes, margins, and the chrome band.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &HoverConfig) {
    let window = &config.window;
    validate_range(errors, "window.default_width", window.default_width, 200, 4000);
    validate_range(errors, "window.default_height", window.default_height, 200, 4000);
    validate_range(errors, "window.canvas_width", window.canvas_width, 200, 8000);
    validate_range(errors, "window.canvas_height", window.canvas_height, 200, 8000);
    validate_range(errors, "window.margin", window.margin, 0, 200);
    validate_range(errors, "window.chrome_height", window.chrome_height, 0, 100);
}

/// Validate layout transition timing.
pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &HoverConfig) {
    let animation = &config.animation;
    validate_range(errors, "animation.duration_ms", animation.duration_ms, 0, 2000);
    validate_range(errors, "animation.steps", animation.steps, 1, 240);
    validate_range(
        errors,
        "animation.scroll_restore_delay_ms",
        animation.scroll_restore_delay_ms,
        0,
        5000,
    );
    validate_range(
        errors,
        "animation.recenter_delay_ms",
        animation.recenter_delay_ms,
        0,
        5000,
    );
}

/// Validate the content address.
pub(crate) fn validate_content(errors: &mut Vec<String>, config: &HoverConfig) {
    let url = &config.content.url;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!("content.url = {url:?} must be an http(s) address"));
    }
    if config.content.partition.trim().is_empty() {
        errors.push("content.partition must not be empty".into());
    }
}
