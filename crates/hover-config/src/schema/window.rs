//! Window geometry settings.

use serde::{Deserialize, Serialize};

/// Window sizes used by the compact and canvas layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Compact layout width.
    pub default_width: u32,
    /// Compact layout height.
    pub default_height: u32,
    /// Canvas layout width, clamped to the display work area.
    pub canvas_width: u32,
    /// Canvas layout height, clamped to the display work area.
    pub canvas_height: u32,
    /// Gap kept between a canvas window and the work area edges.
    pub margin: u32,
    /// Height of the chrome band at the top that the content never covers.
    pub chrome_height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_width: 500,
            default_height: 650,
            canvas_width: 1400,
            canvas_height: 800,
            margin: 20,
            chrome_height: 30,
            title: "Hover".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.default_width, 500);
        assert_eq!(config.default_height, 650);
        assert_eq!(config.canvas_width, 1400);
        assert_eq!(config.canvas_height, 800);
        assert_eq!(config.margin, 20);
        assert_eq!(config.chrome_height, 30);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
canvas_width = 1600
margin = 10
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.canvas_width, 1600);
        assert_eq!(config.margin, 10);
        assert_eq!(config.canvas_height, 800);
        assert_eq!(config.title, "Hover");
    }
}
