//! General behavior settings.

use serde::{Deserialize, Serialize};

/// Color scheme requested for window chrome and local pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ThemePreference {
    /// Follow the OS appearance.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::System => "system",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

/// Top-level behavior switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Keep windows above other applications.
    pub always_on_top: bool,
    /// Allow the content to switch windows into the enlarged canvas layout.
    pub canvas_resize_enabled: bool,
    pub theme: ThemePreference,
    /// Set once the first-run walkthrough has been completed.
    pub onboarding_shown: bool,
    /// Start Hover when the user logs in.
    pub auto_start: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            always_on_top: true,
            canvas_resize_enabled: true,
            theme: ThemePreference::System,
            onboarding_shown: false,
            auto_start: false,
        }
    }
}
