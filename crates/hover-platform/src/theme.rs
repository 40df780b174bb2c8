use hover_config::schema::ThemePreference;

/// Concrete appearance sent to pages in `theme-updated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }
}

/// Resolve the configured preference against the OS appearance.
///
/// `os_dark` is `None` when the OS does not report one; `system` then
/// falls back to light.
pub fn resolve_theme(preference: ThemePreference, os_dark: Option<bool>) -> ResolvedTheme {
    match preference {
        ThemePreference::Light => ResolvedTheme::Light,
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::System => match os_dark {
            Some(true) => ResolvedTheme::Dark,
            _ => ResolvedTheme::Light,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preference_wins() {
        assert_eq!(resolve_theme(ThemePreference::Dark, Some(false)), ResolvedTheme::Dark);
        assert_eq!(resolve_theme(ThemePreference::Light, Some(true)), ResolvedTheme::Light);
    }

    #[test]
    fn system_follows_os() {
        assert_eq!(resolve_theme(ThemePreference::System, Some(true)), ResolvedTheme::Dark);
        assert_eq!(resolve_theme(ThemePreference::System, None).as_str(), "light");
    }
}
