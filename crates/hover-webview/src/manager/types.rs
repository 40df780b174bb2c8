use crate::content::NavigationPolicy;

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    pub navigation: NavigationPolicy,
    /// Extra scripts injected after the IPC bridge on every page load.
    pub init_scripts: Vec<&'static str>,
    /// Whether the view takes input focus when created.
    pub focused: bool,
}

impl WebViewConfig {
    /// Remote content with the shared user agent.
    pub fn remote(url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            devtools: cfg!(debug_assertions),
            user_agent: Some(user_agent.into()),
            navigation: NavigationPolicy::Remote,
            init_scripts: vec![crate::scripts::CANVAS_WATCH_INIT],
            focused: true,
        }
    }

    /// A bundled local page.
    pub fn local(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            devtools: cfg!(debug_assertions),
            user_agent: None,
            navigation: NavigationPolicy::LocalOnly,
            init_scripts: Vec::new(),
            focused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_config_watches_canvas() {
        let config = WebViewConfig::remote("https://example.com/", "UA/1.0");
        assert_eq!(config.navigation, NavigationPolicy::Remote);
        assert_eq!(config.user_agent.as_deref(), Some("UA/1.0"));
        assert_eq!(config.init_scripts.len(), 1);
    }

    #[test]
    fn local_config_is_locked_down() {
        let config = WebViewConfig::local("hover://localhost/chrome.html");
        assert_eq!(config.navigation, NavigationPolicy::LocalOnly);
        assert!(config.init_scripts.is_empty());
        assert!(!config.focused);
    }
}
