//! HoverApp struct definition and constructor.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use hover_common::{ViewId, WindowId};
use hover_config::schema::HoverConfig;
use hover_config::toml_loader::load_from_path;
use hover_config::ReloadManager;
use hover_platform::InstanceServer;
use hover_session::SessionManager;
use hover_webview::{default_data_dir, WebViewManager};
use tokio::sync::watch;

use crate::native::WindowMap;

/// Top-level application state.
pub struct HoverApp {
    pub(super) config_path: Option<PathBuf>,
    /// `--url` from the command line; wins over the file on every reload.
    pub(super) url_override: Option<String>,
    /// Content address as written in the config file.
    pub(super) file_url: String,
    /// Settings used until the session exists.
    pub(super) config: HoverConfig,

    pub(super) session: Option<SessionManager>,

    // Native windows and their chrome pages
    pub(super) webviews: Rc<RefCell<WebViewManager>>,
    pub(super) windows: WindowMap,
    pub(super) winit_ids: HashMap<winit::window::WindowId, WindowId>,
    pub(super) chrome_views: HashMap<ViewId, WindowId>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Config hot reload
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) config_rx: Option<watch::Receiver<HoverConfig>>,

    // Later launches forward their files here
    pub(super) instance: Option<InstanceServer>,
    /// Files from the command line, handed to the session once it exists.
    pub(super) startup_files: Vec<PathBuf>,

    pub(super) should_exit: bool,
}

impl HoverApp {
    pub fn new(config_path: Option<PathBuf>, url_override: Option<String>) -> Self {
        let tokio_runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => Some(rt),
            Err(e) => {
                eprintln!("hover: config reload disabled, no runtime: {e}");
                None
            }
        };

        let (config, config_rx) = match (&config_path, &tokio_runtime) {
            (Some(path), Some(rt)) => {
                let _guard = rt.enter();
                let (config, rx) = ReloadManager::start(path.clone());
                (config, Some(rx))
            }
            (Some(path), None) => (load_from_path(path).unwrap_or_default(), None),
            (None, _) => (HoverConfig::default(), None),
        };

        let file_url = config.content.url.clone();
        let config = apply_url_override(config, url_override.as_deref());
        let data_dir = default_data_dir().map(|d| d.join(&config.content.partition));

        Self {
            config_path,
            url_override,
            file_url,
            config,
            session: None,
            webviews: Rc::new(RefCell::new(WebViewManager::new(data_dir))),
            windows: Rc::new(RefCell::new(HashMap::new())),
            winit_ids: HashMap::new(),
            chrome_views: HashMap::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            tokio_runtime,
            config_rx,
            instance: None,
            startup_files: Vec::new(),
            should_exit: false,
        }
    }

    /// The settings currently in effect.
    pub fn config(&self) -> &HoverConfig {
        match &self.session {
            Some(session) => session.config(),
            None => &self.config,
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub(super) fn with_url_override(&self, config: HoverConfig) -> HoverConfig {
        apply_url_override(config, self.url_override.as_deref())
    }

    /// Keep the single-instance listener alive and poll it.
    pub fn set_instance_server(&mut self, server: InstanceServer) {
        self.instance = Some(server);
    }

    /// Paste these files once content has loaded.
    pub fn open_at_startup(&mut self, files: Vec<PathBuf>) {
        self.startup_files = files;
    }

    /// Find which session window a winit window belongs to.
    pub(super) fn window_for(&self, id: winit::window::WindowId) -> Option<WindowId> {
        self.winit_ids.get(&id).copied()
    }
}

fn apply_url_override(mut config: HoverConfig, url: Option<&str>) -> HoverConfig {
    if let Some(url) = url {
        config.content.url = url.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_override_replaces_content_address() {
        let config = apply_url_override(HoverConfig::default(), Some("https://example.com/"));
        assert_eq!(config.content.url, "https://example.com/");
    }

    #[test]
    fn no_override_keeps_file_address() {
        let config = apply_url_override(HoverConfig::default(), None);
        assert_eq!(config.content.url, HoverConfig::default().content.url);
    }
}
