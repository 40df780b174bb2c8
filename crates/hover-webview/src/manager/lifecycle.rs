use std::sync::Arc;

use hover_common::{Rect, ViewError};
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::{to_wry_rect, WryContentView};
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window and
    /// shares this manager's storage context.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        window: &W,
        bounds: Rect,
        config: WebViewConfig,
    ) -> Result<WryContentView, ViewError> {
        let view = self.allocate_id();
        let events = Arc::clone(&self.events);
        let provider = Arc::clone(&self.content_provider);

        let mut builder = WebViewBuilder::with_web_context(&mut self.web_context)
            .with_bounds(to_wry_rect(bounds))
            .with_devtools(config.devtools)
            .with_clipboard(true)
            .with_autoplay(true)
            .with_focused(config.focused)
            .with_initialization_script(IPC_INIT_SCRIPT);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(*script);
        }
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), view);
        builder =
            Self::attach_navigation_handler(builder, Arc::clone(&events), view, config.navigation);
        builder = Self::attach_custom_protocol(builder, provider);

        let webview = builder
            .with_url(&config.url)
            .build_as_child(window)
            .map_err(|e| ViewError::Backend(e.to_string()))?;

        debug!(%view, url = %config.url, "WebView created");

        Ok(WryContentView {
            webview,
            id: view,
            current_url: config.url,
            events,
        })
    }
}
