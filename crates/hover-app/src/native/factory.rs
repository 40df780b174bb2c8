use std::cell::RefCell;
use std::rc::Rc;

use hover_common::{Rect, ViewError, WindowId};
use hover_webview::{ContentView, ViewFactory, WebViewConfig, WebViewManager};

use super::window::WindowMap;

/// Builds remote content views as children of open windows.
pub struct WryViewFactory {
    webviews: Rc<RefCell<WebViewManager>>,
    windows: WindowMap,
    user_agent: String,
}

impl WryViewFactory {
    pub fn new(
        webviews: Rc<RefCell<WebViewManager>>,
        windows: WindowMap,
        user_agent: String,
    ) -> Self {
        Self {
            webviews,
            windows,
            user_agent,
        }
    }
}

impl ViewFactory for WryViewFactory {
    fn create(
        &mut self,
        window: WindowId,
        url: &str,
        bounds: Rect,
    ) -> Result<Box<dyn ContentView>, ViewError> {
        let handle = self
            .windows
            .borrow()
            .get(&window)
            .cloned()
            .ok_or_else(|| ViewError::Backend(format!("no native window for {window}")))?;
        let config = WebViewConfig::remote(url, self.user_agent.clone());
        let view = self
            .webviews
            .borrow_mut()
            .create(&handle.window, bounds, config)?;
        Ok(Box::new(view))
    }
}
