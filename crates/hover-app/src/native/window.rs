use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use hover_common::{PlatformError, Rect, ViewError, WindowId};
use hover_session::NativeWindow;
use hover_webview::{ContentView, LocalPage, WryContentView};
use serde_json::Value;
use tracing::{debug, warn};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::window::{Theme, Window, WindowLevel};

/// Every open window, shared between the app and the view factory.
pub type WindowMap = Rc<RefCell<HashMap<WindowId, Rc<WindowHandle>>>>;

/// A native window and the chrome page filling it.
pub struct WindowHandle {
    // Declared first so the webview is dropped before its parent window.
    chrome: RefCell<Option<WryContentView>>,
    pub window: Window,
}

impl WindowHandle {
    pub fn new(window: Window) -> Self {
        Self {
            chrome: RefCell::new(None),
            window,
        }
    }

    pub fn set_chrome(&self, chrome: WryContentView) {
        *self.chrome.borrow_mut() = Some(chrome);
    }

    /// Size in logical units.
    pub fn logical_size(&self) -> (i32, i32) {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        (size.width.round() as i32, size.height.round() as i32)
    }

    /// Keep the chrome page covering the whole window.
    pub fn fit_chrome(&self) {
        let (width, height) = self.logical_size();
        if let Some(chrome) = self.chrome.borrow().as_ref() {
            if let Err(e) = chrome.set_bounds(Rect::new(0, 0, width, height)) {
                debug!("chrome resize failed: {e}");
            }
        }
    }
}

/// The session's view of a [`WindowHandle`].
pub struct SharedWindow(pub Rc<WindowHandle>);

impl NativeWindow for SharedWindow {
    fn rect(&self) -> Rect {
        let window = &self.0.window;
        let scale = window.scale_factor();
        let position = window
            .outer_position()
            .map(|p| p.to_logical::<f64>(scale))
            .unwrap_or(LogicalPosition::new(0.0, 0.0));
        let (width, height) = self.0.logical_size();
        Rect::new(
            position.x.round() as i32,
            position.y.round() as i32,
            width,
            height,
        )
    }

    fn set_rect(&self, rect: Rect) {
        let window = &self.0.window;
        window.set_outer_position(LogicalPosition::new(rect.x, rect.y));
        let _ = window.request_inner_size(LogicalSize::new(
            rect.width.max(1) as u32,
            rect.height.max(1) as u32,
        ));
        self.0.fit_chrome();
    }

    fn is_visible(&self) -> bool {
        self.0.window.is_visible().unwrap_or(true)
    }

    fn set_visible(&self, visible: bool) {
        self.0.window.set_visible(visible);
    }

    fn is_minimized(&self) -> bool {
        self.0.window.is_minimized().unwrap_or(false)
    }

    fn set_minimized(&self, minimized: bool) {
        self.0.window.set_minimized(minimized);
    }

    fn is_maximized(&self) -> bool {
        self.0.window.is_maximized()
    }

    fn set_maximized(&self, maximized: bool) {
        self.0.window.set_maximized(maximized);
    }

    fn is_focused(&self) -> bool {
        self.0.window.has_focus()
    }

    fn focus(&self) {
        self.0.window.focus_window();
    }

    fn set_always_on_top(&self, on_top: bool) {
        self.0.window.set_window_level(if on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        });
    }

    fn raise(&self) {
        // winit has no separate raise; focusing a visible window raises it.
        self.0.window.focus_window();
    }

    fn drag(&self) {
        if let Err(e) = self.0.window.drag_window() {
            debug!("window drag unavailable: {e}");
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.0.window.theme().map(|t| t == Theme::Dark)
    }

    fn show_page(&self, page: LocalPage) -> Result<(), PlatformError> {
        let mut chrome = self.0.chrome.borrow_mut();
        let chrome = chrome
            .as_mut()
            .ok_or_else(|| PlatformError::WindowError("window has no chrome page".into()))?;
        chrome
            .load_url(&page.url())
            .map_err(|e| PlatformError::WindowError(e.to_string()))
    }

    fn send_ipc(&self, kind: &str, payload: &Value) -> Result<(), ViewError> {
        match self.0.chrome.borrow().as_ref() {
            Some(chrome) => chrome.send_ipc(kind, payload),
            None => {
                warn!(kind, "ipc to a window without chrome");
                Ok(())
            }
        }
    }
}
