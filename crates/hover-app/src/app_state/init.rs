//! Session construction and native window creation.

use std::rc::Rc;

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowLevel};

use hover_common::Rect;
use hover_platform::{create_global_shortcuts, create_launch_at_login, read_pasted_file, SnippingTool};
use hover_session::{SessionManager, SessionServices, SystemClock};
use hover_webview::{ContentView, LocalPage, WebViewConfig};

use crate::native::{MonitorDisplays, SharedWindow, WindowHandle, WryViewFactory};

use super::core::HoverApp;

impl HoverApp {
    /// Build the session manager around the native services.
    pub(super) fn initialize_session(&mut self) {
        if self.session.is_some() {
            return;
        }
        let services = SessionServices {
            view_factory: Box::new(WryViewFactory::new(
                Rc::clone(&self.webviews),
                Rc::clone(&self.windows),
                self.config.content.user_agent.clone(),
            )),
            displays: Box::new(MonitorDisplays::new(Rc::clone(&self.windows))),
            shortcuts: create_global_shortcuts(),
            capture: Box::new(SnippingTool::new()),
            launch_at_login: create_launch_at_login(),
            clock: Box::new(SystemClock),
        };
        let mut session = SessionManager::new(self.config.clone(), services);
        for path in std::mem::take(&mut self.startup_files) {
            match read_pasted_file(&path) {
                Ok(file) => session.open_file(file),
                Err(e) => tracing::warn!("Cannot open {}: {e}", path.display()),
            }
        }
        self.session = Some(session);
        tracing::info!("Session ready");
    }

    /// Create a native window with its chrome page and hand it to the session.
    /// Returns `false` if the window could not be created.
    pub(super) fn open_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let config = session.config().clone();
        let width = config.window.default_width as i32;
        let height = config.window.default_height as i32;

        let mut attrs = WindowAttributes::default()
            .with_title(config.window.title.clone())
            .with_decorations(false)
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .with_window_level(if config.general.always_on_top {
                WindowLevel::AlwaysOnTop
            } else {
                WindowLevel::Normal
            });
        if let Some(monitor) = event_loop.primary_monitor() {
            let scale = monitor.scale_factor();
            let position = monitor.position().to_logical::<f64>(scale);
            let size = monitor.size().to_logical::<f64>(scale);
            let area = Rect::new(
                position.x.round() as i32,
                position.y.round() as i32,
                size.width.round() as i32,
                size.height.round() as i32,
            );
            let (x, y) = centered_origin(area, width, height);
            attrs = attrs.with_position(LogicalPosition::new(x as f64, y as f64));
        }

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        let winit_id = window.id();
        let handle = Rc::new(WindowHandle::new(window));

        let (w, h) = handle.logical_size();
        let chrome = self.webviews.borrow_mut().create(
            &handle.window,
            Rect::new(0, 0, w, h),
            WebViewConfig::local(LocalPage::Chrome.url()),
        );
        let chrome = match chrome {
            Ok(chrome) => chrome,
            Err(e) => {
                tracing::error!("Failed to create chrome page: {e}");
                return false;
            }
        };

        let id = session.allocate_window_id();
        self.chrome_views.insert(chrome.id(), id);
        handle.set_chrome(chrome);
        self.winit_ids.insert(winit_id, id);
        self.windows.borrow_mut().insert(id, Rc::clone(&handle));

        session.add_window(id, Box::new(SharedWindow(handle)));
        tracing::info!(window = %id, "Window opened");
        true
    }

    /// Forget the native side of a window the session has closed.
    pub(super) fn forget_window(&mut self, id: hover_common::WindowId) {
        self.winit_ids.retain(|_, w| *w != id);
        self.chrome_views.retain(|_, w| *w != id);
        if self.windows.borrow_mut().remove(&id).is_some() {
            tracing::debug!(window = %id, "native window dropped");
        }
    }
}

/// Top-left corner that centers a `width` x `height` window in `area`.
fn centered_origin(area: Rect, width: i32, height: i32) -> (i32, i32) {
    (
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_on_monitor() {
        let origin = centered_origin(Rect::new(0, 0, 1920, 1080), 500, 650);
        assert_eq!(origin, (710, 215));
    }

    #[test]
    fn centering_respects_monitor_offset() {
        let origin = centered_origin(Rect::new(1920, 0, 1920, 1080), 500, 650);
        assert_eq!(origin, (2630, 215));
    }
}
