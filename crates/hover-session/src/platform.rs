//! Capabilities the session needs from the windowing system.

use std::time::Instant;

use hover_common::{PlatformError, Rect, ViewError};
use hover_webview::LocalPage;
use serde_json::Value;

/// One native top-level window together with its chrome page.
///
/// Rects are outer window bounds in logical screen units. Methods take
/// `&self` because the platform handle is shared with the event loop.
pub trait NativeWindow {
    fn rect(&self) -> Rect;
    fn set_rect(&self, rect: Rect);

    fn is_visible(&self) -> bool;
    fn set_visible(&self, visible: bool);

    fn is_minimized(&self) -> bool;
    fn set_minimized(&self, minimized: bool);

    fn is_maximized(&self) -> bool;
    fn set_maximized(&self, maximized: bool);

    fn is_focused(&self) -> bool;
    fn focus(&self);

    fn set_always_on_top(&self, on_top: bool);

    /// Bring the window above its siblings without changing focus.
    fn raise(&self);

    /// Start an OS-driven move with the pointer.
    fn drag(&self);

    /// OS appearance, when the platform reports one.
    fn prefers_dark(&self) -> Option<bool>;

    /// Load a bundled page into the window chrome.
    fn show_page(&self, page: LocalPage) -> Result<(), PlatformError>;

    /// Deliver an IPC message to the chrome page.
    fn send_ipc(&self, kind: &str, payload: &Value) -> Result<(), ViewError>;
}

/// A monitor as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    pub bounds: Rect,
    /// Bounds minus task bars and docks.
    pub work_area: Rect,
    pub primary: bool,
}

pub trait DisplayProvider {
    fn displays(&self) -> Vec<Display>;
}

/// Source of the current time for timeline scheduling.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
