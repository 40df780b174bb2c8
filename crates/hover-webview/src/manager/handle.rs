use hover_common::{Rect, ViewError, ViewId};
use serde_json::Value;
use wry::WebView;

use crate::events::{ScriptRequestId, WebViewEvent};
use crate::view::ContentView;

use super::{push_event, EventSink};

/// A `wry` WebView behind the [`ContentView`] capability.
pub struct WryContentView {
    pub(super) webview: WebView,
    pub(super) id: ViewId,
    /// Best-effort tracking of the loaded address.
    pub(super) current_url: String,
    pub(super) events: EventSink,
}

impl WryContentView {
    /// Record a navigation reported by the page-load handler.
    pub fn set_current_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl Drop for WryContentView {
    fn drop(&mut self) {
        push_event(&self.events, WebViewEvent::Closed { view: self.id });
    }
}

pub(super) fn to_wry_rect(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            rect.x as f64,
            rect.y as f64,
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            rect.width.max(0) as f64,
            rect.height.max(0) as f64,
        )),
    }
}

fn backend(e: wry::Error) -> ViewError {
    ViewError::Backend(e.to_string())
}

impl ContentView for WryContentView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), ViewError> {
        self.webview.set_bounds(to_wry_rect(bounds)).map_err(backend)
    }

    fn set_visible(&self, visible: bool) -> Result<(), ViewError> {
        self.webview.set_visible(visible).map_err(backend)
    }

    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        self.current_url = url.to_string();
        self.webview.load_url(url).map_err(backend)
    }

    fn current_url(&self) -> &str {
        &self.current_url
    }

    fn reload(&self) -> Result<(), ViewError> {
        self.webview.reload().map_err(backend)
    }

    fn focus(&self) -> Result<(), ViewError> {
        self.webview.focus().map_err(backend)
    }

    fn evaluate(&self, request: ScriptRequestId, source: &str) -> Result<(), ViewError> {
        let events = EventSink::clone(&self.events);
        let view = self.id;
        self.webview
            .evaluate_script_with_callback(source, move |result| {
                let result = if result.is_empty() {
                    Err("script produced no result".to_string())
                } else {
                    Ok(result)
                };
                push_event(
                    &events,
                    WebViewEvent::ScriptResult {
                        view,
                        request,
                        result,
                    },
                );
            })
            .map_err(|e| ViewError::ScriptFailed {
                view,
                message: e.to_string(),
            })
    }

    fn send_ipc(&self, kind: &str, payload: &Value) -> Result<(), ViewError> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script).map_err(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_converts_to_logical_wry_rect() {
        let rect = to_wry_rect(Rect::new(0, 30, 500, 620));
        match (rect.position, rect.size) {
            (wry::dpi::Position::Logical(pos), wry::dpi::Size::Logical(size)) => {
                assert_eq!((pos.x, pos.y), (0.0, 30.0));
                assert_eq!((size.width, size.height), (500.0, 620.0));
            }
            _ => panic!("expected logical coordinates"),
        }
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let rect = to_wry_rect(Rect::new(0, 30, -5, -1));
        if let wry::dpi::Size::Logical(size) = rect.size {
            assert_eq!((size.width, size.height), (0.0, 0.0));
        }
    }
}
