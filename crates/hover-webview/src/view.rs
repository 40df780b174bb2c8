use hover_common::{Rect, ViewError, ViewId, WindowId};
use serde_json::Value;

use crate::events::ScriptRequestId;

/// One embedded content surface.
///
/// Implemented over `wry` by [`WryContentView`](crate::WryContentView) and
/// by in-memory fakes in tests. Bounds are relative to the host window.
pub trait ContentView {
    fn id(&self) -> ViewId;

    fn set_bounds(&self, bounds: Rect) -> Result<(), ViewError>;

    fn set_visible(&self, visible: bool) -> Result<(), ViewError>;

    fn load_url(&mut self, url: &str) -> Result<(), ViewError>;

    /// Last address loaded or navigated to.
    fn current_url(&self) -> &str;

    fn reload(&self) -> Result<(), ViewError>;

    fn focus(&self) -> Result<(), ViewError>;

    /// Start evaluating `source`. The outcome is reported later as a
    /// [`WebViewEvent::ScriptResult`](crate::WebViewEvent::ScriptResult)
    /// carrying `request`.
    fn evaluate(&self, request: ScriptRequestId, source: &str) -> Result<(), ViewError>;

    /// Deliver an outbound IPC message to the page.
    fn send_ipc(&self, kind: &str, payload: &Value) -> Result<(), ViewError>;
}

/// Creates content views loaded with remote content.
///
/// Every view shares the same persistent storage partition.
pub trait ViewFactory {
    fn create(
        &mut self,
        window: WindowId,
        url: &str,
        bounds: Rect,
    ) -> Result<Box<dyn ContentView>, ViewError>;
}
