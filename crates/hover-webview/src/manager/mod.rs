//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances for window chrome and
//! remote content. All of them share one [`wry::WebContext`] so cookies and
//! storage are common to every window.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use hover_common::ViewId;

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WryContentView;
pub use types::WebViewConfig;

pub type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

pub struct WebViewManager {
    /// Event sink: handlers push here for the main event loop to consume.
    pub(crate) events: EventSink,
    content_provider: Arc<ContentProvider>,
    web_context: wry::WebContext,
    next_view: u32,
}

impl WebViewManager {
    /// Create a manager whose views persist storage under `data_dir`.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: Arc::new(ContentProvider::bundled()),
            web_context: wry::WebContext::new(data_dir),
            next_view: 1,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    fn allocate_id(&mut self) -> ViewId {
        let id = ViewId(self.next_view);
        self.next_view += 1;
        id
    }
}

/// Push onto the sink, tolerating a poisoned lock.
pub(crate) fn push_event(events: &EventSink, event: WebViewEvent) {
    match events.lock() {
        Ok(mut evts) => evts.push(event),
        Err(poisoned) => poisoned.into_inner().push(event),
    }
}

/// Storage directory shared by every content view.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("hover").join("webdata"))
}
