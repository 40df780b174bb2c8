//! WebView event types.

use hover_common::ViewId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Correlates a `run_script` call with its [`WebViewEvent::ScriptResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScriptRequestId(pub u64);

impl std::fmt::Display for ScriptRequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "script-{}", self.0)
    }
}

/// Events emitted by a WebView instance.
///
/// Handlers run on the webview's own callbacks; they push into a shared sink
/// which the event loop drains.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        view: ViewId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view: ViewId,
        title: String,
    },
    /// A raw `window.ipc.postMessage` body, already checked to be JSON.
    IpcMessage {
        view: ViewId,
        body: String,
    },
    /// A navigation was refused by the guard.
    NavigationBlocked {
        view: ViewId,
        url: String,
    },
    /// Completion of an evaluated script. `result` is the JSON-encoded value
    /// or the error message the page reported.
    ScriptResult {
        view: ViewId,
        request: ScriptRequestId,
        result: Result<String, String>,
    },
    Closed {
        view: ViewId,
    },
}

impl WebViewEvent {
    pub fn view(&self) -> ViewId {
        match self {
            WebViewEvent::PageLoad { view, .. }
            | WebViewEvent::TitleChanged { view, .. }
            | WebViewEvent::IpcMessage { view, .. }
            | WebViewEvent::NavigationBlocked { view, .. }
            | WebViewEvent::ScriptResult { view, .. }
            | WebViewEvent::Closed { view } => *view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_reports_its_view() {
        let events = [
            WebViewEvent::Closed { view: ViewId(4) },
            WebViewEvent::ScriptResult {
                view: ViewId(4),
                request: ScriptRequestId(1),
                result: Ok("12".into()),
            },
            WebViewEvent::NavigationBlocked {
                view: ViewId(4),
                url: "file:///etc/hosts".into(),
            },
        ];
        assert!(events.iter().all(|e| e.view() == ViewId(4)));
    }

    #[test]
    fn request_id_display() {
        assert_eq!(ScriptRequestId(17).to_string(), "script-17");
    }
}
