//! Routing of webview events between the chrome pages and the session.

use hover_webview::{IpcMessage, PageLoadState, WebViewEvent};
use hover_session::IpcOrigin;

use super::core::HoverApp;

impl HoverApp {
    /// Drain webview events. Chrome page events are handled here; content
    /// view events go to the session.
    pub(super) fn poll_webview_events(&mut self) {
        let events = self.webviews.borrow().drain_events();
        if events.is_empty() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        for event in events {
            let Some(&window) = self.chrome_views.get(&event.view()) else {
                session.handle_view_event(event);
                continue;
            };

            match event {
                WebViewEvent::PageLoad {
                    state: PageLoadState::Finished,
                    url,
                    ..
                } => {
                    tracing::debug!(%window, url = %url, "chrome page loaded");
                    session.on_chrome_loaded(window);
                }
                WebViewEvent::IpcMessage { body, .. } => match IpcMessage::from_json(&body) {
                    Some(msg) => session.handle_ipc(window, IpcOrigin::Chrome, msg),
                    None => tracing::warn!(%window, "malformed IPC message from chrome"),
                },
                WebViewEvent::NavigationBlocked { url, .. } => {
                    tracing::warn!(%window, url = %url, "chrome navigation blocked");
                }
                _ => {}
            }
        }
    }
}
