//! IPC and webview event routing.

use hover_common::{Action, LayoutMode, WindowId};
use hover_config::settings::settings_snapshot;
use hover_webview::{ipc::outbound, IpcKind, IpcMessage, PageLoadState, WebViewEvent};
use serde_json::Value;
use tracing::{debug, warn};

use super::{AppRequest, IpcOrigin, SessionManager};

impl SessionManager {
    /// Route a validated IPC message from one of `window`'s pages.
    pub fn handle_ipc(&mut self, window: WindowId, origin: IpcOrigin, msg: IpcMessage) {
        let Some(kind) = msg.allowed_kind() else {
            warn!(%window, kind = %msg.kind, "dropping unknown IPC message");
            return;
        };
        if !self.registry.contains(window) {
            return;
        }
        debug!(%window, ?origin, kind = kind.as_wire(), "ipc");

        match kind {
            IpcKind::ExecuteShortcut => match parse_action(&msg.payload) {
                Some(action) => self.request_shortcut_action(action),
                None => warn!(payload = %msg.payload, "execute-shortcut names no action"),
            },
            IpcKind::CanvasStateChanged => {
                let Some(open) = msg.payload.as_bool() else {
                    warn!(payload = %msg.payload, "canvas-state-changed expects a boolean");
                    return;
                };
                let mode = if open {
                    LayoutMode::Canvas
                } else {
                    LayoutMode::Normal
                };
                if let Err(e) = self.request_layout_mode(window, mode) {
                    debug!(%window, "canvas report ignored: {e}");
                }
            }
            IpcKind::OnboardingComplete => self.complete_onboarding(window),
            IpcKind::ToggleFullScreen => self.toggle_maximize(window),
            IpcKind::OpenNewWindow => self.request(AppRequest::NewWindow),
            IpcKind::UpdateSetting => self.update_setting(&msg.payload),
            IpcKind::GetSettings => {
                let snapshot = settings_snapshot(&self.config);
                self.reply(window, origin, outbound::SETTINGS, &snapshot);
            }
            IpcKind::ResetSettings => self.reset_settings(),
            IpcKind::DragWindow => {
                if let Some(entry) = self.registry.get(window) {
                    entry.native.drag();
                }
            }
        }
    }

    fn reply(&self, window: WindowId, origin: IpcOrigin, kind: &str, payload: &Value) {
        let result = match origin {
            IpcOrigin::Chrome => match self.registry.get(window) {
                Some(entry) => entry.native.send_ipc(kind, payload),
                None => return,
            },
            IpcOrigin::Content => match self.views.attached(window) {
                Some(view) => view.send_ipc(kind, payload),
                None => return,
            },
        };
        if let Err(e) = result {
            debug!(%window, kind, "ipc reply failed: {e}");
        }
    }

    /// Consume one event reported by a content view.
    ///
    /// Events from views the session does not own (window chrome) are
    /// ignored; the app routes those itself.
    pub fn handle_view_event(&mut self, event: WebViewEvent) {
        let Some(window) = self.views.window_of(event.view()) else {
            if let WebViewEvent::ScriptResult { view, request, .. } = &event {
                debug!(%view, %request, "script result for released view");
            }
            return;
        };

        match event {
            WebViewEvent::ScriptResult {
                view,
                request,
                result,
            } => {
                if let Some(outcome) = self.views.resolve(view, request, result) {
                    self.on_script_outcome(outcome.window, outcome.request, outcome.result);
                }
            }
            WebViewEvent::PageLoad {
                state: PageLoadState::Finished,
                url,
                ..
            } => {
                debug!(%window, url = %url, "content loaded");
                let local = self.shortcuts.local_payload();
                let theme = Value::from(self.resolved_theme().as_str());
                if let Some(view) = self.views.attached(window) {
                    for (kind, payload) in [
                        (outbound::SET_LOCAL_SHORTCUTS, &local),
                        (outbound::THEME_UPDATED, &theme),
                    ] {
                        if let Err(e) = view.send_ipc(kind, payload) {
                            debug!(%window, kind, "content ipc failed: {e}");
                        }
                    }
                }
                self.schedule_pending_file();
            }
            WebViewEvent::PageLoad { .. } => {}
            WebViewEvent::TitleChanged { title, .. } => {
                if let Some(entry) = self.registry.get(window) {
                    if let Err(e) = entry
                        .native
                        .send_ipc(outbound::UPDATE_TITLE, &Value::from(title))
                    {
                        debug!(%window, "title forward failed: {e}");
                    }
                }
            }
            WebViewEvent::IpcMessage { body, .. } => match IpcMessage::from_json(&body) {
                Some(msg) => self.handle_ipc(window, IpcOrigin::Content, msg),
                None => warn!(%window, "malformed IPC message from content"),
            },
            WebViewEvent::NavigationBlocked { url, .. } => {
                debug!(%window, url = %url, "content navigation blocked");
            }
            WebViewEvent::Closed { .. } => {}
        }
    }

    pub(super) fn on_script_outcome(
        &mut self,
        window: WindowId,
        request: hover_webview::ScriptRequestId,
        result: Result<String, hover_common::ViewError>,
    ) {
        if self.resume_layout(window, request, &result) {
            return;
        }
        if let Err(e) = result {
            debug!(%window, %request, "script failed: {e}");
        }
    }
}

/// `execute-shortcut` carries `{action: "search"}` or a bare `"search"`.
fn parse_action(payload: &Value) -> Option<Action> {
    let name = payload
        .get("action")
        .and_then(Value::as_str)
        .or_else(|| payload.as_str())?;
    name.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_from_object_or_string() {
        assert_eq!(parse_action(&json!({"action": "search"})), Some(Action::Search));
        assert_eq!(parse_action(&json!("refresh")), Some(Action::Refresh));
        assert_eq!(parse_action(&json!({"action": "nope"})), None);
        assert_eq!(parse_action(&Value::Null), None);
    }
}
