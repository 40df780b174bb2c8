//! IPC protocol between Rust and the hosted pages.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: pages call `window.hover.ipc.send(kind, payload)`, which
//!   posts `{kind, payload}` through `window.ipc.postMessage`.
//! - **Rust -> JS**: Rust evaluates `window.hover.ipc._dispatch(kind, payload)`
//!   in the page.
//!
//! Only the kinds in [`IpcKind`] are acted on; anything else is dropped by
//! the receiver with a warning.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// The allowlisted kind, if this message carries one.
    pub fn allowed_kind(&self) -> Option<IpcKind> {
        IpcKind::from_wire(&self.kind)
    }
}

/// Inbound message kinds the host acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpcKind {
    ExecuteShortcut,
    CanvasStateChanged,
    OnboardingComplete,
    ToggleFullScreen,
    OpenNewWindow,
    UpdateSetting,
    GetSettings,
    /// Settings page asks for every setting back at its default.
    ResetSettings,
    /// Chrome bar asks the host to start a native window drag.
    DragWindow,
}

impl IpcKind {
    pub const ALL: [IpcKind; 9] = [
        IpcKind::ExecuteShortcut,
        IpcKind::CanvasStateChanged,
        IpcKind::OnboardingComplete,
        IpcKind::ToggleFullScreen,
        IpcKind::OpenNewWindow,
        IpcKind::UpdateSetting,
        IpcKind::GetSettings,
        IpcKind::ResetSettings,
        IpcKind::DragWindow,
    ];

    pub fn as_wire(self) -> &'static str {
        match self {
            IpcKind::ExecuteShortcut => "execute-shortcut",
            IpcKind::CanvasStateChanged => "canvas-state-changed",
            IpcKind::OnboardingComplete => "onboarding-complete",
            IpcKind::ToggleFullScreen => "toggle-full-screen",
            IpcKind::OpenNewWindow => "open-new-window",
            IpcKind::UpdateSetting => "update-setting",
            IpcKind::GetSettings => "get-settings",
            IpcKind::ResetSettings => "reset-settings",
            IpcKind::DragWindow => "drag-window",
        }
    }

    pub fn from_wire(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_wire() == kind)
    }
}

/// Outbound message kinds sent to pages.
pub mod outbound {
    pub const SET_LOCAL_SHORTCUTS: &str = "set-local-shortcuts";
    pub const SESSION_EVENT: &str = "session-event";
    pub const SETTINGS_UPDATED: &str = "settings-updated";
    pub const THEME_UPDATED: &str = "theme-updated";
    pub const SETTINGS: &str = "settings";
    pub const UPDATE_TITLE: &str = "update-title";
}

/// JavaScript that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into every WebView.
///
/// Pages that opted into local shortcuts receive the table through
/// `set-local-shortcuts`; the bridge matches keydown events against it and
/// reports hits as `execute-shortcut`.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.hover && window.hover.ipc) { return; }
    window.hover = window.hover || {};
    var shortcuts = {};
    var ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            if (kind === 'set-local-shortcuts') {
                shortcuts = payload || {};
            }
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
    window.hover.ipc = ipc;

    function comboOf(e) {
        var key = e.key.length === 1 ? e.key.toUpperCase() : e.key;
        if (key === ' ') { key = 'Space'; }
        if (key.indexOf('Arrow') === 0) { key = key.slice(5); }
        if (key === '+') { key = 'Plus'; }
        var parts = [];
        if (e.ctrlKey) { parts.push('Control'); }
        if (e.altKey) { parts.push('Alt'); }
        if (e.shiftKey) { parts.push('Shift'); }
        if (e.metaKey) { parts.push('Super'); }
        parts.push(key);
        return parts.join('+');
    }

    window.addEventListener('keydown', function(e) {
        var combo = comboOf(e);
        for (var action in shortcuts) {
            if (shortcuts[action] === combo) {
                e.preventDefault();
                e.stopPropagation();
                ipc.send('execute-shortcut', { action: action });
                return;
            }
        }
    }, true);
})();
"#;

/// Generate a JS snippet that dispatches a message to the page's IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.hover && window.hover.ipc && window.hover.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_message_with_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"canvas-state-changed","payload":true}"#).unwrap();
        assert_eq!(msg.allowed_kind(), Some(IpcKind::CanvasStateChanged));
        assert_eq!(msg.payload, json!(true));
    }

    #[test]
    fn missing_payload_defaults_to_null() {
        let msg = IpcMessage::from_json(r#"{"kind":"get-settings"}"#).unwrap();
        assert!(msg.payload.is_null());
    }

    #[test]
    fn unknown_kind_is_not_allowed() {
        let msg = IpcMessage::from_json(r#"{"kind":"save-credentials","payload":{}}"#).unwrap();
        assert_eq!(msg.allowed_kind(), None);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn wire_names_round_trip() {
        for kind in IpcKind::ALL {
            assert_eq!(IpcKind::from_wire(kind.as_wire()), Some(kind));
        }
    }

    #[test]
    fn dispatch_script_quotes_kind_and_payload() {
        let js = js_dispatch_message("set-local-shortcuts", &json!({"search": "Alt+S"}));
        assert!(js.contains(r#"_dispatch("set-local-shortcuts", {"search":"Alt+S"})"#));
    }

    #[test]
    fn dispatch_script_escapes_quotes() {
        let js = js_dispatch_message("x\"y", &json!(null));
        assert!(js.contains(r#""x\"y""#));
    }
}
