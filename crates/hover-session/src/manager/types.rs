//! Core types and constructors for SessionManager.

use std::collections::HashMap;
use std::time::Instant;

use hover_common::{Event, Rect, WindowId};
use hover_config::schema::HoverConfig;
use hover_platform::{GlobalShortcuts, LaunchAtLogin, PastedFile, ScreenCapture, ShortcutTable};
use hover_webview::{ipc::outbound, ScriptRequestId, ViewAttachments, ViewFactory};
use serde_json::Value;
use tracing::debug;

use crate::platform::{Clock, DisplayProvider};
use crate::registry::WindowRegistry;
use crate::shortcuts::ShortcutDispatcher;
use crate::timeline::Timeline;

/// Work only the app can do, drained with [`SessionManager::drain_requests`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRequest {
    Quit,
    /// Open another native window and hand it to `add_window`.
    NewWindow,
    /// The window was removed from the session; drop its native handle.
    WindowClosed(WindowId),
    /// Persist the current settings.
    SaveConfig,
}

/// Which page of a window sent an IPC message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcOrigin {
    /// The chrome band or a bundled page shown in its place.
    Chrome,
    /// The remote content view.
    Content,
}

/// A layout change waiting for its scroll offset read to finish.
#[derive(Debug, Clone, Copy)]
pub(super) struct PendingLayout {
    pub request: ScriptRequestId,
    pub target: Rect,
    /// Center on the display once the animation settles.
    pub recenter: bool,
}

/// Platform services the session drives.
pub struct SessionServices {
    pub view_factory: Box<dyn ViewFactory>,
    pub displays: Box<dyn DisplayProvider>,
    pub shortcuts: Box<dyn GlobalShortcuts>,
    pub capture: Box<dyn ScreenCapture>,
    pub launch_at_login: Box<dyn LaunchAtLogin>,
    pub clock: Box<dyn Clock>,
}

pub(super) struct CaptureState {
    pub active: bool,
    pub target: Option<WindowId>,
}

pub struct SessionManager {
    pub(super) config: HoverConfig,
    pub(super) registry: WindowRegistry,
    pub(super) views: ViewAttachments,
    pub(super) shortcuts: ShortcutDispatcher,
    pub(super) timeline: Timeline,
    pub(super) pending_layout: HashMap<WindowId, PendingLayout>,
    pub(super) view_factory: Box<dyn ViewFactory>,
    pub(super) displays: Box<dyn DisplayProvider>,
    pub(super) capture: Box<dyn ScreenCapture>,
    pub(super) capture_state: CaptureState,
    pub(super) launch_at_login: Box<dyn LaunchAtLogin>,
    /// File waiting for a window whose content has finished loading.
    pub(super) pending_file: Option<PastedFile>,
    pub(super) events: hover_common::EventBus,
    pub(super) outbox: Vec<AppRequest>,
    pub(super) clock: Box<dyn Clock>,
}

impl SessionManager {
    /// Create a session, register the configured shortcuts and sync the
    /// login entry.
    pub fn new(config: HoverConfig, services: SessionServices) -> Self {
        let mut session = Self {
            views: ViewAttachments::new(config.window.chrome_height),
            registry: WindowRegistry::new(),
            shortcuts: ShortcutDispatcher::new(services.shortcuts),
            timeline: Timeline::new(),
            pending_layout: HashMap::new(),
            view_factory: services.view_factory,
            displays: services.displays,
            capture: services.capture,
            capture_state: CaptureState {
                active: false,
                target: None,
            },
            launch_at_login: services.launch_at_login,
            pending_file: None,
            events: hover_common::EventBus::new(64),
            outbox: Vec::new(),
            clock: services.clock,
            config,
        };
        let table = ShortcutTable::from_config(&session.config.shortcuts);
        session
            .shortcuts
            .apply_bindings(table, session.config.shortcuts.global);
        session.sync_launch_at_login();
        session
    }

    // -- Accessors --

    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn views(&self) -> &ViewAttachments {
        &self.views
    }

    pub fn shortcuts(&self) -> &ShortcutDispatcher {
        &self.shortcuts
    }

    pub fn events(&self) -> &hover_common::EventBus {
        &self.events
    }

    pub fn window_count(&self) -> usize {
        self.registry.len()
    }

    /// Take every queued request, oldest first.
    pub fn drain_requests(&mut self) -> Vec<AppRequest> {
        std::mem::take(&mut self.outbox)
    }

    pub(super) fn request(&mut self, request: AppRequest) {
        if !self.outbox.contains(&request) {
            self.outbox.push(request);
        }
    }

    pub(super) fn now(&self) -> Instant {
        self.clock.now()
    }

    // -- Broadcasting --

    /// Publish on the bus and mirror the event to every page.
    pub(super) fn publish(&mut self, event: Event) {
        let receivers = self.events.publish(event.clone());
        debug!(?event, receivers, "session event");
        match serde_json::to_value(&event) {
            Ok(payload) => self.broadcast(outbound::SESSION_EVENT, &payload),
            Err(e) => debug!("session event not serializable: {e}"),
        }
    }

    /// Send to every window chrome and every attached view.
    pub(super) fn broadcast(&self, kind: &str, payload: &Value) {
        for entry in self.registry.iter() {
            if let Err(e) = entry.native.send_ipc(kind, payload) {
                debug!(window = %entry.id, kind, "chrome ipc failed: {e}");
            }
        }
        self.views.broadcast_ipc(kind, payload);
    }
}
