//! Window lifecycle: adding, closing, and OS window events.

use hover_common::{Event, WindowId};
use hover_webview::{ipc::outbound, LocalPage};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::platform::NativeWindow;

use super::{AppRequest, SessionManager};

impl SessionManager {
    /// Reserve an id for a window the app is about to create.
    pub fn allocate_window_id(&mut self) -> WindowId {
        self.registry.allocate_id()
    }

    /// Take ownership of a new native window.
    ///
    /// Content is loaded right away once the walkthrough has been seen;
    /// before that the window shows the onboarding page instead.
    pub fn add_window(&mut self, id: WindowId, native: Box<dyn NativeWindow>) {
        self.registry.insert(id, native);
        let always_on_top = self.config.general.always_on_top;
        let Some(entry) = self.registry.get(id) else {
            return;
        };
        entry.apply_on_top(always_on_top);

        if self.config.general.onboarding_shown {
            self.create_view(id);
        } else if let Err(e) = entry.native.show_page(LocalPage::Onboarding) {
            warn!(window = %id, "failed to show onboarding: {e}");
        }
        info!(window = %id, windows = self.registry.len(), "window added");
    }

    /// Create a content view for `window` and attach it.
    pub(super) fn create_view(&mut self, window: WindowId) {
        let Some(entry) = self.registry.get(window) else {
            return;
        };
        let rect = entry.native.rect();
        let bounds = self.views.content_bounds(rect);
        match self
            .view_factory
            .create(window, &self.config.content.url, bounds)
        {
            Ok(view) => {
                if let Err(conflict) = self.views.attach(window, view, rect) {
                    warn!("{conflict}");
                }
            }
            Err(e) => warn!(%window, "failed to create content view: {e}"),
        }
    }

    /// Remove a window and everything bound to it.
    ///
    /// Its views are destroyed, pending scripts fail, and queued tasks are
    /// dropped. Closing the last window asks the app to quit.
    pub fn close_window(&mut self, window: WindowId) {
        if !self.registry.contains(window) {
            return;
        }
        for outcome in self.views.release(window) {
            debug!(%window, request = %outcome.request, "script abandoned on close");
        }
        self.pending_layout.remove(&window);
        self.timeline.drop_window(window);
        if self.capture_state.target == Some(window) {
            self.capture_state.target = None;
        }
        self.registry.remove(window);
        self.request(AppRequest::WindowClosed(window));
        info!(%window, windows = self.registry.len(), "window closed");

        if self.registry.is_empty() {
            self.request(AppRequest::Quit);
        }
    }

    /// The OS moved or resized the window.
    pub fn on_window_moved(&mut self, window: WindowId) {
        if let Some(entry) = self.registry.get(window) {
            self.views.resize(window, entry.native.rect());
        }
    }

    /// The OS reported a focus change.
    pub fn on_window_focus(&mut self, window: WindowId, focused: bool) {
        if !focused {
            if self.registry.focused_window().is_none() {
                self.publish(Event::FocusChanged { window: None });
            }
            return;
        }
        let Some(entry) = self.registry.get(window) else {
            return;
        };
        if self.config.general.always_on_top {
            entry.apply_on_top(true);
        }
        self.registry.set_last_focused(window);
        let due = self.now() + std::time::Duration::from_millis(100);
        self.timeline
            .schedule(due, crate::timeline::ScheduledTask::FocusView { window });
        self.publish(Event::FocusChanged {
            window: Some(window),
        });
    }

    /// The chrome page finished loading: send it what it renders.
    pub fn on_chrome_loaded(&mut self, window: WindowId) {
        let theme = Value::from(self.resolved_theme().as_str());
        let local = self.shortcuts.local_payload();
        let Some(entry) = self.registry.get(window) else {
            return;
        };
        for (kind, payload) in [
            (outbound::THEME_UPDATED, &theme),
            (outbound::SET_LOCAL_SHORTCUTS, &local),
        ] {
            if let Err(e) = entry.native.send_ipc(kind, payload) {
                debug!(%window, kind, "chrome ipc failed: {e}");
            }
        }
    }
}
