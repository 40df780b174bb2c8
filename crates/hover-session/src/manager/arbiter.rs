//! Focus/Visibility Arbiter.

use std::time::Duration;

use hover_common::WindowId;
use tracing::debug;

use crate::registry::OnTopOverride;
use crate::timeline::ScheduledTask;

use super::SessionManager;

/// How long every window stays pinned while the snipping tool is open.
pub(super) const CAPTURE_OVERRIDE: Duration = Duration::from_millis(3000);
/// Delay between showing windows and pulling the target to the front.
pub(super) const SHOW_SETTLE: Duration = Duration::from_millis(100);

impl SessionManager {
    /// Restore, show, raise and focus `window`, then focus its view.
    pub fn request_force_to_front(&mut self, window: WindowId) {
        let always_on_top = self.config.general.always_on_top;
        let Some(entry) = self.registry.get(window) else {
            return;
        };
        let native = &entry.native;
        if native.is_minimized() {
            native.set_minimized(false);
        }
        native.set_visible(true);
        entry.apply_on_top(always_on_top);
        native.raise();
        native.focus();
        self.focus_view(window);
    }

    pub(super) fn focus_view(&self, window: WindowId) {
        if let Some(view) = self.views.attached(window) {
            if let Err(e) = view.focus() {
                debug!(%window, "view focus failed: {e}");
            }
        }
    }

    /// Focus the view only if its window kept focus in the meantime.
    pub(super) fn focus_view_if_focused(&self, window: WindowId) {
        if self
            .registry
            .get(window)
            .is_some_and(|e| e.native.is_focused())
        {
            self.focus_view(window);
        }
    }

    /// Show every window if any is hidden or minimized, else hide them all.
    pub(super) fn toggle_show_hide(&mut self) {
        if self.registry.is_empty() {
            return;
        }
        let any_hidden = self.registry.iter().any(|e| e.is_hidden());
        if any_hidden {
            for entry in self.registry.iter() {
                if entry.native.is_minimized() {
                    entry.native.set_minimized(false);
                }
                entry.native.set_visible(true);
            }
            if let Some(target) = self.registry.target_window() {
                let due = self.now() + SHOW_SETTLE;
                self.timeline
                    .schedule(due, ScheduledTask::ForceToFront { window: target });
            }
            debug!(windows = self.registry.len(), "windows shown");
        } else {
            for entry in self.registry.iter() {
                entry.native.set_visible(false);
            }
            debug!(windows = self.registry.len(), "windows hidden");
        }
    }

    /// Maximize or restore `window`. Always-on-top is suspended while
    /// maximized.
    pub fn toggle_maximize(&mut self, window: WindowId) {
        let always_on_top = self.config.general.always_on_top;
        let Some(entry) = self.registry.get_mut(window) else {
            return;
        };
        if entry.native.is_maximized() {
            entry.native.set_maximized(false);
            if entry.on_top_override == Some(OnTopOverride::Suspended) {
                entry.on_top_override = None;
            }
            entry.apply_on_top(always_on_top);
            entry.native.focus();
        } else {
            entry.on_top_override = Some(OnTopOverride::Suspended);
            entry.apply_on_top(always_on_top);
            entry.native.set_maximized(true);
            entry.native.focus();
        }
    }

    /// Pin every visible window above the snipping tool's overlay.
    pub(super) fn begin_capture_override(&mut self) {
        let always_on_top = self.config.general.always_on_top;
        for entry in self.registry.iter_mut() {
            if entry.native.is_visible() {
                entry.on_top_override = Some(OnTopOverride::Forced);
                entry.apply_on_top(always_on_top);
            }
        }
        let due = self.now() + CAPTURE_OVERRIDE;
        self.timeline.schedule(due, ScheduledTask::EndCaptureOverride);
    }

    pub(super) fn end_capture_override(&mut self) {
        let windows = self.registry.list_windows();
        for window in windows {
            self.revert_on_top(window);
        }
    }

    /// Drop a forced always-on-top and fall back to the preference, or to
    /// the suspension while maximized.
    pub(super) fn revert_on_top(&mut self, window: WindowId) {
        let always_on_top = self.config.general.always_on_top;
        let Some(entry) = self.registry.get_mut(window) else {
            return;
        };
        if entry.on_top_override != Some(OnTopOverride::Forced) {
            return;
        }
        entry.on_top_override = if entry.native.is_maximized() {
            Some(OnTopOverride::Suspended)
        } else {
            None
        };
        entry.apply_on_top(always_on_top);
    }

    /// Re-apply always-on-top everywhere after the preference changed.
    pub(super) fn apply_on_top_all(&self) {
        let always_on_top = self.config.general.always_on_top;
        for entry in self.registry.iter() {
            entry.apply_on_top(always_on_top);
        }
    }
}
