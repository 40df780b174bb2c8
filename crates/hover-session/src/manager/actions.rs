//! Shortcut actions.

use std::time::Duration;

use hover_common::{Action, LayoutMode, WindowId};
use hover_platform::{CapturePoll, KeyCombo};
use hover_webview::{scripts, LocalPage};
use tracing::{debug, info, warn};

use crate::timeline::ScheduledTask;

use super::{AppRequest, SessionManager};

pub(super) const CLIPBOARD_POLL_INTERVAL: Duration = Duration::from_millis(500);
pub(super) const CLIPBOARD_POLL_ATTEMPTS: u32 = 60;
pub(super) const PASTE_DELAY: Duration = Duration::from_millis(200);
pub(super) const ON_TOP_REVERT_DELAY: Duration = Duration::from_millis(500);

impl SessionManager {
    /// Run a shortcut action.
    ///
    /// Show/hide and screenshots fall back to the last focused window.
    /// Every other window action needs a focused Hover window and is
    /// ignored without one.
    pub fn request_shortcut_action(&mut self, action: Action) {
        debug!(action = action.config_name(), "shortcut action");
        match action {
            Action::ShowHide => self.toggle_show_hide(),
            Action::Quit => self.request(AppRequest::Quit),
            Action::NewWindow => self.request(AppRequest::NewWindow),
            Action::Screenshot => self.begin_screenshot(),
            Action::CloseWindow => {
                let Some(window) = self.registry.focused_window() else {
                    debug!("close ignored, no focused window");
                    return;
                };
                if self.registry.len() > 1 {
                    self.close_window(window);
                } else if let Some(entry) = self.registry.get(window) {
                    entry.native.set_visible(false);
                }
            }
            Action::Refresh => {
                let Some(window) = self.registry.focused_window() else {
                    return;
                };
                if let Some(view) = self.views.attached(window) {
                    if let Err(e) = view.reload() {
                        warn!(%window, "reload failed: {e}");
                    }
                }
            }
            Action::NewChatPro => {
                self.run_page_action(&scripts::new_chat(scripts::ChatModel::Pro))
            }
            Action::NewChatFlash => {
                self.run_page_action(&scripts::new_chat(scripts::ChatModel::Flash))
            }
            Action::Search => self.run_page_action(&scripts::search()),
            Action::ShowInstructions => {
                if let Some(window) = self.registry.focused_window() {
                    self.show_instructions(window);
                }
            }
        }
    }

    /// Shortcut fired by the OS since the last poll.
    pub fn poll_global_shortcuts(&mut self) {
        for action in self.shortcuts.poll() {
            self.request_shortcut_action(action);
        }
    }

    /// Key press seen by a window while bindings are local.
    ///
    /// Returns `true` when the press was a shortcut and has been handled.
    pub fn handle_local_key(&mut self, combo: &KeyCombo) -> bool {
        match self.shortcuts.lookup_local(combo) {
            Some(action) => {
                self.request_shortcut_action(action);
                true
            }
            None => false,
        }
    }

    fn run_page_action(&mut self, script: &str) {
        let Some(window) = self.registry.focused_window() else {
            debug!("page action ignored, no focused window");
            return;
        };
        if let Some(entry) = self.registry.get(window) {
            if entry.native.is_minimized() {
                entry.native.set_minimized(false);
            }
            entry.native.set_visible(true);
            entry.native.focus();
        }
        self.focus_view(window);
        let now = self.now();
        if let Err(e) = self.views.run_script(window, script, now) {
            warn!(%window, "page action failed: {e}");
        }
    }

    /// Swap the content for the walkthrough page.
    ///
    /// The view is parked, not destroyed, so finishing the walkthrough
    /// brings it back exactly as it was.
    pub fn show_instructions(&mut self, window: WindowId) {
        let Some(entry) = self.registry.get(window) else {
            return;
        };
        if let Err(e) = entry.native.show_page(LocalPage::Onboarding) {
            warn!(%window, "failed to show onboarding: {e}");
            return;
        }
        if let Some(view) = self.views.detach(window) {
            self.views.park(window, view);
        }
        if let Err(e) = self.request_layout_mode(window, LayoutMode::Normal) {
            debug!(%window, "layout left as is: {e}");
        }
    }

    fn begin_screenshot(&mut self) {
        if self.capture_state.active {
            debug!("screenshot already in progress");
            return;
        }
        self.capture_state.active = true;
        self.capture_state.target = self.registry.target_window();
        self.begin_capture_override();

        if let Err(e) = self.capture.begin() {
            warn!("failed to start screen capture: {e}");
            self.capture_state.active = false;
            self.capture_state.target = None;
            self.end_capture_override();
            return;
        }
        info!(target = ?self.capture_state.target, "screen capture started");
        let due = self.now() + CLIPBOARD_POLL_INTERVAL;
        self.timeline
            .schedule(due, ScheduledTask::PollClipboard { attempt: 1 });
    }

    pub(super) fn poll_clipboard(&mut self, attempt: u32) {
        if !self.capture_state.active {
            return;
        }
        match self.capture.poll() {
            CapturePoll::Image(png) => {
                self.capture_state.active = false;
                self.deliver_screenshot(png);
            }
            CapturePoll::Pending if attempt >= CLIPBOARD_POLL_ATTEMPTS => {
                info!(attempt, "no screenshot on the clipboard, giving up");
                self.capture.abandon();
                self.capture_state.active = false;
            }
            CapturePoll::Pending => {
                let due = self.now() + CLIPBOARD_POLL_INTERVAL;
                self.timeline.schedule(
                    due,
                    ScheduledTask::PollClipboard {
                        attempt: attempt + 1,
                    },
                );
            }
        }
    }

    fn deliver_screenshot(&mut self, png: Vec<u8>) {
        let target = self
            .capture_state
            .target
            .take()
            .filter(|w| self.registry.contains(*w))
            .or_else(|| self.registry.target_window());
        let Some(window) = target else {
            warn!("screenshot taken but no window to paste into");
            return;
        };
        info!(%window, bytes = png.len(), "screenshot captured");

        if let Some(entry) = self.registry.get_mut(window) {
            entry.on_top_override = Some(crate::registry::OnTopOverride::Forced);
        }
        self.request_force_to_front(window);

        let now = self.now();
        self.timeline
            .schedule(now + PASTE_DELAY, ScheduledTask::PasteImage { window, png });
        self.timeline.schedule(
            now + PASTE_DELAY + ON_TOP_REVERT_DELAY,
            ScheduledTask::RevertAlwaysOnTop { window },
        );
    }

    pub(super) fn paste_image(&mut self, window: WindowId, png: &[u8]) {
        self.focus_view(window);
        let now = self.now();
        if let Err(e) = self
            .views
            .run_script(window, &scripts::paste_image(png), now)
        {
            warn!(%window, "screenshot paste failed: {e}");
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.capture_state.active
    }
}
