//! Timeline processing.

use std::time::Instant;

use tracing::trace;

use crate::timeline::ScheduledTask;

use super::SessionManager;

impl SessionManager {
    /// Run every task and script timeout due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for outcome in self.views.expire(now) {
            self.on_script_outcome(outcome.window, outcome.request, outcome.result);
        }
        // Tasks scheduled while running are due no earlier than `now` plus
        // their delay, so a single pass cannot loop forever.
        for task in self.timeline.pop_due(now) {
            self.run_task(task, now);
        }
    }

    /// When the event loop must wake up next.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.timeline.next_deadline(), self.views.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn run_task(&mut self, task: ScheduledTask, now: Instant) {
        if let Some(window) = task.window() {
            if !self.registry.contains(window) {
                trace!(%window, "task for closed window dropped");
                return;
            }
        }
        match task {
            ScheduledTask::AnimationStep { window, generation } => {
                self.animation_step(window, generation, now)
            }
            ScheduledTask::RestoreScroll { window, offset } => self.restore_scroll(window, offset),
            ScheduledTask::CenterWindow { window } => self.center_window(window),
            ScheduledTask::FocusView { window } => self.focus_view_if_focused(window),
            ScheduledTask::ForceToFront { window } => self.request_force_to_front(window),
            ScheduledTask::RevertAlwaysOnTop { window } => self.revert_on_top(window),
            ScheduledTask::EndCaptureOverride => self.end_capture_override(),
            ScheduledTask::PollClipboard { attempt } => self.poll_clipboard(attempt),
            ScheduledTask::PasteImage { window, png } => self.paste_image(window, &png),
            ScheduledTask::PasteFile { window, file } => self.paste_file(window, &file),
            ScheduledTask::OpenPendingFile => {
                if let Some(file) = self.pending_file.take() {
                    self.open_file(file);
                }
            }
        }
    }
}
