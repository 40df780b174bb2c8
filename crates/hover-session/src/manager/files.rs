//! Files opened from the command line or forwarded by a second launch.

use std::time::Duration;

use hover_common::WindowId;
use hover_platform::PastedFile;
use hover_webview::scripts;
use tracing::{debug, info, warn};

use crate::registry::OnTopOverride;
use crate::timeline::ScheduledTask;

use super::SessionManager;

pub(super) const FILE_PASTE_DELAY: Duration = Duration::from_millis(300);
pub(super) const FILE_ON_TOP_REVERT_DELAY: Duration = Duration::from_millis(200);
/// Wait after the content finished loading before pasting a pending file.
pub(super) const PENDING_FILE_DELAY: Duration = Duration::from_millis(1000);

impl SessionManager {
    /// Paste `file` into the focused window, else the newest one.
    ///
    /// With no window or no content view yet, the file is kept and pasted
    /// once a content page finishes loading. A newer file replaces it.
    pub fn open_file(&mut self, file: PastedFile) {
        let target = self
            .registry
            .focused_window()
            .or_else(|| self.registry.newest_window())
            .filter(|w| self.views.has_attached(*w));
        let Some(window) = target else {
            info!(name = %file.name, "no content ready, file kept for later");
            self.pending_file = Some(file);
            return;
        };
        info!(%window, name = %file.name, mime = file.mime, bytes = file.bytes.len(), "opening file");

        if let Some(entry) = self.registry.get_mut(window) {
            entry.on_top_override = Some(OnTopOverride::Forced);
        }
        self.request_force_to_front(window);

        let now = self.now();
        self.timeline.schedule(
            now + FILE_PASTE_DELAY,
            ScheduledTask::PasteFile { window, file },
        );
        self.timeline.schedule(
            now + FILE_PASTE_DELAY + FILE_ON_TOP_REVERT_DELAY,
            ScheduledTask::RevertAlwaysOnTop { window },
        );
    }

    /// Another launch was redirected here: bring the newest window forward
    /// and paste whatever files it was given.
    pub fn on_second_instance(&mut self, files: Vec<PastedFile>) {
        match self.registry.newest_window() {
            Some(window) => {
                debug!(%window, files = files.len(), "second launch");
                self.request_force_to_front(window);
            }
            None => debug!("second launch with no window open"),
        }
        for file in files {
            self.open_file(file);
        }
    }

    /// Content in some window finished loading; schedule the pending file.
    pub(super) fn schedule_pending_file(&mut self) {
        if self.pending_file.is_none() {
            return;
        }
        let due = self.now() + PENDING_FILE_DELAY;
        self.timeline.schedule(due, ScheduledTask::OpenPendingFile);
    }

    pub fn has_pending_file(&self) -> bool {
        self.pending_file.is_some()
    }

    pub(super) fn paste_file(&mut self, window: WindowId, file: &PastedFile) {
        self.focus_view(window);
        let now = self.now();
        let script = scripts::paste_file(&file.name, file.mime, &file.bytes);
        if let Err(e) = self.views.run_script(window, &script, now) {
            warn!(%window, name = %file.name, "file paste failed: {e}");
        }
    }
}
