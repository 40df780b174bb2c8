//! Polling of webview, shortcut, config and instance events, and wake-up
//! scheduling.

use std::time::Instant;

use hover_platform::read_pasted_file;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::HoverApp;
use super::types::POLL_INTERVAL;

impl HoverApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_webview_events();
        self.poll_config_reload();
        self.poll_other_instances();

        let now = Instant::now();
        if let Some(session) = self.session.as_mut() {
            session.poll_global_shortcuts();
            session.tick(now);
        }

        self.process_requests(event_loop);
        if self.should_exit {
            return;
        }

        let mut wake = now + POLL_INTERVAL;
        if let Some(deadline) = self.session.as_ref().and_then(|s| s.next_deadline()) {
            wake = wake.min(deadline);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    /// Handle launches that were redirected to this instance.
    fn poll_other_instances(&mut self) {
        let (Some(server), Some(session)) = (self.instance.as_ref(), self.session.as_mut()) else {
            return;
        };
        let messages = server.poll();
        for message in messages {
            let files = message
                .files
                .iter()
                .filter_map(|path| match read_pasted_file(path) {
                    Ok(file) => Some(file),
                    Err(e) => {
                        tracing::warn!("Cannot open {}: {e}", path.display());
                        None
                    }
                })
                .collect();
            session.on_second_instance(files);
        }
    }

    /// Apply a changed config file to the running session.
    fn poll_config_reload(&mut self) {
        let Some(rx) = self.config_rx.as_mut() else {
            return;
        };
        if !rx.has_changed().unwrap_or(false) {
            return;
        }
        let reloaded = rx.borrow_and_update().clone();
        self.file_url = reloaded.content.url.clone();
        let reloaded = self.with_url_override(reloaded);
        if let Some(session) = self.session.as_mut() {
            tracing::info!("Applying reloaded config");
            session.apply_settings(reloaded);
        } else {
            self.config = reloaded;
        }
    }
}
