//! Graceful shutdown: close windows, stop the config watcher.

use super::core::HoverApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl HoverApp {
    /// Order matters: the session releases content views before the
    /// native windows holding them are dropped.
    pub(super) fn shutdown(&mut self) {
        if self.should_exit {
            return;
        }
        self.should_exit = true;
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut session) = self.session.take() {
            let open: Vec<_> = session.registry().list_windows();
            for id in open {
                session.close_window(id);
            }
        }
        self.chrome_views.clear();
        self.winit_ids.clear();
        self.windows.borrow_mut().clear();

        self.config_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        tracing::info!("Graceful shutdown complete");
    }
}
