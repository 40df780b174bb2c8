//! Work the session asks of the app.

use winit::event_loop::ActiveEventLoop;

use hover_config::{save_config, save_config_to_path};
use hover_session::AppRequest;

use super::core::HoverApp;

impl HoverApp {
    pub(super) fn process_requests(&mut self, event_loop: &ActiveEventLoop) {
        let requests = match self.session.as_mut() {
            Some(session) => session.drain_requests(),
            None => return,
        };

        for request in requests {
            match request {
                AppRequest::WindowClosed(id) => self.forget_window(id),
                AppRequest::NewWindow => {
                    if !self.open_window(event_loop) {
                        tracing::warn!("New window could not be opened");
                    }
                }
                AppRequest::SaveConfig => self.persist_config(),
                AppRequest::Quit => {
                    self.shutdown();
                    event_loop.exit();
                    return;
                }
            }
        }
    }

    /// Persist the session's settings, keeping the file's own content address.
    fn persist_config(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let mut config = session.config().clone();
        config.content.url = self.file_url.clone();

        let result = match &self.config_path {
            Some(path) => save_config_to_path(&config, path),
            None => save_config(&config),
        };
        match result {
            Ok(()) => tracing::debug!("Config saved"),
            Err(e) => tracing::error!("Failed to save config: {e}"),
        }
    }
}
