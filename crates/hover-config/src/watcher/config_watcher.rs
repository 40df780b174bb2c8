//! Core config file watcher implementation.

use hover_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Quiet period that coalesces bursts of writes into one reload.
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends notifications.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Ok(Self { path })
    }

    /// Path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch the config file, sending `()` on `tx` after each debounced change.
    ///
    /// The parent directory is watched so editors that save by renaming a
    /// temp file over the original are still noticed. Runs until the
    /// underlying watcher stops.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone());
        let file_name = self.path.file_name().map(OsString::from).unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        let (raw_tx, mut raw_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) if touches_file(&event, &file_name) => {
                    debug!("config file change detected");
                    let _ = raw_tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;

        while raw_rx.recv().await.is_some() {
            // Restart the quiet period on every further signal
            loop {
                match tokio::time::timeout(DEBOUNCE, raw_rx.recv()).await {
                    Ok(Some(())) => continue,
                    Ok(None) => return Ok(()),
                    Err(_) => break,
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// Whether a notify event is a write or creation of the watched file.
fn touches_file(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}
