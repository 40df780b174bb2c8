//! Core reload manager implementation.

use crate::schema::HoverConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use hover_common::ConfigError;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from the given path and start watching for changes.
    ///
    /// Returns the initial config and a watch receiver that will receive
    /// updated configs whenever the file changes on disk. A missing or
    /// unreadable file yields defaults.
    pub fn start(config_path: PathBuf) -> (HoverConfig, watch::Receiver<HoverConfig>) {
        let initial = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(ConfigError::FileNotFound(_)) => {
                info!("no config at {}, using defaults", config_path.display());
                HoverConfig::default()
            }
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                HoverConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial.clone());

        let manager = ReloadManager { config_path };
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial, config_rx)
    }

    /// Internal watch loop that reloads config on file changes.
    async fn run_watch_loop(&self, config_tx: watch::Sender<HoverConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match self.reload_config() {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => warn!("config reload failed: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Reload config from disk. Invalid configs are rejected so a bad edit
    /// never replaces a working config.
    fn reload_config(&self) -> Result<HoverConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
