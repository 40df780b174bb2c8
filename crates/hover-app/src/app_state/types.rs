//! Internal constants for the app state module.

use std::time::Duration;

/// Longest the loop sleeps between polls of webview, shortcut, config
/// and instance events.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Grace period for background tasks at shutdown.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
