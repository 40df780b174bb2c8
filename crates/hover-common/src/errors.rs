use std::path::PathBuf;

use crate::types::{ViewId, WindowId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),

    #[error("unknown setting: {0}")]
    UnknownSetting(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("window error: {0}")]
    WindowError(String),

    #[error("shortcut '{accelerator}' rejected: {reason}")]
    ShortcutConflict { accelerator: String, reason: String },

    #[error("capture tool error: {0}")]
    CaptureError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failure of an operation on an embedded content view.
///
/// These are transient: the view navigated or went away mid-call. Callers
/// log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("script failed in {view}: {message}")]
    ScriptFailed { view: ViewId, message: String },

    #[error("{0} was destroyed")]
    Destroyed(ViewId),

    #[error("script in {0} timed out")]
    Timeout(ViewId),

    #[error("no view attached to {0}")]
    NotAttached(WindowId),

    #[error("webview error: {0}")]
    Backend(String),
}

/// A layout-mode request that could not apply.
///
/// Every variant is a silent no-op for callers; the window state is left
/// exactly as it was before the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("canvas resizing is disabled")]
    ResizingDisabled,

    #[error("{0} no longer exists")]
    WindowGone(WindowId),

    #[error("{0} is already in the requested layout")]
    AlreadyInMode(WindowId),

    #[error("{0} has no content view to resize")]
    NoView(WindowId),

    #[error("no display geometry available")]
    NoDisplay,
}

#[derive(Debug, thiserror::Error)]
pub enum HoverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
