//! OS snipping-tool launcher.
//!
//! The tool is started detached and writes its result to the clipboard.
//! Callers poll [`ScreenCapture::poll`] until an image shows up or they give
//! up.

use std::process::{Child, Command};

use hover_common::PlatformError;

use crate::clipboard::Clipboard;

/// Result of one poll attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturePoll {
    Pending,
    /// PNG-encoded screenshot taken from the clipboard.
    Image(Vec<u8>),
}

pub trait ScreenCapture {
    /// Clear the clipboard and launch the snipping tool.
    fn begin(&mut self) -> Result<(), PlatformError>;

    /// Check once for a finished capture.
    fn poll(&mut self) -> CapturePoll;

    /// Stop tracking the current capture.
    fn abandon(&mut self);
}

/// Program and arguments of the platform snipping tool.
pub fn capture_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("screencapture", &["-i", "-c"])
    } else if cfg!(target_os = "windows") {
        ("explorer", &["ms-screenclip:"])
    } else {
        ("gnome-screenshot", &["-a", "-c"])
    }
}

/// [`ScreenCapture`] that drives the OS snipping tool and reads the
/// clipboard.
#[derive(Default)]
pub struct SnippingTool {
    clipboard: Option<Clipboard>,
    child: Option<Child>,
}

impl SnippingTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard, PlatformError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new()?);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| PlatformError::ClipboardError("clipboard unavailable".into()))
    }

    fn reap(&mut self) {
        if let Some(child) = self.child.as_mut() {
            match child.try_wait() {
                Ok(Some(status)) => {
                    tracing::debug!(%status, "snipping tool exited");
                    self.child = None;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("failed to query snipping tool: {e}");
                    self.child = None;
                }
            }
        }
    }
}

impl ScreenCapture for SnippingTool {
    fn begin(&mut self) -> Result<(), PlatformError> {
        if let Err(e) = self.clipboard()?.clear() {
            tracing::warn!("could not clear clipboard before capture: {e}");
        }

        let (program, args) = capture_command();
        let child = Command::new(program)
            .args(args)
            .spawn()
            .map_err(|e| PlatformError::CaptureError(format!("{program}: {e}")))?;
        tracing::info!(program, "launched snipping tool");
        self.child = Some(child);
        Ok(())
    }

    fn poll(&mut self) -> CapturePoll {
        self.reap();
        let image = match self.clipboard() {
            Ok(clipboard) => clipboard.get_image_png(),
            Err(e) => Err(e),
        };
        match image {
            Ok(Some(png)) => CapturePoll::Image(png),
            Ok(None) => CapturePoll::Pending,
            Err(e) => {
                tracing::debug!("clipboard image not readable yet: {e}");
                CapturePoll::Pending
            }
        }
    }

    fn abandon(&mut self) {
        self.reap();
        self.child = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_matches_platform() {
        let (program, args) = capture_command();
        if cfg!(target_os = "macos") {
            assert_eq!(program, "screencapture");
            assert_eq!(args, ["-i", "-c"]);
        } else if cfg!(target_os = "windows") {
            assert_eq!(program, "explorer");
        } else {
            assert_eq!(program, "gnome-screenshot");
            assert_eq!(args, ["-a", "-c"]);
        }
    }
}
