//! OS-level (global) shortcut registration.
//!
//! [`GlobalShortcuts`] is the seam between the session's shortcut dispatcher
//! and the operating system. [`create_global_shortcuts`] returns the
//! hotkey-backed registrar, falling back to [`RecordingShortcuts`] when the
//! OS refuses to provide one (headless sessions, unsupported compositors).

mod os;
mod recording;

pub use os::OsShortcuts;
pub use recording::RecordingShortcuts;

use hover_common::{Action, PlatformError};

use crate::input::KeyCombo;

/// Registers key combinations with the OS and reports their activations.
pub trait GlobalShortcuts {
    /// Bind `combo` system-wide so it triggers `action`.
    ///
    /// A combination the OS rejects returns
    /// [`PlatformError::ShortcutConflict`]; the registrar stays usable.
    fn register(&mut self, combo: &KeyCombo, action: Action) -> Result<(), PlatformError>;

    /// Remove every binding this registrar holds. Idempotent.
    fn unregister_all(&mut self);

    /// Bindings currently held, in registration order.
    fn registered(&self) -> Vec<(KeyCombo, Action)>;

    /// Actions whose bindings fired since the last call.
    fn poll(&mut self) -> Vec<Action>;
}

/// Create the platform registrar.
pub fn create_global_shortcuts() -> Box<dyn GlobalShortcuts> {
    match OsShortcuts::new() {
        Ok(shortcuts) => Box::new(shortcuts),
        Err(e) => {
            tracing::warn!("global shortcuts unavailable, keys will only work in-window: {e}");
            Box::new(RecordingShortcuts::new())
        }
    }
}
