//! In-memory registrar.
//!
//! Used where the OS offers no global hotkey service, and by tests that need
//! to observe exactly what was registered.

use std::collections::HashSet;

use hover_common::{Action, PlatformError};

use super::GlobalShortcuts;
use crate::input::KeyCombo;

/// Records registrations without touching the OS.
///
/// Combos added with [`reject`](Self::reject) fail registration the same way
/// a combination reserved by the OS would. [`press`](Self::press) queues an
/// activation for the next [`poll`](GlobalShortcuts::poll).
#[derive(Debug, Default)]
pub struct RecordingShortcuts {
    bindings: Vec<(KeyCombo, Action)>,
    rejected: HashSet<KeyCombo>,
    pressed: Vec<Action>,
    unregister_calls: usize,
}

impl RecordingShortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make registration of `combo` fail from now on.
    pub fn reject(&mut self, combo: KeyCombo) {
        self.rejected.insert(combo);
    }

    /// Simulate the OS reporting `combo`. Ignored when it is not registered.
    pub fn press(&mut self, combo: &KeyCombo) {
        if let Some((_, action)) = self.bindings.iter().find(|(c, _)| c == combo) {
            self.pressed.push(*action);
        }
    }

    /// How many times `unregister_all` has run.
    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls
    }
}

impl GlobalShortcuts for RecordingShortcuts {
    fn register(&mut self, combo: &KeyCombo, action: Action) -> Result<(), PlatformError> {
        if self.rejected.contains(combo) || self.bindings.iter().any(|(c, _)| c == combo) {
            return Err(PlatformError::ShortcutConflict {
                accelerator: combo.to_string(),
                reason: "combination is reserved".into(),
            });
        }
        self.bindings.push((combo.clone(), action));
        Ok(())
    }

    fn unregister_all(&mut self) {
        self.bindings.clear();
        self.unregister_calls += 1;
    }

    fn registered(&self) -> Vec<(KeyCombo, Action)> {
        self.bindings.clone()
    }

    fn poll(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(s: &str) -> KeyCombo {
        KeyCombo::parse(s).unwrap()
    }

    #[test]
    fn register_and_list() {
        let mut shortcuts = RecordingShortcuts::new();
        shortcuts.register(&combo("Alt+G"), Action::ShowHide).unwrap();
        shortcuts.register(&combo("Alt+N"), Action::NewWindow).unwrap();
        let registered = shortcuts.registered();
        assert_eq!(registered.len(), 2);
        assert_eq!(registered[0], (combo("Alt+G"), Action::ShowHide));
    }

    #[test]
    fn rejected_combo_returns_conflict() {
        let mut shortcuts = RecordingShortcuts::new();
        shortcuts.reject(combo("Control+Alt+Delete"));
        let err = shortcuts
            .register(&combo("Control+Alt+Delete"), Action::Quit)
            .unwrap_err();
        assert!(matches!(err, PlatformError::ShortcutConflict { .. }));
        assert!(shortcuts.registered().is_empty());
    }

    #[test]
    fn double_registration_conflicts() {
        let mut shortcuts = RecordingShortcuts::new();
        shortcuts.register(&combo("Alt+G"), Action::ShowHide).unwrap();
        assert!(shortcuts.register(&combo("Alt+G"), Action::Search).is_err());
    }

    #[test]
    fn unregister_all_is_idempotent() {
        let mut shortcuts = RecordingShortcuts::new();
        shortcuts.register(&combo("Alt+G"), Action::ShowHide).unwrap();
        shortcuts.unregister_all();
        shortcuts.unregister_all();
        assert!(shortcuts.registered().is_empty());
        assert_eq!(shortcuts.unregister_calls(), 2);
    }

    #[test]
    fn press_reports_bound_action_once() {
        let mut shortcuts = RecordingShortcuts::new();
        shortcuts.register(&combo("Alt+R"), Action::Refresh).unwrap();
        shortcuts.press(&combo("Alt+R"));
        shortcuts.press(&combo("Alt+Z"));
        assert_eq!(shortcuts.poll(), vec![Action::Refresh]);
        assert!(shortcuts.poll().is_empty());
    }
}
