//! Shortcut Dispatcher.
//!
//! Decides which bindings go to the OS and which stay local to the pages.
//! Show/hide is always registered with the OS since it must work while
//! every window is hidden.

use hover_common::{Action, PlatformError};
use hover_platform::{GlobalShortcuts, KeyCombo, ShortcutTable};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

pub struct ShortcutDispatcher {
    registrar: Box<dyn GlobalShortcuts>,
    table: ShortcutTable,
    global: bool,
}

impl ShortcutDispatcher {
    pub fn new(registrar: Box<dyn GlobalShortcuts>) -> Self {
        Self {
            registrar,
            table: ShortcutTable::default(),
            global: false,
        }
    }

    /// Replace every OS binding according to `table` and `global`.
    ///
    /// Returns the local table pages should intercept: empty when every
    /// binding is global.
    pub fn apply_bindings(&mut self, table: ShortcutTable, global: bool) -> Value {
        self.registrar.unregister_all();
        self.table = table;
        self.global = global;

        if let Some(combo) = self.table.combo_for(Action::ShowHide).cloned() {
            self.register(&combo, Action::ShowHide);
        } else {
            warn!("no binding for show/hide, windows can only be shown from the dock");
        }

        if global {
            let rest: Vec<(Action, KeyCombo)> = self
                .table
                .entries()
                .iter()
                .filter(|(action, _)| !action.is_reserved())
                .cloned()
                .collect();
            for (action, combo) in rest {
                self.register(&combo, action);
            }
        }

        info!(
            global,
            registered = self.registrar.registered().len(),
            "shortcuts applied"
        );
        self.local_payload()
    }

    fn register(&mut self, combo: &KeyCombo, action: Action) {
        match self.registrar.register(combo, action) {
            Ok(()) => debug!(%combo, action = action.config_name(), "registered global shortcut"),
            Err(PlatformError::ShortcutConflict {
                accelerator,
                reason,
            }) => {
                warn!(%accelerator, action = action.config_name(), "shortcut conflict: {reason}")
            }
            Err(e) => warn!(%combo, action = action.config_name(), "shortcut registration failed: {e}"),
        }
    }

    /// The `set-local-shortcuts` payload for the current scope.
    pub fn local_payload(&self) -> Value {
        if self.global {
            json!({})
        } else {
            self.table.without_reserved().to_payload()
        }
    }

    /// Actions fired through OS bindings since the last poll.
    pub fn poll(&mut self) -> Vec<Action> {
        self.registrar.poll()
    }

    /// Action for a key press intercepted inside a window. Always `None`
    /// while bindings are global, since the OS delivers those.
    pub fn lookup_local(&self, combo: &KeyCombo) -> Option<Action> {
        if self.global {
            return None;
        }
        self.table.lookup(combo).filter(|a| !a.is_reserved())
    }

    pub fn registered(&self) -> Vec<(KeyCombo, Action)> {
        self.registrar.registered()
    }

    pub fn is_global(&self) -> bool {
        self.global
    }

    pub fn table(&self) -> &ShortcutTable {
        &self.table
    }
}
