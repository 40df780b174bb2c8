use std::collections::HashMap;

use hover_common::Action;
use hover_config::schema::ShortcutConfig;
use serde_json::{Map, Value};

use super::key_combo::KeyCombo;

/// The live binding table: one key combination per action.
///
/// Built from [`ShortcutConfig`] at startup and rebuilt whenever a shortcut
/// setting changes. Used both to register OS-level bindings and to look up
/// locally intercepted key presses.
#[derive(Debug, Clone, Default)]
pub struct ShortcutTable {
    entries: Vec<(Action, KeyCombo)>,
    by_combo: HashMap<KeyCombo, Action>,
}

impl ShortcutTable {
    /// Build the table from the shortcut config section.
    ///
    /// Invalid accelerator strings are logged as warnings and skipped, as are
    /// combos already claimed by an earlier action.
    pub fn from_config(config: &ShortcutConfig) -> Self {
        let mut table = Self::default();
        for (action, accel) in config.bindings() {
            if accel.trim().is_empty() {
                continue;
            }
            match KeyCombo::parse(accel) {
                Ok(combo) => {
                    if let Some(existing) = table.by_combo.get(&combo) {
                        tracing::warn!(
                            "shortcut '{accel}' for {} already bound to {}",
                            action.config_name(),
                            existing.config_name()
                        );
                        continue;
                    }
                    table.by_combo.insert(combo.clone(), action);
                    table.entries.push((action, combo));
                }
                Err(e) => {
                    tracing::warn!("invalid shortcut '{accel}' for {}: {e}", action.config_name());
                }
            }
        }
        table
    }

    /// Look up the action bound to a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.by_combo.get(combo).copied()
    }

    /// The combination bound to an action, if any.
    pub fn combo_for(&self, action: Action) -> Option<&KeyCombo> {
        self.entries
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, combo)| combo)
    }

    /// All bindings in table order.
    pub fn entries(&self) -> &[(Action, KeyCombo)] {
        &self.entries
    }

    /// Copy of the table without the reserved show/hide action.
    pub fn without_reserved(&self) -> ShortcutTable {
        let entries: Vec<(Action, KeyCombo)> = self
            .entries
            .iter()
            .filter(|(action, _)| !action.is_reserved())
            .cloned()
            .collect();
        let by_combo = entries
            .iter()
            .map(|(action, combo)| (combo.clone(), *action))
            .collect();
        ShortcutTable { entries, by_combo }
    }

    /// JSON object `{actionName: accelerator}` sent to pages that intercept
    /// keys locally.
    pub fn to_payload(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(action, combo)| (action.config_name().to_string(), Value::from(combo.to_string())))
            .collect();
        Value::Object(map)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
