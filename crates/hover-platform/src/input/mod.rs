//! Key combinations and the action binding table.

mod key_combo;
mod shortcut_table;

pub use key_combo::{KeyCombo, MOD_ALT, MOD_CTRL, MOD_SHIFT, MOD_SUPER};
pub use shortcut_table::ShortcutTable;
