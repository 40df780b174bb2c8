//! Registrar backed by the `global-hotkey` crate.
//!
//! Hotkey activations are delivered on the crate's global channel; the app
//! loop drains them through [`GlobalShortcuts::poll`]. On Windows and macOS
//! the manager must live on the thread running the event loop.

use std::collections::HashMap;

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use hover_common::{Action, PlatformError};

use super::GlobalShortcuts;
use crate::input::{KeyCombo, MOD_ALT, MOD_CTRL, MOD_SHIFT, MOD_SUPER};

pub struct OsShortcuts {
    manager: GlobalHotKeyManager,
    active: Vec<(HotKey, KeyCombo, Action)>,
    by_id: HashMap<u32, Action>,
}

impl OsShortcuts {
    pub fn new() -> Result<Self, PlatformError> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| PlatformError::NotSupported(format!("global hotkeys: {e}")))?;
        Ok(Self {
            manager,
            active: Vec::new(),
            by_id: HashMap::new(),
        })
    }
}

impl GlobalShortcuts for OsShortcuts {
    fn register(&mut self, combo: &KeyCombo, action: Action) -> Result<(), PlatformError> {
        let hotkey = to_hotkey(combo)?;
        self.manager
            .register(hotkey)
            .map_err(|e| PlatformError::ShortcutConflict {
                accelerator: combo.to_string(),
                reason: e.to_string(),
            })?;
        self.by_id.insert(hotkey.id(), action);
        self.active.push((hotkey, combo.clone(), action));
        tracing::debug!(shortcut = %combo, action = action.config_name(), "registered global shortcut");
        Ok(())
    }

    fn unregister_all(&mut self) {
        for (hotkey, combo, _) in self.active.drain(..) {
            if let Err(e) = self.manager.unregister(hotkey) {
                tracing::warn!(shortcut = %combo, "failed to unregister global shortcut: {e}");
            }
        }
        self.by_id.clear();
    }

    fn registered(&self) -> Vec<(KeyCombo, Action)> {
        self.active
            .iter()
            .map(|(_, combo, action)| (combo.clone(), *action))
            .collect()
    }

    fn poll(&mut self) -> Vec<Action> {
        let mut fired = Vec::new();
        while let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            if event.state != HotKeyState::Pressed {
                continue;
            }
            if let Some(action) = self.by_id.get(&event.id) {
                fired.push(*action);
            }
        }
        fired
    }
}

impl Drop for OsShortcuts {
    fn drop(&mut self) {
        self.unregister_all();
    }
}

fn to_hotkey(combo: &KeyCombo) -> Result<HotKey, PlatformError> {
    let code = code_for_key(&combo.key).ok_or_else(|| PlatformError::ShortcutConflict {
        accelerator: combo.to_string(),
        reason: format!("key {:?} cannot be bound globally", combo.key),
    })?;
    let mods = modifiers_for(combo);
    Ok(HotKey::new((!mods.is_empty()).then_some(mods), code))
}

fn modifiers_for(combo: &KeyCombo) -> Modifiers {
    let mut mods = Modifiers::empty();
    if combo.has(MOD_CTRL) {
        mods |= Modifiers::CONTROL;
    }
    if combo.has(MOD_ALT) {
        mods |= Modifiers::ALT;
    }
    if combo.has(MOD_SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if combo.has(MOD_SUPER) {
        mods |= Modifiers::SUPER;
    }
    mods
}

/// Physical key code for a normalized key name.
fn code_for_key(key: &str) -> Option<Code> {
    let code = match key {
        "A" => Code::KeyA,
        "B" => Code::KeyB,
        "C" => Code::KeyC,
        "D" => Code::KeyD,
        "E" => Code::KeyE,
        "F" => Code::KeyF,
        "G" => Code::KeyG,
        "H" => Code::KeyH,
        "I" => Code::KeyI,
        "J" => Code::KeyJ,
        "K" => Code::KeyK,
        "L" => Code::KeyL,
        "M" => Code::KeyM,
        "N" => Code::KeyN,
        "O" => Code::KeyO,
        "P" => Code::KeyP,
        "Q" => Code::KeyQ,
        "R" => Code::KeyR,
        "S" => Code::KeyS,
        "T" => Code::KeyT,
        "U" => Code::KeyU,
        "V" => Code::KeyV,
        "W" => Code::KeyW,
        "X" => Code::KeyX,
        "Y" => Code::KeyY,
        "Z" => Code::KeyZ,
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,
        "F1" => Code::F1,
        "F2" => Code::F2,
        "F3" => Code::F3,
        "F4" => Code::F4,
        "F5" => Code::F5,
        "F6" => Code::F6,
        "F7" => Code::F7,
        "F8" => Code::F8,
        "F9" => Code::F9,
        "F10" => Code::F10,
        "F11" => Code::F11,
        "F12" => Code::F12,
        "Space" => Code::Space,
        "Enter" => Code::Enter,
        "Escape" => Code::Escape,
        "Tab" => Code::Tab,
        "Backspace" => Code::Backspace,
        "Delete" => Code::Delete,
        "Insert" => Code::Insert,
        "Home" => Code::Home,
        "End" => Code::End,
        "PageUp" => Code::PageUp,
        "PageDown" => Code::PageDown,
        "Up" => Code::ArrowUp,
        "Down" => Code::ArrowDown,
        "Left" => Code::ArrowLeft,
        "Right" => Code::ArrowRight,
        "." => Code::Period,
        "," => Code::Comma,
        "/" => Code::Slash,
        "\\" => Code::Backslash,
        ";" => Code::Semicolon,
        "'" => Code::Quote,
        "[" => Code::BracketLeft,
        "]" => Code::BracketRight,
        "-" => Code::Minus,
        "=" | "+" => Code::Equal,
        "`" => Code::Backquote,
        _ => return None,
    };
    Some(code)
}
