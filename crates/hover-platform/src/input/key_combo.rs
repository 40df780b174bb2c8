use crate::keymap::{accelerator_to_string, parse_accelerator, Accelerator, Modifier};
use hover_common::PlatformError;

pub const MOD_CTRL: u8 = 0b0001;
pub const MOD_ALT: u8 = 0b0010;
pub const MOD_SHIFT: u8 = 0b0100;
pub const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask so comparing two combos never depends
/// on the order modifiers were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "G", "Enter", "F1").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`Accelerator`].
    pub fn from_accelerator(accel: &Accelerator) -> Self {
        let mods = accel.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: accel.key.clone(),
        }
    }

    /// Parse an accelerator string straight into a combo.
    pub fn parse(s: &str) -> Result<Self, PlatformError> {
        parse_accelerator(s).map(|accel| Self::from_accelerator(&accel))
    }

    /// Build from raw modifier booleans and a normalized key name.
    ///
    /// Use this to convert winit keyboard events into a `KeyCombo` for lookup.
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self { mods, key }
    }

    pub fn has(&self, modifier_bit: u8) -> bool {
        self.mods & modifier_bit != 0
    }

    /// Reconstruct the [`Accelerator`] in canonical modifier order.
    pub fn to_accelerator(&self) -> Accelerator {
        let modifiers = [
            (MOD_CTRL, Modifier::Ctrl),
            (MOD_ALT, Modifier::Alt),
            (MOD_SHIFT, Modifier::Shift),
            (MOD_SUPER, Modifier::Super),
        ]
        .into_iter()
        .filter(|(bit, _)| self.has(*bit))
        .map(|(_, m)| m)
        .collect();
        Accelerator {
            modifiers,
            key: self.key.clone(),
        }
    }
}

impl std::fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&accelerator_to_string(&self.to_accelerator()))
    }
}
