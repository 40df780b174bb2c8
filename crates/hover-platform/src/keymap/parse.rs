use hover_common::PlatformError;

use super::types::{Accelerator, Modifier};

/// Parses an accelerator string such as `"Alt+G"`, `"Command+Alt+S"` or
/// `"CmdOrCtrl+Shift+N"` into an [`Accelerator`].
///
/// Modifier names are case-insensitive:
/// - `Command` / `Cmd`: `Super` on macOS, `Ctrl` elsewhere
/// - `CommandOrControl` / `CmdOrCtrl`: same as `Command`
/// - `Control` / `Ctrl`, `Alt` / `Option`, `Shift`
/// - `Super` / `Meta` / `Win`
///
/// The last token is always the key, even when it spells a modifier.
pub fn parse_accelerator(s: &str) -> Result<Accelerator, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((key_token, modifier_tokens)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty accelerator".into()));
    };
    if key_token.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "accelerator {s:?} has no key"
        )));
    }

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(Accelerator {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

fn command_modifier() -> Modifier {
    if cfg!(target_os = "macos") {
        Modifier::Super
    } else {
        Modifier::Ctrl
    }
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" | "cmdorctrl" | "commandorcontrol" => Some(command_modifier()),
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "backslash" => "\\".into(),
        "plus" => "+".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "insert" => "Insert".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => lower,
            }
        }
    }
}
