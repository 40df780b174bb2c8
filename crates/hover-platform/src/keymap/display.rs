use super::types::{Accelerator, Modifier};

/// Converts an [`Accelerator`] into a platform-appropriate label.
///
/// On macOS, modifiers are shown as symbols. On other platforms they are
/// text names joined by `+`.
pub fn accelerator_to_display(accel: &Accelerator) -> String {
    let mac = cfg!(target_os = "macos");
    let mut parts: Vec<String> = accel
        .modifiers
        .iter()
        .map(|m| display_modifier(*m, mac).to_string())
        .collect();
    parts.push(display_key(&accel.key, mac));
    parts.join(if mac { "" } else { "+" })
}

/// Canonical accelerator string, the form pages receive in the local
/// shortcut table and that [`parse_accelerator`](super::parse_accelerator)
/// accepts back.
pub fn accelerator_to_string(accel: &Accelerator) -> String {
    let mut parts: Vec<&str> = accel
        .modifiers
        .iter()
        .map(|m| match m {
            Modifier::Ctrl => "Control",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        })
        .collect();
    let key = match accel.key.as_str() {
        "+" => "Plus",
        other => other,
    };
    parts.push(key);
    parts.join("+")
}

fn display_modifier(modifier: Modifier, mac: bool) -> &'static str {
    match (modifier, mac) {
        (Modifier::Ctrl, true) => "\u{2303}",
        (Modifier::Alt, true) => "\u{2325}",
        (Modifier::Shift, true) => "\u{21E7}",
        (Modifier::Super, true) => "\u{2318}",
        (Modifier::Ctrl, false) => "Ctrl",
        (Modifier::Alt, false) => "Alt",
        (Modifier::Shift, false) => "Shift",
        (Modifier::Super, false) if cfg!(target_os = "windows") => "Win",
        (Modifier::Super, false) => "Super",
    }
}

fn display_key(key: &str, mac: bool) -> String {
    if !mac {
        return key.to_string();
    }
    match key {
        "Enter" => "\u{21A9}".into(),
        "Backspace" => "\u{232B}".into(),
        "Escape" => "\u{238B}".into(),
        "Tab" => "\u{21E5}".into(),
        "Up" => "\u{2191}".into(),
        "Down" => "\u{2193}".into(),
        "Left" => "\u{2190}".into(),
        "Right" => "\u{2192}".into(),
        other => other.to_string(),
    }
}
