//! Key names as reported by winit, mapped onto [`KeyCombo`](crate::input::KeyCombo)
//! key names so local key presses can be looked up in the shortcut table.

/// Normalize a winit logical key name.
///
/// Named keys arrive as their `NamedKey` debug name (`"ArrowUp"`, `"Space"`),
/// printable keys as the produced text (`"g"`, `" "`, `"+"`).
pub fn normalize_winit_key(key: &str) -> String {
    let named = match key {
        "ArrowUp" => "Up",
        "ArrowDown" => "Down",
        "ArrowLeft" => "Left",
        "ArrowRight" => "Right",
        " " | "Space" => "Space",
        _ => {
            return if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                key.to_string()
            };
        }
    };
    named.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCombo;

    #[test]
    fn arrows_drop_prefix() {
        assert_eq!(normalize_winit_key("ArrowUp"), "Up");
        assert_eq!(normalize_winit_key("ArrowRight"), "Right");
    }

    #[test]
    fn space_both_spellings() {
        assert_eq!(normalize_winit_key(" "), "Space");
        assert_eq!(normalize_winit_key("Space"), "Space");
    }

    #[test]
    fn printable_keys_uppercase() {
        assert_eq!(normalize_winit_key("g"), "G");
        assert_eq!(normalize_winit_key("."), ".");
    }

    #[test]
    fn named_keys_pass_through() {
        for key in ["F5", "Escape", "PageDown", "Backspace", "Enter"] {
            assert_eq!(normalize_winit_key(key), key);
        }
    }

    #[test]
    fn normalized_key_matches_parsed_accelerator() {
        let pressed = KeyCombo::from_winit(false, true, false, false, normalize_winit_key("k"));
        assert_eq!(pressed, KeyCombo::parse("Alt+K").unwrap());

        let pressed = KeyCombo::from_winit(true, false, false, false, normalize_winit_key("F5"));
        assert_eq!(pressed, KeyCombo::parse("Ctrl+F5").unwrap());
    }
}
