//! Accelerator strings: parsing, canonical form, and display labels.

mod display;
mod parse;
mod types;

pub use display::{accelerator_to_display, accelerator_to_string};
pub use parse::parse_accelerator;
pub use types::{Accelerator, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> Modifier {
        if cfg!(target_os = "macos") {
            Modifier::Super
        } else {
            Modifier::Ctrl
        }
    }

    #[test]
    fn parse_simple_accelerator() {
        let accel = parse_accelerator("Alt+G").unwrap();
        assert_eq!(accel.modifiers, vec![Modifier::Alt]);
        assert_eq!(accel.key, "G");
    }

    #[test]
    fn parse_multi_modifier_accelerator() {
        let accel = parse_accelerator("Control+Alt+S").unwrap();
        assert_eq!(accel.modifiers, vec![Modifier::Ctrl, Modifier::Alt]);
        assert_eq!(accel.key, "S");
    }

    #[test]
    fn parse_command_modifier() {
        let accel = parse_accelerator("Command+Q").unwrap();
        assert_eq!(accel.modifiers, vec![command()]);
        assert_eq!(accel.key, "Q");

        let accel = parse_accelerator("CmdOrCtrl+N").unwrap();
        assert_eq!(accel.modifiers, vec![command()]);
    }

    #[test]
    fn parse_option_becomes_alt() {
        let accel = parse_accelerator("Option+Period").unwrap();
        assert_eq!(accel.modifiers, vec![Modifier::Alt]);
        assert_eq!(accel.key, ".");
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        let accel = parse_accelerator(" alt + g ").unwrap();
        assert_eq!(accel.modifiers, vec![Modifier::Alt]);
        assert_eq!(accel.key, "G");
    }

    #[test]
    fn parse_single_key() {
        let accel = parse_accelerator("F5").unwrap();
        assert!(accel.modifiers.is_empty());
        assert_eq!(accel.key, "F5");
    }

    #[test]
    fn parse_key_normalization() {
        assert_eq!(parse_accelerator("Ctrl+Return").unwrap().key, "Enter");
        assert_eq!(parse_accelerator("Ctrl+Esc").unwrap().key, "Escape");
        assert_eq!(parse_accelerator("Ctrl+space").unwrap().key, "Space");
        assert_eq!(parse_accelerator("Ctrl+pagedown").unwrap().key, "PageDown");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_accelerator("").is_err());
        assert!(parse_accelerator("Alt+").is_err());
        assert!(parse_accelerator("Hyper+G").is_err());
    }

    #[test]
    fn parse_duplicate_modifiers_deduplicated() {
        let accel = parse_accelerator("Alt+Alt+A").unwrap();
        assert_eq!(accel.modifiers, vec![Modifier::Alt]);
    }

    #[test]
    fn canonical_string_parses_back() {
        for s in ["Alt+G", "Control+Alt+S", "Shift+Plus", "Super+F12"] {
            let accel = parse_accelerator(s).unwrap();
            let canonical = accelerator_to_string(&accel);
            assert_eq!(canonical, s);
            assert_eq!(parse_accelerator(&canonical).unwrap(), accel);
        }
    }

    #[test]
    fn display_platform_labels() {
        let accel = Accelerator {
            modifiers: vec![Modifier::Ctrl, Modifier::Shift],
            key: "T".into(),
        };
        let display = accelerator_to_display(&accel);
        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2303}\u{21E7}T");
        } else {
            assert_eq!(display, "Ctrl+Shift+T");
        }
    }
}
