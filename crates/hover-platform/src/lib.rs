pub mod capture;
pub mod clipboard;
pub mod files;
pub mod input;
pub mod keymap;
pub mod shortcuts;
pub mod single_instance;
pub mod startup;
pub mod theme;
pub mod winit_keys;

pub use capture::{CapturePoll, ScreenCapture, SnippingTool};
pub use clipboard::Clipboard;
pub use files::{read_pasted_file, PastedFile};
pub use input::{KeyCombo, ShortcutTable};
pub use keymap::{parse_accelerator, Accelerator, Modifier};
pub use shortcuts::{create_global_shortcuts, GlobalShortcuts, RecordingShortcuts};
pub use single_instance::{InstanceMessage, InstanceRole, InstanceServer};
pub use startup::{create_launch_at_login, LaunchAtLogin, LoginItem, NoLaunchAtLogin};
pub use theme::{resolve_theme, ResolvedTheme};
pub use winit_keys::normalize_winit_key;
