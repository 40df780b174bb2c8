//! Keyboard shortcut configuration.

use hover_common::Action;
use serde::{Deserialize, Serialize};

/// Shortcut bindings, one accelerator string per action.
///
/// Format: "Modifier+Key" where Modifier is one of: Command, Control, Alt,
/// Shift, Super. Multiple modifiers: "Command+Alt+S".
///
/// `global` decides whether the table is registered with the OS or
/// intercepted per window. `show_hide` is always registered with the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub global: bool,
    pub show_hide: String,
    pub quit: String,
    pub show_instructions: String,
    pub screenshot: String,
    pub new_chat_pro: String,
    pub new_chat_flash: String,
    pub new_window: String,
    pub search: String,
    pub refresh: String,
    pub close_window: String,
}

impl ShortcutConfig {
    /// Accelerator bound to an action.
    pub fn binding(&self, action: Action) -> &str {
        match action {
            Action::ShowHide => &self.show_hide,
            Action::Quit => &self.quit,
            Action::ShowInstructions => &self.show_instructions,
            Action::Screenshot => &self.screenshot,
            Action::NewChatPro => &self.new_chat_pro,
            Action::NewChatFlash => &self.new_chat_flash,
            Action::NewWindow => &self.new_window,
            Action::Search => &self.search,
            Action::Refresh => &self.refresh,
            Action::CloseWindow => &self.close_window,
        }
    }

    /// Replace the accelerator bound to an action.
    pub fn set_binding(&mut self, action: Action, accelerator: impl Into<String>) {
        let slot = match action {
            Action::ShowHide => &mut self.show_hide,
            Action::Quit => &mut self.quit,
            Action::ShowInstructions => &mut self.show_instructions,
            Action::Screenshot => &mut self.screenshot,
            Action::NewChatPro => &mut self.new_chat_pro,
            Action::NewChatFlash => &mut self.new_chat_flash,
            Action::NewWindow => &mut self.new_window,
            Action::Search => &mut self.search,
            Action::Refresh => &mut self.refresh,
            Action::CloseWindow => &mut self.close_window,
        };
        *slot = accelerator.into();
    }

    /// All `(action, accelerator)` pairs in table order.
    pub fn bindings(&self) -> Vec<(Action, &str)> {
        Action::ALL
            .iter()
            .map(|&action| (action, self.binding(action)))
            .collect()
    }
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self {
                global: true,
                show_hide: "Command+G".into(),
                quit: "Command+Q".into(),
                show_instructions: "Command+I".into(),
                screenshot: "Command+Alt+S".into(),
                new_chat_pro: "Command+P".into(),
                new_chat_flash: "Command+F".into(),
                new_window: "Command+N".into(),
                search: "Command+S".into(),
                refresh: "Command+R".into(),
                close_window: "Command+W".into(),
            }
        } else {
            Self {
                global: true,
                show_hide: "Alt+G".into(),
                quit: "Control+W".into(),
                show_instructions: "Alt+I".into(),
                screenshot: "Control+Alt+S".into(),
                new_chat_pro: "Alt+P".into(),
                new_chat_flash: "Alt+F".into(),
                new_window: "Alt+N".into(),
                search: "Alt+S".into(),
                refresh: "Alt+R".into(),
                close_window: "Alt+Q".into(),
            }
        }
    }
}
