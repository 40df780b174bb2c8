use super::Action;

impl Action {
    /// Human-readable label for menus and the settings page.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ShowHide => "Show / Hide",
            Action::Quit => "Quit",
            Action::ShowInstructions => "Show Instructions",
            Action::Screenshot => "Screenshot",
            Action::NewChatPro => "New Chat (Pro)",
            Action::NewChatFlash => "New Chat (Flash)",
            Action::NewWindow => "New Window",
            Action::Search => "Search",
            Action::Refresh => "Refresh",
            Action::CloseWindow => "Close Window",
        }
    }

    /// Name used for this action in settings and IPC payloads.
    pub fn config_name(&self) -> &'static str {
        match self {
            Action::ShowHide => "showHide",
            Action::Quit => "quit",
            Action::ShowInstructions => "showInstructions",
            Action::Screenshot => "screenshot",
            Action::NewChatPro => "newChatPro",
            Action::NewChatFlash => "newChatFlash",
            Action::NewWindow => "newWindow",
            Action::Search => "search",
            Action::Refresh => "refresh",
            Action::CloseWindow => "closeWindow",
        }
    }

    /// The reserved action that stays bound at OS scope regardless of the
    /// global shortcut flag.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Action::ShowHide)
    }
}
