use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the application.
///
/// Global shortcuts, locally intercepted keys, and IPC messages all resolve
/// to an `Action`. The session dispatcher matches on this enum, so the set
/// is closed and every path is checked at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Toggle all windows between hidden and shown. Always bound at OS scope.
    ShowHide,
    Quit,
    ShowInstructions,
    Screenshot,
    NewChatPro,
    NewChatFlash,
    NewWindow,
    Search,
    Refresh,
    CloseWindow,
}

impl Action {
    /// Every action, in the order they appear in the settings table.
    pub const ALL: [Action; 10] = [
        Action::ShowHide,
        Action::Quit,
        Action::ShowInstructions,
        Action::Screenshot,
        Action::NewChatPro,
        Action::NewChatFlash,
        Action::NewWindow,
        Action::Search,
        Action::Refresh,
        Action::CloseWindow,
    ];
}
