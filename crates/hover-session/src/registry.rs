//! Window Registry: every live window, in creation order.

use hover_common::{LayoutMode, Rect, WindowId};

use crate::animator::LayoutTransition;
use crate::platform::NativeWindow;

/// Layout state of one window.
///
/// The saved rectangle only exists while in canvas mode, so "saved rect
/// present implies canvas" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutState {
    #[default]
    Normal,
    Canvas {
        /// Rect before entering canvas. `None` when the window started out
        /// in canvas without a recorded rect.
        saved: Option<Rect>,
    },
}

impl LayoutState {
    pub fn mode(&self) -> LayoutMode {
        match self {
            LayoutState::Normal => LayoutMode::Normal,
            LayoutState::Canvas { .. } => LayoutMode::Canvas,
        }
    }
}

/// Temporary replacement for the always-on-top preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnTopOverride {
    /// Window is maximized.
    Suspended,
    /// A screen capture is in progress.
    Forced,
}

/// The transition a window is currently animating through.
#[derive(Debug, Clone)]
pub struct ActiveTransition {
    pub transition: LayoutTransition,
    pub generation: u64,
    /// 1-based index of the next step to apply.
    pub next_step: u32,
}

pub struct WindowEntry {
    pub id: WindowId,
    pub native: Box<dyn NativeWindow>,
    pub layout: LayoutState,
    pub transition: Option<ActiveTransition>,
    pub on_top_override: Option<OnTopOverride>,
    /// Bumped on every new transition; steps carrying an older value are
    /// stale.
    pub generation: u64,
}

impl WindowEntry {
    pub fn new(id: WindowId, native: Box<dyn NativeWindow>) -> Self {
        Self {
            id,
            native,
            layout: LayoutState::Normal,
            transition: None,
            on_top_override: None,
            generation: 0,
        }
    }

    /// Always-on-top state once overrides are taken into account.
    pub fn effective_on_top(&self, preference: bool) -> bool {
        match self.on_top_override {
            Some(OnTopOverride::Suspended) => false,
            Some(OnTopOverride::Forced) => true,
            None => preference,
        }
    }

    pub fn apply_on_top(&self, preference: bool) {
        self.native.set_always_on_top(self.effective_on_top(preference));
    }

    /// Whether the window needs showing for the show/hide toggle.
    pub fn is_hidden(&self) -> bool {
        !self.native.is_visible() || self.native.is_minimized()
    }
}

#[derive(Default)]
pub struct WindowRegistry {
    entries: Vec<WindowEntry>,
    last_focused: Option<WindowId>,
    next_id: u32,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_focused: None,
            next_id: 1,
        }
    }

    pub fn allocate_id(&mut self) -> WindowId {
        let id = WindowId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    /// Register a window. An id already present is replaced.
    pub fn insert(&mut self, id: WindowId, native: Box<dyn NativeWindow>) {
        self.entries.retain(|e| e.id != id);
        self.entries.push(WindowEntry::new(id, native));
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
    }

    pub fn remove(&mut self, id: WindowId) -> Option<WindowEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        if self.last_focused == Some(id) {
            self.last_focused = None;
        }
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn list_windows(&self) -> Vec<WindowId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WindowEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The window that currently has OS focus.
    pub fn focused_window(&self) -> Option<WindowId> {
        self.entries
            .iter()
            .find(|e| e.native.is_focused())
            .map(|e| e.id)
    }

    /// Last window that received focus. Survives hiding every window.
    pub fn last_focused(&self) -> Option<WindowId> {
        self.last_focused
    }

    pub fn set_last_focused(&mut self, id: WindowId) {
        if self.contains(id) {
            self.last_focused = Some(id);
        }
    }

    /// Most recently created window.
    pub fn newest_window(&self) -> Option<WindowId> {
        self.entries.last().map(|e| e.id)
    }

    /// Window a user action applies to: focused, else last focused, else
    /// the first one created.
    pub fn target_window(&self) -> Option<WindowId> {
        self.focused_window()
            .or(self.last_focused)
            .or_else(|| self.entries.first().map(|e| e.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::test_support::FakeWindow;

    fn registry_with(n: usize) -> (WindowRegistry, Vec<FakeWindow>) {
        let mut registry = WindowRegistry::new();
        let mut fakes = Vec::new();
        for _ in 0..n {
            let id = registry.allocate_id();
            let fake = FakeWindow::new(Rect::new(0, 0, 500, 650));
            registry.insert(id, Box::new(fake.clone()));
            fakes.push(fake);
        }
        (registry, fakes)
    }

    #[test]
    fn windows_listed_in_creation_order() {
        let (registry, _) = registry_with(3);
        assert_eq!(
            registry.list_windows(),
            vec![WindowId(1), WindowId(2), WindowId(3)]
        );
    }

    #[test]
    fn target_prefers_focused_window() {
        let (mut registry, fakes) = registry_with(3);
        registry.set_last_focused(WindowId(1));
        fakes[2].state().focused = true;
        assert_eq!(registry.target_window(), Some(WindowId(3)));
    }

    #[test]
    fn target_falls_back_to_last_focused_then_first() {
        let (mut registry, _) = registry_with(2);
        assert_eq!(registry.target_window(), Some(WindowId(1)));
        registry.set_last_focused(WindowId(2));
        assert_eq!(registry.target_window(), Some(WindowId(2)));
    }

    #[test]
    fn newest_window_follows_creation() {
        let (mut registry, _) = registry_with(3);
        assert_eq!(registry.newest_window(), Some(WindowId(3)));
        registry.remove(WindowId(3));
        assert_eq!(registry.newest_window(), Some(WindowId(2)));
    }

    #[test]
    fn removing_last_focused_clears_it() {
        let (mut registry, _) = registry_with(2);
        registry.set_last_focused(WindowId(2));
        assert!(registry.remove(WindowId(2)).is_some());
        assert_eq!(registry.last_focused(), None);
        assert_eq!(registry.target_window(), Some(WindowId(1)));
    }

    #[test]
    fn unknown_window_is_never_last_focused() {
        let (mut registry, _) = registry_with(1);
        registry.set_last_focused(WindowId(9));
        assert_eq!(registry.last_focused(), None);
    }

    #[test]
    fn overrides_replace_preference() {
        let fake = FakeWindow::new(Rect::default());
        let mut entry = WindowEntry::new(WindowId(1), Box::new(fake));
        assert!(entry.effective_on_top(true));
        entry.on_top_override = Some(OnTopOverride::Suspended);
        assert!(!entry.effective_on_top(true));
        entry.on_top_override = Some(OnTopOverride::Forced);
        assert!(entry.effective_on_top(false));
    }

    #[test]
    fn layout_state_reports_mode() {
        assert_eq!(LayoutState::Normal.mode(), LayoutMode::Normal);
        assert_eq!(
            LayoutState::Canvas { saved: None }.mode(),
            LayoutMode::Canvas
        );
    }
}
