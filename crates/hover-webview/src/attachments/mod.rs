//! View Attachment Manager.
//!
//! Tracks which content view is attached to each window, which view is
//! parked while a window shows a local page, and which script evaluations
//! are still waiting for a result.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use hover_common::{Rect, ViewError, ViewId, WindowId};
use serde_json::Value;
use tracing::{debug, warn};

use crate::events::ScriptRequestId;
use crate::view::ContentView;

/// How long a script may run before its caller gets [`ViewError::Timeout`].
pub const SCRIPT_TIMEOUT: Duration = Duration::from_millis(1500);

/// `attach` was called on a window that already has a view.
///
/// The rejected view is handed back so the caller can decide what to do
/// with it.
#[derive(thiserror::Error)]
#[error("{window} already has an attached view")]
pub struct AttachConflict {
    pub window: WindowId,
    pub view: Box<dyn ContentView>,
}

impl std::fmt::Debug for AttachConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttachConflict")
            .field("window", &self.window)
            .field("view", &self.view.id())
            .finish()
    }
}

/// Final outcome of one `run_script` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptOutcome {
    pub window: WindowId,
    pub request: ScriptRequestId,
    pub result: Result<String, ViewError>,
}

struct PendingScript {
    window: WindowId,
    view: ViewId,
    deadline: Instant,
}

pub struct ViewAttachments {
    chrome_height: i32,
    script_timeout: Duration,
    attached: HashMap<WindowId, Box<dyn ContentView>>,
    parked: HashMap<WindowId, Box<dyn ContentView>>,
    pending: HashMap<ScriptRequestId, PendingScript>,
    next_request: u64,
}

impl ViewAttachments {
    pub fn new(chrome_height: u32) -> Self {
        Self {
            chrome_height: chrome_height as i32,
            script_timeout: SCRIPT_TIMEOUT,
            attached: HashMap::new(),
            parked: HashMap::new(),
            pending: HashMap::new(),
            next_request: 1,
        }
    }

    /// Content rectangle for a window of the given size: everything below
    /// the chrome band, in window-relative coordinates.
    pub fn content_bounds(&self, window_rect: Rect) -> Rect {
        Rect::new(
            0,
            self.chrome_height,
            window_rect.width,
            (window_rect.height - self.chrome_height).max(0),
        )
    }

    pub fn attach(
        &mut self,
        window: WindowId,
        view: Box<dyn ContentView>,
        window_rect: Rect,
    ) -> Result<(), AttachConflict> {
        if self.attached.contains_key(&window) {
            return Err(AttachConflict { window, view });
        }
        let bounds = self.content_bounds(window_rect);
        if let Err(e) = view.set_bounds(bounds) {
            warn!(%window, "failed to size attached view: {e}");
        }
        if let Err(e) = view.set_visible(true) {
            warn!(%window, "failed to show attached view: {e}");
        }
        debug!(%window, view = %view.id(), %bounds, "view attached");
        self.attached.insert(window, view);
        Ok(())
    }

    /// Remove the attached view without destroying it. The view is hidden
    /// and keeps its page state.
    pub fn detach(&mut self, window: WindowId) -> Option<Box<dyn ContentView>> {
        let view = self.attached.remove(&window)?;
        if let Err(e) = view.set_visible(false) {
            warn!(%window, "failed to hide detached view: {e}");
        }
        debug!(%window, view = %view.id(), "view detached");
        Some(view)
    }

    pub fn attached(&self, window: WindowId) -> Option<&dyn ContentView> {
        self.attached.get(&window).map(|v| v.as_ref())
    }

    pub fn attached_mut(&mut self, window: WindowId) -> Option<&mut Box<dyn ContentView>> {
        self.attached.get_mut(&window)
    }

    pub fn has_attached(&self, window: WindowId) -> bool {
        self.attached.contains_key(&window)
    }

    /// Hold a detached view in reserve for `window`, replacing any view
    /// already parked there.
    pub fn park(&mut self, window: WindowId, view: Box<dyn ContentView>) {
        if let Some(old) = self.parked.insert(window, view) {
            debug!(%window, view = %old.id(), "dropping previously parked view");
            self.fail_pending_for_view(old.id());
        }
    }

    pub fn unpark(&mut self, window: WindowId) -> Option<Box<dyn ContentView>> {
        self.parked.remove(&window)
    }

    pub fn is_parked(&self, window: WindowId) -> bool {
        self.parked.contains_key(&window)
    }

    /// Keep the attached view's bounds in step with the window.
    pub fn resize(&mut self, window: WindowId, window_rect: Rect) {
        let bounds = self.content_bounds(window_rect);
        if let Some(view) = self.attached.get(&window) {
            if let Err(e) = view.set_bounds(bounds) {
                debug!(%window, "view resize failed: {e}");
            }
        }
    }

    /// Start evaluating `source` in the window's attached view.
    ///
    /// The result arrives later through [`resolve`](Self::resolve), or as a
    /// timeout from [`expire`](Self::expire).
    pub fn run_script(
        &mut self,
        window: WindowId,
        source: &str,
        now: Instant,
    ) -> Result<ScriptRequestId, ViewError> {
        let view = self
            .attached
            .get(&window)
            .ok_or(ViewError::NotAttached(window))?;
        let request = ScriptRequestId(self.next_request);
        self.next_request += 1;

        view.evaluate(request, source)?;
        self.pending.insert(
            request,
            PendingScript {
                window,
                view: view.id(),
                deadline: now + self.script_timeout,
            },
        );
        Ok(request)
    }

    /// Match a script result reported by a view with its request.
    ///
    /// Returns `None` for results nobody is waiting for any more (already
    /// timed out, or the view was released).
    pub fn resolve(
        &mut self,
        view: ViewId,
        request: ScriptRequestId,
        result: Result<String, String>,
    ) -> Option<ScriptOutcome> {
        let pending = self.pending.get(&request)?;
        if pending.view != view {
            warn!(%request, %view, expected = %pending.view, "script result from unexpected view");
            return None;
        }
        let pending = self.pending.remove(&request)?;
        Some(ScriptOutcome {
            window: pending.window,
            request,
            result: result.map_err(|message| ViewError::ScriptFailed { view, message }),
        })
    }

    /// Fail every script whose deadline has passed.
    pub fn expire(&mut self, now: Instant) -> Vec<ScriptOutcome> {
        let expired: Vec<ScriptRequestId> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        let mut outcomes: Vec<ScriptOutcome> = expired
            .into_iter()
            .filter_map(|request| {
                let p = self.pending.remove(&request)?;
                Some(ScriptOutcome {
                    window: p.window,
                    request,
                    result: Err(ViewError::Timeout(p.view)),
                })
            })
            .collect();
        outcomes.sort_by_key(|o| o.request);
        outcomes
    }

    /// Earliest pending script deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Destroy the window's attached and parked views.
    ///
    /// Scripts still waiting on those views fail with
    /// [`ViewError::Destroyed`].
    pub fn release(&mut self, window: WindowId) -> Vec<ScriptOutcome> {
        let attached = self.attached.remove(&window);
        let parked = self.parked.remove(&window);
        for view in attached.iter().chain(parked.iter()) {
            debug!(%window, view = %view.id(), "view released");
        }
        drop(attached);
        drop(parked);

        let failed: Vec<ScriptRequestId> = self
            .pending
            .iter()
            .filter(|(_, p)| p.window == window)
            .map(|(id, _)| *id)
            .collect();
        let mut outcomes: Vec<ScriptOutcome> = failed
            .into_iter()
            .filter_map(|request| {
                let p = self.pending.remove(&request)?;
                Some(ScriptOutcome {
                    window,
                    request,
                    result: Err(ViewError::Destroyed(p.view)),
                })
            })
            .collect();
        outcomes.sort_by_key(|o| o.request);
        outcomes
    }

    /// Send an IPC message to every attached view.
    pub fn broadcast_ipc(&self, kind: &str, payload: &Value) {
        for (window, view) in &self.attached {
            if let Err(e) = view.send_ipc(kind, payload) {
                debug!(%window, kind, "ipc broadcast failed: {e}");
            }
        }
    }

    /// Window owning the attached or parked view with this id.
    pub fn window_of(&self, view: ViewId) -> Option<WindowId> {
        self.attached
            .iter()
            .chain(self.parked.iter())
            .find(|(_, v)| v.id() == view)
            .map(|(w, _)| *w)
    }

    fn fail_pending_for_view(&mut self, view: ViewId) {
        self.pending.retain(|_, p| p.view != view);
    }
}
