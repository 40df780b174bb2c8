//! Canvas Mode State Machine and the animation it drives.

use std::time::{Duration, Instant};

use hover_common::{Event, LayoutError, LayoutMode, Rect, ViewError, WindowId};
use hover_webview::scripts;
use tracing::{debug, warn};

use crate::animator::{step_interval, LayoutTransition};
use crate::geometry::{canvas_target, centered, choose_display};
use crate::registry::{ActiveTransition, LayoutState};
use crate::timeline::ScheduledTask;

use super::{PendingLayout, SessionManager};

impl SessionManager {
    /// Switch `window` between the compact and canvas layouts.
    ///
    /// The mode flips immediately; the resize animation starts once the
    /// page's scroll offset has been read. Every `Err` leaves the window
    /// untouched.
    pub fn request_layout_mode(
        &mut self,
        window: WindowId,
        mode: LayoutMode,
    ) -> Result<(), LayoutError> {
        if !self.config.general.canvas_resize_enabled {
            return Err(LayoutError::ResizingDisabled);
        }
        let entry = self
            .registry
            .get(window)
            .ok_or(LayoutError::WindowGone(window))?;
        if entry.layout.mode() == mode {
            return Err(LayoutError::AlreadyInMode(window));
        }
        if mode == LayoutMode::Canvas && !self.views.has_attached(window) {
            return Err(LayoutError::NoView(window));
        }
        let displays = self.displays.displays();
        if displays.is_empty() {
            return Err(LayoutError::NoDisplay);
        }

        if entry.native.is_minimized() {
            entry.native.set_minimized(false);
        }
        let current = entry.native.rect();
        let (layout, target, recenter) = match (mode, entry.layout) {
            (LayoutMode::Canvas, _) => {
                let display = choose_display(current, &displays)?;
                let w = &self.config.window;
                let target = canvas_target(
                    current,
                    display.work_area,
                    w.canvas_width,
                    w.canvas_height,
                    w.margin,
                );
                (LayoutState::Canvas { saved: Some(current) }, target, false)
            }
            (LayoutMode::Normal, LayoutState::Canvas { saved: Some(saved) }) => {
                (LayoutState::Normal, saved, false)
            }
            (LayoutMode::Normal, _) => {
                let w = &self.config.window;
                let target = current.with_size(w.default_width as i32, w.default_height as i32);
                (LayoutState::Normal, target, true)
            }
        };

        if let Some(entry) = self.registry.get_mut(window) {
            entry.layout = layout;
            // Stop whatever was animating; the new transition starts after
            // the scroll read.
            entry.transition = None;
            entry.generation += 1;
        }
        debug!(%window, ?mode, from = %current, to = %target, "layout change requested");
        self.publish(Event::LayoutChanged { window, mode });

        let now = self.now();
        match self.views.run_script(window, scripts::SCROLL_READ, now) {
            Ok(request) => {
                self.pending_layout.insert(
                    window,
                    PendingLayout {
                        request,
                        target,
                        recenter,
                    },
                );
            }
            Err(e) => {
                debug!(%window, "scroll offset unavailable: {e}");
                self.pending_layout.remove(&window);
                self.start_layout(window, target, recenter, 0.0, now);
            }
        }
        Ok(())
    }

    /// Continue a pending layout change once its scroll read finished.
    ///
    /// Returns `false` when the result belongs to nothing pending.
    pub(super) fn resume_layout(
        &mut self,
        window: WindowId,
        request: hover_webview::ScriptRequestId,
        result: &Result<String, ViewError>,
    ) -> bool {
        match self.pending_layout.get(&window) {
            Some(pending) if pending.request == request => {}
            _ => return false,
        }
        let Some(pending) = self.pending_layout.remove(&window) else {
            return false;
        };
        let offset = match result {
            Ok(raw) => scripts::parse_scroll_offset(raw).unwrap_or_else(|| {
                warn!(%window, raw = %raw, "unreadable scroll offset, using 0");
                0.0
            }),
            Err(e) => {
                warn!(%window, "scroll offset read failed, using 0: {e}");
                0.0
            }
        };
        let now = self.now();
        self.start_layout(window, pending.target, pending.recenter, offset, now);
        true
    }

    fn start_layout(
        &mut self,
        window: WindowId,
        target: Rect,
        recenter: bool,
        scroll_offset: f64,
        now: Instant,
    ) {
        self.begin_transition(window, target, now);

        let anim = &self.config.animation;
        let settled = now + Duration::from_millis(anim.duration_ms);
        let restore_at = settled + Duration::from_millis(anim.scroll_restore_delay_ms);
        let center_at = settled + Duration::from_millis(anim.recenter_delay_ms);
        self.timeline.schedule(
            restore_at,
            ScheduledTask::RestoreScroll {
                window,
                offset: scroll_offset,
            },
        );
        if recenter {
            self.timeline
                .schedule(center_at, ScheduledTask::CenterWindow { window });
        }
    }

    /// Animate `window` from where it is now to `target`, superseding any
    /// transition in flight.
    pub(crate) fn begin_transition(&mut self, window: WindowId, target: Rect, now: Instant) {
        let steps = self.config.animation.steps;
        let Some(entry) = self.registry.get_mut(window) else {
            return;
        };
        entry.generation += 1;
        let start = entry.native.rect();
        entry.transition = Some(ActiveTransition {
            transition: LayoutTransition::new(start, target, steps),
            generation: entry.generation,
            next_step: 1,
        });
        let generation = entry.generation;
        self.animation_step(window, generation, now);
    }

    /// Apply the next step of the window's transition.
    pub(super) fn animation_step(&mut self, window: WindowId, generation: u64, now: Instant) {
        let Some(entry) = self.registry.get_mut(window) else {
            return;
        };
        let Some(active) = entry.transition.as_mut() else {
            return;
        };
        if active.generation != generation {
            return;
        }
        let step = active.next_step;
        let rect = active.transition.rect_at(step);
        let done = step >= active.transition.steps();
        active.next_step += 1;
        let steps = active.transition.steps();
        if done {
            entry.transition = None;
        }

        entry.native.set_rect(rect);
        self.views.resize(window, rect);

        if !done {
            let interval = step_interval(
                Duration::from_millis(self.config.animation.duration_ms),
                steps,
            );
            self.timeline.schedule(
                now + interval,
                ScheduledTask::AnimationStep { window, generation },
            );
        }
    }

    pub(super) fn restore_scroll(&mut self, window: WindowId, offset: f64) {
        if !self.views.has_attached(window) {
            return;
        }
        let now = self.now();
        if let Err(e) = self
            .views
            .run_script(window, &scripts::scroll_restore(offset), now)
        {
            debug!(%window, "scroll restore failed: {e}");
        }
    }

    pub(super) fn center_window(&mut self, window: WindowId) {
        let Some(entry) = self.registry.get(window) else {
            return;
        };
        let rect = entry.native.rect();
        match choose_display(rect, &self.displays.displays()) {
            Ok(display) => {
                let centered = centered(rect, display.work_area);
                entry.native.set_rect(centered);
                self.views.resize(window, centered);
            }
            Err(e) => debug!(%window, "cannot center: {e}"),
        }
    }

    /// Put a window into canvas mode without a remembered rect.
    #[cfg(test)]
    pub(crate) fn force_canvas_without_saved_rect(&mut self, window: WindowId) {
        if let Some(entry) = self.registry.get_mut(window) {
            entry.layout = LayoutState::Canvas { saved: None };
        }
    }

    pub fn layout_mode(&self, window: WindowId) -> Option<LayoutMode> {
        self.registry.get(window).map(|e| e.layout.mode())
    }
}
