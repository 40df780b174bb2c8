//! Bounds Animator: linear interpolation between two window rects.

use std::time::Duration;

use hover_common::Rect;

/// A fixed-step linear animation from `start` to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTransition {
    start: Rect,
    target: Rect,
    steps: u32,
}

impl LayoutTransition {
    /// `steps` of zero is treated as a single jump to the target.
    pub fn new(start: Rect, target: Rect, steps: u32) -> Self {
        Self {
            start,
            target,
            steps: steps.max(1),
        }
    }

    pub fn start(&self) -> Rect {
        self.start
    }

    pub fn target(&self) -> Rect {
        self.target
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Rect for 1-based step `i`. The final step is exactly the target.
    pub fn rect_at(&self, i: u32) -> Rect {
        if i >= self.steps {
            return self.target;
        }
        let lerp = |from: i32, to: i32| -> i32 {
            let delta = (to - from) as f64 / self.steps as f64;
            (from as f64 + delta * i as f64).round() as i32
        };
        Rect::new(
            lerp(self.start.x, self.target.x),
            lerp(self.start.y, self.target.y),
            lerp(self.start.width, self.target.width),
            lerp(self.start.height, self.target.height),
        )
    }

    /// Every step's rect, in order.
    pub fn rects(&self) -> Vec<Rect> {
        (1..=self.steps).map(|i| self.rect_at(i)).collect()
    }
}

/// Delay between consecutive steps.
pub fn step_interval(duration: Duration, steps: u32) -> Duration {
    duration / steps.max(1)
}
