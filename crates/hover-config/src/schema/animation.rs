//! Layout animation timing.

use serde::{Deserialize, Serialize};

/// Timing of layout transitions and the follow-up work they schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Total wall-clock duration of a layout transition (valid range: 0-2000).
    pub duration_ms: u64,
    /// Number of discrete steps (valid range: 1-240).
    pub steps: u32,
    /// Delay after the transition finishes before scroll is restored.
    pub scroll_restore_delay_ms: u64,
    /// Delay after the transition finishes before a window is re-centered.
    pub recenter_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 200,
            steps: 20,
            scroll_restore_delay_ms: 100,
            recenter_delay_ms: 10,
        }
    }
}
