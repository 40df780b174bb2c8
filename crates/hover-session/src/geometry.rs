//! Display selection and canvas placement.

use hover_common::{LayoutError, Rect};
use tracing::warn;

use crate::platform::Display;

/// Display whose work area overlaps `window` the most.
///
/// Falls back to the primary display when nothing overlaps, and to the
/// first display when none is marked primary.
pub fn choose_display(window: Rect, displays: &[Display]) -> Result<Display, LayoutError> {
    let best = displays
        .iter()
        .map(|d| (d.work_area.intersection_area(&window), d))
        .filter(|(area, _)| *area > 0)
        .max_by_key(|(area, _)| *area)
        .map(|(_, d)| *d);
    if let Some(display) = best {
        return Ok(display);
    }

    let fallback = displays
        .iter()
        .find(|d| d.primary)
        .or_else(|| displays.first())
        .copied()
        .ok_or(LayoutError::NoDisplay)?;
    warn!(%window, work_area = %fallback.work_area, "window is on no display, using primary");
    Ok(fallback)
}

/// Clamp `value` into `[lo, hi]`; an empty range yields `lo`.
fn clamp_low_wins(value: i32, lo: i32, hi: i32) -> i32 {
    value.min(hi).max(lo)
}

/// Where a window at `current` lands when it grows to canvas size.
pub fn canvas_target(
    current: Rect,
    work_area: Rect,
    canvas_width: u32,
    canvas_height: u32,
    margin: u32,
) -> Rect {
    let margin = margin as i32;
    let width = (canvas_width as i32).min(work_area.width - 2 * margin);
    let height = (canvas_height as i32).min(work_area.height - 2 * margin);
    let x = clamp_low_wins(
        current.x,
        work_area.x + margin,
        work_area.right() - width - margin,
    );
    let y = clamp_low_wins(
        current.y,
        work_area.y + margin,
        work_area.bottom() - height - margin,
    );
    Rect::new(x, y, width, height)
}

/// `rect` moved so it is centered in `work_area`.
pub fn centered(rect: Rect, work_area: Rect) -> Rect {
    Rect::new(
        work_area.x + (work_area.width - rect.width) / 2,
        work_area.y + (work_area.height - rect.height) / 2,
        rect.width,
        rect.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(work_area: Rect, primary: bool) -> Display {
        Display {
            bounds: work_area,
            work_area,
            primary,
        }
    }

    #[test]
    fn canvas_target_on_full_hd() {
        let target = canvas_target(
            Rect::new(100, 100, 500, 650),
            Rect::new(0, 0, 1920, 1080),
            1400,
            800,
            20,
        );
        assert_eq!(target, Rect::new(100, 100, 1400, 800));
    }

    #[test]
    fn canvas_target_pulled_back_on_screen() {
        let target = canvas_target(
            Rect::new(1500, 600, 500, 650),
            Rect::new(0, 0, 1920, 1080),
            1400,
            800,
            20,
        );
        assert_eq!(target, Rect::new(500, 260, 1400, 800));
    }

    #[test]
    fn canvas_shrinks_to_small_work_area() {
        let target = canvas_target(
            Rect::new(0, 0, 500, 650),
            Rect::new(0, 0, 1280, 720),
            1400,
            800,
            20,
        );
        assert_eq!(target, Rect::new(20, 20, 1240, 680));
    }

    #[test]
    fn empty_range_takes_lower_bound() {
        assert_eq!(clamp_low_wins(50, 20, 10), 20);
        assert_eq!(clamp_low_wins(-5, 20, 10), 20);
        assert_eq!(clamp_low_wins(15, 10, 20), 15);
    }

    #[test]
    fn picks_display_with_most_overlap() {
        let left = display(Rect::new(0, 0, 1920, 1080), true);
        let right = display(Rect::new(1920, 0, 2560, 1440), false);
        let window = Rect::new(1800, 100, 500, 650);
        assert_eq!(choose_display(window, &[left, right]).unwrap(), right);
    }

    #[test]
    fn offscreen_window_uses_primary() {
        let secondary = display(Rect::new(1920, 0, 1920, 1080), false);
        let primary = display(Rect::new(0, 0, 1920, 1080), true);
        let window = Rect::new(-5000, -5000, 500, 650);
        assert_eq!(
            choose_display(window, &[secondary, primary]).unwrap(),
            primary
        );
    }

    #[test]
    fn no_displays_is_an_error() {
        assert_eq!(
            choose_display(Rect::new(0, 0, 10, 10), &[]),
            Err(LayoutError::NoDisplay)
        );
    }

    #[test]
    fn centering() {
        let rect = centered(Rect::new(7, 9, 500, 650), Rect::new(0, 0, 1920, 1080));
        assert_eq!(rect, Rect::new(710, 215, 500, 650));
    }
}
