use hover_common::Rect;
use hover_session::{Display, DisplayProvider};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::monitor::MonitorHandle;

use super::window::WindowMap;

/// Monitors as reported through any open window.
pub struct MonitorDisplays {
    windows: WindowMap,
}

impl MonitorDisplays {
    pub fn new(windows: WindowMap) -> Self {
        Self { windows }
    }
}

impl DisplayProvider for MonitorDisplays {
    fn displays(&self) -> Vec<Display> {
        let windows = self.windows.borrow();
        let Some(handle) = windows.values().next() else {
            return Vec::new();
        };
        let primary = handle.window.primary_monitor();
        handle
            .window
            .available_monitors()
            .map(|monitor| {
                let is_primary = primary.as_ref() == Some(&monitor);
                to_display(&monitor, is_primary)
            })
            .collect()
    }
}

fn to_display(monitor: &MonitorHandle, primary: bool) -> Display {
    let bounds = logical_bounds(monitor.position(), monitor.size(), monitor.scale_factor());
    // winit does not expose the work area; use the full monitor.
    Display {
        bounds,
        work_area: bounds,
        primary,
    }
}

/// Physical monitor geometry in logical units.
fn logical_bounds(position: PhysicalPosition<i32>, size: PhysicalSize<u32>, scale: f64) -> Rect {
    let position = position.to_logical::<f64>(scale);
    let size = size.to_logical::<f64>(scale);
    Rect::new(
        position.x.round() as i32,
        position.y.round() as i32,
        size.width.round() as i32,
        size.height.round() as i32,
    )
}
