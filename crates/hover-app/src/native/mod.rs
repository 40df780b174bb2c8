//! winit and wry behind the session's platform traits.

mod displays;
mod factory;
mod window;

pub use displays::MonitorDisplays;
pub use factory::WryViewFactory;
pub use window::{SharedWindow, WindowHandle, WindowMap};
