pub mod actions;
pub mod errors;
pub mod events;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, HoverError, LayoutError, PlatformError, ViewError};
pub use events::{Event, EventBus};
pub use types::{LayoutMode, Rect, ViewId, WindowId};

pub type Result<T> = std::result::Result<T, HoverError>;
