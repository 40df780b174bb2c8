//! Window session core for Hover.
//!
//! Owns every floating window and its content view, and drives the
//! behaviour around them: the canvas layout state machine, bounds
//! animation, shortcut registration, and the focus/visibility rules.
//! Nothing here touches winit or wry directly; the app supplies those
//! through the [`NativeWindow`], [`DisplayProvider`] and
//! [`ViewFactory`](hover_webview::ViewFactory) traits.

pub mod animator;
pub mod geometry;
pub mod manager;
pub mod platform;
pub mod registry;
pub mod shortcuts;
pub mod timeline;

pub use animator::LayoutTransition;
pub use manager::{AppRequest, IpcOrigin, SessionManager, SessionServices};
pub use platform::{Clock, Display, DisplayProvider, NativeWindow, SystemClock};
pub use registry::{LayoutState, OnTopOverride, WindowRegistry};
pub use shortcuts::ShortcutDispatcher;
pub use timeline::{ScheduledTask, Timeline};
