//! Embedded web content for Hover windows.
//!
//! Wraps the `wry` crate to provide:
//! - the [`ContentView`] capability and its wry implementation
//! - the View Attachment Manager ([`ViewAttachments`])
//! - bidirectional IPC (Rust <-> JavaScript)
//! - the `hover://` protocol for bundled pages
//! - page scripts for scroll preservation and chat automation

pub mod attachments;
pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod scripts;
pub mod view;

pub use attachments::{AttachConflict, ScriptOutcome, ViewAttachments, SCRIPT_TIMEOUT};
pub use content::{ContentProvider, LocalPage, NavigationPolicy};
pub use events::{PageLoadState, ScriptRequestId, WebViewEvent};
pub use ipc::{IpcKind, IpcMessage};
pub use manager::{default_data_dir, WebViewConfig, WebViewManager, WryContentView};
pub use view::{ContentView, ViewFactory};
