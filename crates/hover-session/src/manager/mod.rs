//! The SessionManager coordinates windows, views, layout, and shortcuts.
//!
//! Entry points are called from the app's event loop: OS window events,
//! webview events, IPC messages, and [`SessionManager::tick`] for deferred
//! work. Requests the session cannot fulfil itself (quitting, opening a
//! native window, persisting settings) are queued as [`AppRequest`]s.

mod actions;
mod arbiter;
mod canvas;
mod files;
mod ipc;
mod settings;
mod tick;
mod types;
mod windows;

#[cfg(test)]
pub(crate) mod test_support;

pub use types::*;
