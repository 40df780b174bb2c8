//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the native windows and their chrome pages and hands
//! everything else to the session manager.

mod core;
mod event_handler;
mod init;
mod polling;
mod requests;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::HoverApp;
