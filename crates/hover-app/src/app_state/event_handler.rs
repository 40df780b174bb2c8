//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId as WinitWindowId;

use hover_common::WindowId;
use hover_platform::{normalize_winit_key, KeyCombo};

use super::core::HoverApp;

impl ApplicationHandler for HoverApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        self.initialize_session();
        if !self.open_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WinitWindowId,
        event: WindowEvent,
    ) {
        let Some(id) = self.window_for(window_id) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(window = %id, "Window close requested");
                if let Some(session) = self.session.as_mut() {
                    session.close_window(id);
                }
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.fit_chrome(id);
                    if let Some(session) = self.session.as_mut() {
                        session.on_window_moved(id);
                    }
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.fit_chrome(id);
                if let Some(session) = self.session.as_mut() {
                    session.on_window_moved(id);
                }
            }

            WindowEvent::Moved(_) => {
                if let Some(session) = self.session.as_mut() {
                    session.on_window_moved(id);
                }
            }

            WindowEvent::Focused(focused) => {
                if let Some(session) = self.session.as_mut() {
                    session.on_window_focus(id, focused);
                }
            }

            WindowEvent::ThemeChanged(_) => {
                if let Some(session) = self.session.as_ref() {
                    session.broadcast_theme();
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl HoverApp {
    fn fit_chrome(&self, id: WindowId) {
        if let Some(handle) = self.windows.borrow().get(&id) {
            handle.fit_chrome();
        }
    }

    /// Keys pressed while the native window itself has focus.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;
        if state != ElementState::Pressed || repeat {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalize_winit_key(&key_name),
        );
        if let Some(session) = self.session.as_mut() {
            if session.handle_local_key(&combo) {
                tracing::debug!(%combo, "local shortcut");
            }
        }
    }
}
