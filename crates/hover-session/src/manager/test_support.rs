//! In-memory fakes for driving a SessionManager in tests.

use std::cell::{Cell, RefCell, RefMut};
use std::rc::Rc;
use std::time::{Duration, Instant};

use hover_common::{PlatformError, Rect, ViewError, ViewId, WindowId};
use hover_config::schema::HoverConfig;
use hover_platform::{CapturePoll, LaunchAtLogin, RecordingShortcuts, ScreenCapture};
use hover_webview::{ContentView, LocalPage, ScriptRequestId, ViewFactory, WebViewEvent};
use serde_json::Value;

use crate::platform::{Clock, Display, DisplayProvider, NativeWindow};

use super::{SessionManager, SessionServices};

// -- Native window --

#[derive(Debug, Default)]
pub(crate) struct FakeWindowState {
    pub rect: Rect,
    pub visible: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub focused: bool,
    pub on_top: bool,
    pub raised: usize,
    pub drags: usize,
    pub dark: Option<bool>,
    pub pages: Vec<LocalPage>,
    pub ipc: Vec<(String, Value)>,
    pub rect_history: Vec<Rect>,
}

#[derive(Clone)]
pub(crate) struct FakeWindow(Rc<RefCell<FakeWindowState>>);

impl FakeWindow {
    pub fn new(rect: Rect) -> Self {
        Self(Rc::new(RefCell::new(FakeWindowState {
            rect,
            visible: true,
            ..Default::default()
        })))
    }

    pub fn state(&self) -> RefMut<'_, FakeWindowState> {
        self.0.borrow_mut()
    }

    pub fn rect(&self) -> Rect {
        self.0.borrow().rect
    }

    /// Payloads of every IPC message of `kind` sent to the chrome.
    pub fn sent(&self, kind: &str) -> Vec<Value> {
        self.0
            .borrow()
            .ipc
            .iter()
            .filter(|(k, _)| k == kind)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl NativeWindow for FakeWindow {
    fn rect(&self) -> Rect {
        self.0.borrow().rect
    }

    fn set_rect(&self, rect: Rect) {
        let mut s = self.0.borrow_mut();
        s.rect = rect;
        s.rect_history.push(rect);
    }

    fn is_visible(&self) -> bool {
        self.0.borrow().visible
    }

    fn set_visible(&self, visible: bool) {
        let mut s = self.0.borrow_mut();
        s.visible = visible;
        if !visible {
            s.focused = false;
        }
    }

    fn is_minimized(&self) -> bool {
        self.0.borrow().minimized
    }

    fn set_minimized(&self, minimized: bool) {
        self.0.borrow_mut().minimized = minimized;
    }

    fn is_maximized(&self) -> bool {
        self.0.borrow().maximized
    }

    fn set_maximized(&self, maximized: bool) {
        self.0.borrow_mut().maximized = maximized;
    }

    fn is_focused(&self) -> bool {
        self.0.borrow().focused
    }

    fn focus(&self) {
        self.0.borrow_mut().focused = true;
    }

    fn set_always_on_top(&self, on_top: bool) {
        self.0.borrow_mut().on_top = on_top;
    }

    fn raise(&self) {
        self.0.borrow_mut().raised += 1;
    }

    fn drag(&self) {
        self.0.borrow_mut().drags += 1;
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.0.borrow().dark
    }

    fn show_page(&self, page: LocalPage) -> Result<(), PlatformError> {
        self.0.borrow_mut().pages.push(page);
        Ok(())
    }

    fn send_ipc(&self, kind: &str, payload: &Value) -> Result<(), ViewError> {
        self.0
            .borrow_mut()
            .ipc
            .push((kind.to_string(), payload.clone()));
        Ok(())
    }
}

// -- Content view --

#[derive(Debug, Default)]
pub(crate) struct FakeViewState {
    pub bounds: Rect,
    pub visible: bool,
    pub url: String,
    pub loads: usize,
    pub reloads: usize,
    pub focused: usize,
    pub scripts: Vec<(ScriptRequestId, String)>,
    pub answered: usize,
    pub ipc: Vec<(String, Value)>,
    pub fail_eval: bool,
}

#[derive(Clone)]
pub(crate) struct FakeView {
    pub id: ViewId,
    pub state: Rc<RefCell<FakeViewState>>,
}

impl FakeView {
    pub fn state(&self) -> RefMut<'_, FakeViewState> {
        self.state.borrow_mut()
    }

    /// Scripts evaluated so far, oldest first.
    pub fn scripts(&self) -> Vec<String> {
        self.state.borrow().scripts.iter().map(|(_, s)| s.clone()).collect()
    }

    pub fn sent(&self, kind: &str) -> Vec<Value> {
        self.state
            .borrow()
            .ipc
            .iter()
            .filter(|(k, _)| k == kind)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl ContentView for FakeView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), ViewError> {
        self.state.borrow_mut().bounds = bounds;
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), ViewError> {
        self.state.borrow_mut().visible = visible;
        Ok(())
    }

    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        let mut s = self.state.borrow_mut();
        s.url = url.to_string();
        s.loads += 1;
        Ok(())
    }

    fn current_url(&self) -> &str {
        ""
    }

    fn reload(&self) -> Result<(), ViewError> {
        self.state.borrow_mut().reloads += 1;
        Ok(())
    }

    fn focus(&self) -> Result<(), ViewError> {
        self.state.borrow_mut().focused += 1;
        Ok(())
    }

    fn evaluate(&self, request: ScriptRequestId, source: &str) -> Result<(), ViewError> {
        let mut s = self.state.borrow_mut();
        if s.fail_eval {
            return Err(ViewError::ScriptFailed {
                view: self.id,
                message: "evaluation refused".into(),
            });
        }
        s.scripts.push((request, source.to_string()));
        Ok(())
    }

    fn send_ipc(&self, kind: &str, payload: &Value) -> Result<(), ViewError> {
        self.state
            .borrow_mut()
            .ipc
            .push((kind.to_string(), payload.clone()));
        Ok(())
    }
}

// -- Factory, displays, capture, clock --

#[derive(Clone, Default)]
pub(crate) struct FakeFactory {
    pub created: Rc<RefCell<Vec<(WindowId, FakeView)>>>,
    pub fail: Rc<Cell<bool>>,
}

impl ViewFactory for FakeFactory {
    fn create(
        &mut self,
        window: WindowId,
        url: &str,
        bounds: Rect,
    ) -> Result<Box<dyn ContentView>, ViewError> {
        if self.fail.get() {
            return Err(ViewError::Backend("no webview runtime".into()));
        }
        let mut created = self.created.borrow_mut();
        let view = FakeView {
            id: ViewId(created.len() as u32 + 1),
            state: Rc::new(RefCell::new(FakeViewState {
                bounds,
                url: url.to_string(),
                loads: 1,
                ..Default::default()
            })),
        };
        created.push((window, view.clone()));
        Ok(Box::new(view))
    }
}

#[derive(Clone)]
pub(crate) struct FakeDisplays(pub Rc<RefCell<Vec<Display>>>);

impl FakeDisplays {
    pub fn full_hd() -> Self {
        let area = Rect::new(0, 0, 1920, 1080);
        Self(Rc::new(RefCell::new(vec![Display {
            bounds: area,
            work_area: area,
            primary: true,
        }])))
    }
}

impl DisplayProvider for FakeDisplays {
    fn displays(&self) -> Vec<Display> {
        self.0.borrow().clone()
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeCaptureState {
    pub begins: usize,
    pub polls: u32,
    pub abandons: usize,
    /// `begin` reports that the snipping tool could not start.
    pub fail_begin: bool,
    /// Image that appears on the given poll.
    pub image_on_poll: Option<(u32, Vec<u8>)>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeCapture(pub Rc<RefCell<FakeCaptureState>>);

impl ScreenCapture for FakeCapture {
    fn begin(&mut self) -> Result<(), PlatformError> {
        let mut s = self.0.borrow_mut();
        s.begins += 1;
        s.polls = 0;
        if s.fail_begin {
            return Err(PlatformError::WindowError("snipping tool missing".into()));
        }
        Ok(())
    }

    fn poll(&mut self) -> CapturePoll {
        let mut s = self.0.borrow_mut();
        s.polls += 1;
        match &s.image_on_poll {
            Some((n, png)) if s.polls >= *n => CapturePoll::Image(png.clone()),
            _ => CapturePoll::Pending,
        }
    }

    fn abandon(&mut self) {
        self.0.borrow_mut().abandons += 1;
    }
}

/// Login entry that records every change.
#[derive(Clone, Default)]
pub(crate) struct FakeLogin(pub Rc<RefCell<Vec<bool>>>);

impl FakeLogin {
    pub fn calls(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }
}

impl LaunchAtLogin for FakeLogin {
    fn set_enabled(&mut self, enabled: bool) -> Result<(), PlatformError> {
        self.0.borrow_mut().push(enabled);
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.0.borrow().last().copied().unwrap_or(false)
    }
}

#[derive(Clone)]
pub(crate) struct ManualClock(Rc<Cell<Instant>>);

impl ManualClock {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(Instant::now())))
    }

    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }

    pub fn set(&self, at: Instant) {
        self.0.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

// -- Harness --

pub(crate) struct Harness {
    pub session: SessionManager,
    pub clock: ManualClock,
    pub factory: FakeFactory,
    pub displays: FakeDisplays,
    pub capture: FakeCapture,
    pub login: FakeLogin,
}

impl Harness {
    /// Session past onboarding, with default settings on one 1920x1080
    /// display.
    pub fn new() -> Self {
        let mut config = HoverConfig::default();
        config.general.onboarding_shown = true;
        Self::with_config(config)
    }

    pub fn with_config(config: HoverConfig) -> Self {
        let clock = ManualClock::new();
        let factory = FakeFactory::default();
        let displays = FakeDisplays::full_hd();
        let capture = FakeCapture::default();
        let login = FakeLogin::default();
        let session = SessionManager::new(
            config,
            SessionServices {
                view_factory: Box::new(factory.clone()),
                displays: Box::new(displays.clone()),
                shortcuts: Box::new(RecordingShortcuts::new()),
                capture: Box::new(capture.clone()),
                launch_at_login: Box::new(login.clone()),
                clock: Box::new(clock.clone()),
            },
        );
        Self {
            session,
            clock,
            factory,
            displays,
            capture,
            login,
        }
    }

    pub fn open_window(&mut self, rect: Rect) -> (WindowId, FakeWindow) {
        let id = self.session.allocate_window_id();
        let fake = FakeWindow::new(rect);
        self.session.add_window(id, Box::new(fake.clone()));
        (id, fake)
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Let `ms` milliseconds pass, waking at every deadline on the way.
    pub fn advance(&mut self, ms: u64) {
        let end = self.clock.now() + Duration::from_millis(ms);
        while let Some(deadline) = self.session.next_deadline() {
            if deadline > end {
                break;
            }
            if deadline > self.clock.now() {
                self.clock.set(deadline);
            }
            self.session.tick(self.clock.now());
        }
        self.clock.set(end);
        self.session.tick(end);
    }

    /// The most recent view created for `window`.
    pub fn view(&self, window: WindowId) -> FakeView {
        self.factory
            .created
            .borrow()
            .iter()
            .rev()
            .find(|(w, _)| *w == window)
            .map(|(_, v)| v.clone())
            .expect("window has a view")
    }

    /// Answer every script the view has not answered yet with `result`.
    pub fn answer_scripts(&mut self, window: WindowId, result: &str) {
        let view = self.view(window);
        let pending: Vec<ScriptRequestId> = {
            let mut s = view.state();
            let pending = s.scripts[s.answered..].iter().map(|(r, _)| *r).collect();
            s.answered = s.scripts.len();
            pending
        };
        for request in pending {
            self.session.handle_view_event(WebViewEvent::ScriptResult {
                view: view.id,
                request,
                result: Ok(result.to_string()),
            });
        }
    }
}
