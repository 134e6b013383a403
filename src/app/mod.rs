//! Shared terminal event loop for the three viewers.
//!
//! Each viewer implements [`ViewerApp`]; [`Viewer`] owns it together with the
//! overlay state (help, error, path prompt) and turns crossterm events into
//! session calls. Everything except [`run`] is free of terminal I/O.

pub mod hex;
pub mod image;
pub mod tiles;

use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use tracing::{info, warn};

use crate::core::{Scene, ScreenSize, ViewerError};
use crate::input::{handle_key_event, should_quit, PointerMapper};
use crate::term::{
    Backdrop, Chrome, DotCanvas, Fnv1aHasher, FrameBuffer, RenderThrottle, TerminalRenderer,
    ViewerView, Viewport,
};
use crate::types::{ViewerAction, FRAME_MS};

pub use hex::HexApp;
pub use image::ImageApp;
pub use tiles::TileMapApp;

/// Unchanged frames are repainted at most this often.
pub const STATIC_FRAME_INTERVAL_MS: u64 = 250;

/// One viewer front-end: its session plus what it shows around it.
pub trait ViewerApp {
    fn title(&self) -> &str;

    fn scene(&self) -> &dyn Scene;

    fn scene_mut(&mut self) -> &mut dyn Scene;

    fn help(&self) -> &'static [&'static str];

    /// Status row text when no prompt is open.
    fn status(&self) -> String;

    /// Header tabs and the selected one.
    fn tabs(&self) -> (&[String], Option<usize>) {
        (&[], None)
    }

    /// Centered message over the map area.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Whether `o` opens the path prompt.
    fn accepts_path(&self) -> bool {
        false
    }

    /// Called once the terminal size is known.
    fn start(&mut self, _screen: ScreenSize) -> Result<(), ViewerError> {
        Ok(())
    }

    /// Viewer-specific actions (map selection). Returns `true` when handled.
    fn handle_action(
        &mut self,
        _action: ViewerAction,
        _screen: ScreenSize,
    ) -> Result<bool, ViewerError> {
        Ok(false)
    }

    fn open_path(&mut self, _path: &str, _screen: ScreenSize) -> Result<(), ViewerError> {
        Ok(())
    }

    /// Refresh cached drawables before [`backdrop`](Self::backdrop).
    fn prepare(&mut self) {}

    fn backdrop(&self) -> Backdrop<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A viewer app plus overlay state and its terminal view.
pub struct Viewer<A> {
    app: A,
    view: ViewerView,
    show_help: bool,
    error: Option<String>,
    prompt: Option<String>,
}

impl<A: ViewerApp> Viewer<A> {
    pub fn new(app: A, px_per_dot: f64) -> Self {
        Self {
            app,
            view: ViewerView::new(px_per_dot),
            show_help: false,
            error: None,
            prompt: None,
        }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    pub fn screen_size(&self, viewport: Viewport) -> ScreenSize {
        self.view.screen_size(viewport)
    }

    pub fn start(&mut self, viewport: Viewport) {
        let screen = self.screen_size(viewport);
        if let Err(e) = self.app.start(screen) {
            self.report(e);
        }
    }

    fn report(&mut self, error: ViewerError) {
        warn!(error = %error, "viewer error");
        self.error = Some(error.to_string());
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent, viewport: Viewport) -> Flow {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Quit;
        }
        let screen = self.screen_size(viewport);

        if let Some(buffer) = self.prompt.as_mut() {
            match key.code {
                KeyCode::Esc => self.prompt = None,
                KeyCode::Enter => {
                    let path = buffer.trim().to_string();
                    self.prompt = None;
                    if !path.is_empty() {
                        if let Err(e) = self.app.open_path(&path, screen) {
                            self.report(e);
                        }
                    }
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) => buffer.push(c),
                _ => {}
            }
            return Flow::Continue;
        }

        if self.error.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.error = None;
            }
            return Flow::Continue;
        }

        if key.code == KeyCode::Esc && self.show_help {
            self.show_help = false;
            return Flow::Continue;
        }
        if should_quit(key) {
            return Flow::Quit;
        }

        let Some(action) = handle_key_event(key) else {
            return Flow::Continue;
        };
        match action {
            ViewerAction::ToggleHelp => self.show_help = !self.show_help,
            ViewerAction::Dismiss => self.show_help = false,
            ViewerAction::OpenFile => {
                if self.app.accepts_path() {
                    self.prompt = Some(String::new());
                }
            }
            ViewerAction::ZoomIn
            | ViewerAction::ZoomOut
            | ViewerAction::ResetView
            | ViewerAction::PanLeft
            | ViewerAction::PanRight
            | ViewerAction::PanUp
            | ViewerAction::PanDown => {
                self.app.scene_mut().apply_view_action(action, screen);
            }
            ViewerAction::NextMap | ViewerAction::PrevMap | ViewerAction::SelectMap(_) => {
                if let Err(e) = self.app.handle_action(action, screen) {
                    self.report(e);
                }
            }
        }
        Flow::Continue
    }

    /// Handle one mouse event. Ignored while a modal overlay is open.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, viewport: Viewport) {
        if self.prompt.is_some() || self.error.is_some() {
            return;
        }
        let area = self.view.map_area(viewport);
        let mapper = PointerMapper::new(self.view.px_per_dot(), area.top, area.rows);
        if let Some(gesture) = mapper.map_mouse_event(mouse) {
            self.app.scene_mut().apply_gesture(gesture);
        }
    }

    /// Whether a drag is in progress (frames are not throttled then).
    pub fn is_dragging(&self) -> bool {
        self.app.scene().transform().is_panning()
    }

    /// Hash of everything that affects the picture.
    pub fn fingerprint(&self, viewport: Viewport) -> u64 {
        let mut h = Fnv1aHasher::new();
        let state = self.app.scene().viewport();
        h.write_f64(state.pan_x);
        h.write_f64(state.pan_y);
        h.write_f64(state.zoom);
        viewport.width.hash(&mut h);
        viewport.height.hash(&mut h);
        self.show_help.hash(&mut h);
        self.error.hash(&mut h);
        self.prompt.hash(&mut h);
        self.app.title().hash(&mut h);
        self.app.tabs().1.hash(&mut h);
        h.finish()
    }

    pub fn render_into(&mut self, viewport: Viewport, canvas: &mut DotCanvas, fb: &mut FrameBuffer) {
        self.app.prepare();
        let status = self.app.status();
        let (tabs, selected_tab) = self.app.tabs();
        let chrome = Chrome {
            title: self.app.title(),
            tabs,
            selected_tab,
            zoom: self.app.scene().viewport().zoom,
            status: &status,
            hint: self.app.hint(),
            error: self.error.as_deref(),
            help: self.show_help.then(|| self.app.help()),
            prompt: self.prompt.as_deref(),
        };
        self.view
            .render_into(self.app.backdrop(), &chrome, viewport, canvas, fb);
    }

    pub fn render(&mut self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let mut canvas = DotCanvas::new(0, 0, self.view.px_per_dot());
        self.render_into(viewport, &mut canvas, &mut fb);
        fb
    }

    fn run_loop(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut viewport = Viewport::new(w, h);
        self.start(viewport);

        let started = Instant::now();
        let frame = Duration::from_millis(FRAME_MS);
        let mut throttle = RenderThrottle::new(STATIC_FRAME_INTERVAL_MS);
        let mut fb = FrameBuffer::new(w, h);
        let mut canvas = DotCanvas::new(w, h, self.view.px_per_dot());

        loop {
            let now_ms = started.elapsed().as_millis() as u64;
            if throttle.should_render(now_ms, self.fingerprint(viewport), !self.is_dragging()) {
                self.render_into(viewport, &mut canvas, &mut fb);
                term.present(&mut fb)?;
            }

            if !event::poll(frame)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key, viewport) == Flow::Quit {
                        info!("quit requested");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse, viewport),
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }
    }
}

/// Run `app` in the terminal until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run<A: ViewerApp>(app: A, px_per_dot: f64) -> Result<()> {
    let mut viewer = Viewer::new(app, px_per_dot);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = viewer.run_loop(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
