//! Viewer sessions: the single mutable owner of content and viewport.
//!
//! A session is driven by a host event loop. Loads either fully succeed and
//! swap the content in, or fail and leave every field untouched.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::grid::TerrainGrid;
use crate::hex::HexLayout;
use crate::maps::MapLibrary;
use crate::raster::RasterImage;
use crate::shapes::{square_tiles_into, Shape};
use crate::types::{Gesture, Point, ViewerAction, ZoomDirection, KEY_ZOOM_STEP, WHEEL_ZOOM_STEP};
use crate::viewport::{ViewportState, ViewportTransform, ZoomLimits};

/// Size of the drawing area in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Common gesture and keyboard handling over a viewport.
pub trait Scene {
    fn transform(&self) -> &ViewportTransform;

    fn transform_mut(&mut self) -> &mut ViewportTransform;

    /// Whether anything is loaded. Gestures and view actions are ignored otherwise.
    fn has_content(&self) -> bool;

    /// The view a freshly loaded content starts with.
    fn home_view(&self, screen: ScreenSize) -> ViewportState;

    /// Zoom step for keyboard zoom.
    fn key_zoom_step(&self) -> f64 {
        WHEEL_ZOOM_STEP
    }

    fn viewport(&self) -> ViewportState {
        self.transform().state()
    }

    /// Apply a pointer gesture. Returns `true` when the view changed.
    fn apply_gesture(&mut self, gesture: Gesture) -> bool {
        if !self.has_content() {
            return false;
        }
        let vt = self.transform_mut();
        match gesture {
            Gesture::BeginPan(at) => {
                vt.begin_pan(at);
                false
            }
            Gesture::Drag(at) => vt.update_pan(at),
            Gesture::EndPan => {
                vt.end_pan();
                false
            }
            Gesture::Zoom(at, direction) => vt.zoom_at(at, direction),
        }
    }

    /// Apply zoom, pan and reset actions. Returns `true` when the view changed.
    fn apply_view_action(&mut self, action: ViewerAction, screen: ScreenSize) -> bool {
        if !self.has_content() {
            return false;
        }
        match action {
            ViewerAction::ZoomIn | ViewerAction::ZoomOut => {
                let direction = if action == ViewerAction::ZoomIn {
                    ZoomDirection::In
                } else {
                    ZoomDirection::Out
                };
                let step = self.key_zoom_step();
                self.transform_mut().zoom_by(screen.center(), direction, step)
            }
            ViewerAction::ResetView => {
                let home = self.home_view(screen);
                self.transform_mut().reset(home);
                true
            }
            other => match other.pan_delta() {
                Some((dx, dy)) => self.transform_mut().pan_by(dx, dy),
                None => false,
            },
        }
    }
}

/// Tile-map viewer state: the map library, the current grid and its view.
#[derive(Debug)]
pub struct MapSession {
    library: MapLibrary,
    available: Vec<String>,
    /// Index of the loaded map.
    selected: Option<usize>,
    /// Index of the last map the user asked for, loaded or not.
    cursor: Option<usize>,
    grid: Option<TerrainGrid>,
    view: ViewportTransform,
    tile_size: f64,
}

impl MapSession {
    /// Session over `library` with nothing listed or loaded yet.
    pub fn new(library: MapLibrary, tile_size: f64) -> Self {
        Self {
            library,
            available: Vec::new(),
            selected: None,
            cursor: None,
            grid: None,
            view: ViewportTransform::new(ZoomLimits::MAP),
            tile_size,
        }
    }

    /// List the library (seeding default maps if empty). No map is loaded yet.
    pub fn open(library: MapLibrary, tile_size: f64) -> Result<Self> {
        let mut session = Self::new(library, tile_size);
        session.refresh()?;
        Ok(session)
    }

    /// Re-list the library.
    ///
    /// On error the previous listing stays. The loaded grid is kept either way.
    pub fn refresh(&mut self) -> Result<()> {
        let available = self.library.list().inspect_err(|e| {
            warn!(dir = %self.library.dir().display(), error = %e, "map listing failed");
        })?;

        let position =
            |stem: Option<&str>| stem.and_then(|s| available.iter().position(|a| a == s));
        let selected = position(self.selected_stem());
        let cursor = position(
            self.cursor
                .and_then(|i| self.available.get(i))
                .map(String::as_str),
        );
        self.selected = selected;
        self.cursor = cursor.or(selected);
        self.available = available;
        Ok(())
    }

    pub fn library(&self) -> &MapLibrary {
        &self.library
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_stem(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.available.get(i))
            .map(String::as_str)
    }

    /// Index that next/previous step from. Moves onto a map even when its load fails.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn grid(&self) -> Option<&TerrainGrid> {
        self.grid.as_ref()
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Load `stem` and center it on `screen` at zoom 1.
    ///
    /// On error nothing changes: the previous grid, selection and view stay.
    pub fn load(&mut self, stem: &str, screen: ScreenSize) -> Result<()> {
        let grid = self.library.load(stem).inspect_err(|e| {
            warn!(stem, error = %e, "map load failed");
        })?;

        let (w, h) = grid.world_size(self.tile_size);
        self.view
            .reset(ViewportState::centered(w, h, screen.width, screen.height, 1.0));
        self.grid = Some(grid);
        if let Some(i) = self.available.iter().position(|s| s == stem) {
            self.selected = Some(i);
            self.cursor = Some(i);
        }
        debug!(stem, "map selected");
        Ok(())
    }

    /// Load the map at `index` of [`available`](Self::available).
    ///
    /// An out-of-range index is ignored. The cursor moves to `index` even when
    /// the load fails, so stepping continues past a broken map.
    pub fn select(&mut self, index: usize, screen: ScreenSize) -> Result<()> {
        let Some(stem) = self.available.get(index).cloned() else {
            return Ok(());
        };
        self.cursor = Some(index);
        self.load(&stem, screen)
    }

    pub fn select_next(&mut self, screen: ScreenSize) -> Result<()> {
        if self.available.is_empty() {
            return Ok(());
        }
        let next = match self.cursor {
            Some(i) => (i + 1) % self.available.len(),
            None => 0,
        };
        self.select(next, screen)
    }

    pub fn select_prev(&mut self, screen: ScreenSize) -> Result<()> {
        if self.available.is_empty() {
            return Ok(());
        }
        let len = self.available.len();
        let prev = match self.cursor {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.select(prev, screen)
    }

    /// Square tiles of the current grid under the current view.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut out = Vec::new();
        self.shapes_into(&mut out);
        out
    }

    pub fn shapes_into(&self, out: &mut Vec<Shape>) {
        match &self.grid {
            Some(grid) => square_tiles_into(grid, &self.view.state(), self.tile_size, out),
            None => out.clear(),
        }
    }
}

impl Scene for MapSession {
    fn transform(&self) -> &ViewportTransform {
        &self.view
    }

    fn transform_mut(&mut self) -> &mut ViewportTransform {
        &mut self.view
    }

    fn has_content(&self) -> bool {
        self.grid.is_some()
    }

    fn home_view(&self, screen: ScreenSize) -> ViewportState {
        match &self.grid {
            Some(grid) => {
                let (w, h) = grid.world_size(self.tile_size);
                ViewportState::centered(w, h, screen.width, screen.height, 1.0)
            }
            None => ViewportState::default(),
        }
    }
}

/// Decorative hex-grid viewer state.
#[derive(Debug, Clone)]
pub struct HexSession {
    layout: HexLayout,
    view: ViewportTransform,
}

impl Default for HexSession {
    fn default() -> Self {
        Self::new(HexLayout::default())
    }
}

impl HexSession {
    pub fn new(layout: HexLayout) -> Self {
        Self {
            layout,
            view: ViewportTransform::new(ZoomLimits::MAP),
        }
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    pub fn shapes(&self) -> Vec<Shape> {
        self.layout.shapes(&self.view.state())
    }
}

impl Scene for HexSession {
    fn transform(&self) -> &ViewportTransform {
        &self.view
    }

    fn transform_mut(&mut self) -> &mut ViewportTransform {
        &mut self.view
    }

    fn has_content(&self) -> bool {
        !self.layout.is_empty()
    }

    fn home_view(&self, _screen: ScreenSize) -> ViewportState {
        ViewportState::default()
    }
}

/// Raster-image viewer state.
#[derive(Debug)]
pub struct ImageSession {
    image: Option<RasterImage>,
    view: ViewportTransform,
}

impl Default for ImageSession {
    fn default() -> Self {
        Self {
            image: None,
            view: ViewportTransform::new(ZoomLimits::IMAGE),
        }
    }
}

impl ImageSession {
    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    /// Decode `path` and show it at zoom 1, pan (0, 0).
    ///
    /// On error the previous image and view stay displayed.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let image = RasterImage::open(path.as_ref()).inspect_err(|e| {
            warn!(error = %e, "image load failed");
        })?;
        self.image = Some(image);
        self.view.reset(ViewportState::default());
        Ok(())
    }
}

impl Scene for ImageSession {
    fn transform(&self) -> &ViewportTransform {
        &self.view
    }

    fn transform_mut(&mut self) -> &mut ViewportTransform {
        &mut self.view
    }

    fn has_content(&self) -> bool {
        self.image.is_some()
    }

    fn home_view(&self, _screen: ScreenSize) -> ViewportState {
        ViewportState::default()
    }

    fn key_zoom_step(&self) -> f64 {
        KEY_ZOOM_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_session_ignores_gestures_until_loaded() {
        let mut s = ImageSession::default();
        assert!(!s.apply_gesture(Gesture::Zoom(Point::new(5.0, 5.0), ZoomDirection::In)));
        s.apply_gesture(Gesture::BeginPan(Point::new(0.0, 0.0)));
        assert!(!s.apply_gesture(Gesture::Drag(Point::new(9.0, 9.0))));
        assert_eq!(s.viewport(), ViewportState::default());
    }

    #[test]
    fn hex_session_zooms_with_keyboard_about_center() {
        let mut s = HexSession::default();
        let screen = ScreenSize::new(200.0, 100.0);
        assert!(s.apply_view_action(ViewerAction::ZoomIn, screen));
        let vp = s.viewport();
        assert!((vp.zoom - WHEEL_ZOOM_STEP).abs() < 1e-12);
        // The screen center maps to the same world point as before.
        let w = vp.screen_to_world(screen.center());
        assert!((w.x - 100.0).abs() < 1e-9);
        assert!((w.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn reset_view_restores_home() {
        let mut s = HexSession::default();
        let screen = ScreenSize::new(200.0, 100.0);
        s.apply_view_action(ViewerAction::PanLeft, screen);
        assert_ne!(s.viewport(), ViewportState::default());
        assert!(s.apply_view_action(ViewerAction::ResetView, screen));
        assert_eq!(s.viewport(), ViewportState::default());
    }

    #[test]
    fn image_keyboard_zoom_uses_larger_step() {
        assert_eq!(ImageSession::default().key_zoom_step(), KEY_ZOOM_STEP);
    }
}
