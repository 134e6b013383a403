//! Pan/zoom viewport transform.
//!
//! `screen = pan + world * zoom`. Pan is expressed in screen pixels and is not
//! scaled by zoom, so a drag of N pixels always moves the map N pixels.

use tracing::trace;

use crate::types::{
    Point, ZoomDirection, IMAGE_MAX_ZOOM, IMAGE_MIN_ZOOM, MAP_MAX_ZOOM, MAP_MIN_ZOOM,
    WHEEL_ZOOM_STEP,
};

/// Pan offset and zoom factor of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl ViewportState {
    pub const fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self { pan_x, pan_y, zoom }
    }

    /// State at `zoom` that centers `content_w x content_h` world pixels on a
    /// `screen_w x screen_h` screen. Pan is floored to whole pixels.
    pub fn centered(content_w: f64, content_h: f64, screen_w: f64, screen_h: f64, zoom: f64) -> Self {
        Self {
            pan_x: ((screen_w - content_w * zoom) / 2.0).floor(),
            pan_y: ((screen_h - content_h * zoom) / 2.0).floor(),
            zoom,
        }
    }

    #[inline]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(self.pan_x + world.x * self.zoom, self.pan_y + world.y * self.zoom)
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }
}

/// Inclusive zoom range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl ZoomLimits {
    /// Tile and hex map viewers.
    pub const MAP: ZoomLimits = ZoomLimits {
        min: MAP_MIN_ZOOM,
        max: MAP_MAX_ZOOM,
    };

    /// Raster image viewer.
    pub const IMAGE: ZoomLimits = ZoomLimits {
        min: IMAGE_MIN_ZOOM,
        max: IMAGE_MAX_ZOOM,
    };

    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    pub fn contains(&self, zoom: f64) -> bool {
        self.min <= zoom && zoom <= self.max
    }
}

/// Mutable viewport driven by pointer gestures.
///
/// Owns a [`ViewportState`] and keeps `limits.min <= zoom <= limits.max` after
/// every update.
#[derive(Debug, Clone)]
pub struct ViewportTransform {
    state: ViewportState,
    limits: ZoomLimits,
    step: f64,
    /// Last cursor position while a pan drag is active.
    drag: Option<Point>,
}

impl ViewportTransform {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            state: ViewportState::default(),
            limits,
            step: WHEEL_ZOOM_STEP,
            drag: None,
        }
    }

    /// Override the wheel zoom step (default 1.1).
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.state.pan_x, self.state.pan_y)
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        self.state.world_to_screen(world)
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.state.screen_to_world(screen)
    }

    /// Replace the state (zoom is clamped) and cancel any drag in progress.
    pub fn reset(&mut self, state: ViewportState) {
        self.state = ViewportState {
            zoom: self.limits.clamp(state.zoom),
            ..state
        };
        self.drag = None;
    }

    pub fn begin_pan(&mut self, at: Point) {
        self.drag = Some(at);
    }

    /// Move the view by the cursor delta since the last recorded position.
    ///
    /// Returns `false` when no drag is active or the delta is zero.
    pub fn update_pan(&mut self, at: Point) -> bool {
        let Some(last) = self.drag else {
            return false;
        };
        let (dx, dy) = at.delta(last);
        self.drag = Some(at);
        self.pan_by(dx, dy)
    }

    pub fn end_pan(&mut self) {
        self.drag = None;
    }

    pub fn is_panning(&self) -> bool {
        self.drag.is_some()
    }

    /// Add a screen-space offset to the pan. Unbounded.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.state.pan_x += dx;
        self.state.pan_y += dy;
        true
    }

    /// Wheel zoom keeping the world point under `anchor` fixed on screen.
    pub fn zoom_at(&mut self, anchor: Point, direction: ZoomDirection) -> bool {
        self.zoom_by(anchor, direction, self.step)
    }

    /// Like [`zoom_at`](Self::zoom_at) with an explicit step factor.
    pub fn zoom_by(&mut self, anchor: Point, direction: ZoomDirection, step: f64) -> bool {
        let requested = direction.apply(self.state.zoom, step);
        self.zoom_to(anchor, requested)
    }

    /// Set zoom to `requested` (clamped) around `anchor`.
    ///
    /// The pan correction uses the ratio between the clamped and the previous
    /// zoom. When clamping leaves zoom unchanged, pan is left untouched.
    pub fn zoom_to(&mut self, anchor: Point, requested: f64) -> bool {
        let old = self.state.zoom;
        let zoom = self.limits.clamp(requested);
        if zoom == old {
            return false;
        }

        let ratio = zoom / old;
        self.state.pan_x = anchor.x - (anchor.x - self.state.pan_x) * ratio;
        self.state.pan_y = anchor.y - (anchor.y - self.state.pan_y) * ratio;
        self.state.zoom = zoom;
        trace!(zoom, pan_x = self.state.pan_x, pan_y = self.state.pan_y, "zoom changed");
        true
    }
}
