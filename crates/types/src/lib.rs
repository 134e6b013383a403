//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the viewer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core transform logic, terminal rendering, input mapping).
//!
//! # Coordinate Spaces
//!
//! - **World**: map pixels. A square tile at column `x` starts at `x * TILE_SIZE`.
//! - **Screen**: display pixels. `screen = pan + world * zoom`.
//!
//! Both spaces use [`Point`]; functions name which space they expect.
//!
//! # Zoom Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WHEEL_ZOOM_STEP` | 1.1 | Multiplicative step per wheel notch |
//! | `KEY_ZOOM_STEP` | 1.2 | Multiplicative step for keyboard/menu zoom (image viewer) |
//! | `MAP_MIN_ZOOM` / `MAP_MAX_ZOOM` | 0.3 / 3.0 | Tile and hex viewers |
//! | `IMAGE_MIN_ZOOM` / `IMAGE_MAX_ZOOM` | 0.1 / 5.0 | Raster image viewer |
//!
//! # Examples
//!
//! ```
//! use wargame_types::{Rgb, ViewerAction, ZoomDirection};
//!
//! let grass = Rgb::from_hex("#228B22").unwrap();
//! assert_eq!(grass, Rgb::new(34, 139, 34));
//! assert_eq!(grass.to_string(), "#228B22");
//!
//! assert_eq!(ZoomDirection::In.apply(2.0, 2.0), 4.0);
//! assert_eq!(ViewerAction::from_str("resetView"), Some(ViewerAction::ResetView));
//! ```

use std::fmt;

/// Default square tile edge in world pixels
pub const TILE_SIZE: f64 = 50.0;

/// Zoom factor applied per mouse wheel notch
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Zoom factor applied per keyboard zoom in the image viewer
pub const KEY_ZOOM_STEP: f64 = 1.2;

/// Minimum zoom for the tile and hex viewers
pub const MAP_MIN_ZOOM: f64 = 0.3;

/// Maximum zoom for the tile and hex viewers
pub const MAP_MAX_ZOOM: f64 = 3.0;

/// Minimum zoom for the raster image viewer
pub const IMAGE_MIN_ZOOM: f64 = 0.1;

/// Maximum zoom for the raster image viewer
pub const IMAGE_MAX_ZOOM: f64 = 5.0;

/// Pan applied per arrow key press, in screen pixels
pub const KEY_PAN_STEP: f64 = 40.0;

/// Frame budget of the event loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Hexagon radius (center to corner) of the decorative hex grid
pub const HEX_SIZE: f64 = 30.0;

/// Columns of the decorative hex grid
pub const HEX_GRID_WIDTH: usize = 10;

/// Rows of the decorative hex grid
pub const HEX_GRID_HEIGHT: usize = 10;

/// A 2D point in world or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta(self, other: Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        let (dx, dy) = self.delta(other);
        (dx * dx + dy * dy).sqrt()
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    /// Formats as uppercase `#RRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Wheel or keyboard zoom direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Apply a multiplicative step: multiply for `In`, divide for `Out`.
    pub fn apply(self, zoom: f64, step: f64) -> f64 {
        match self {
            ZoomDirection::In => zoom * step,
            ZoomDirection::Out => zoom / step,
        }
    }
}

/// Pointer gestures delivered by the host event loop, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Primary button pressed: start a pan drag
    BeginPan(Point),
    /// Pointer moved while the primary button is held
    Drag(Point),
    /// Primary button released
    EndPan,
    /// Wheel notch at the pointer position
    Zoom(Point, ZoomDirection),
}

/// Keyboard-level viewer commands
///
/// These are shared by all front-ends. Actions that make no sense for a
/// particular viewer (e.g. map selection in the image viewer) are ignored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Zoom in, anchored at the viewport center
    ZoomIn,
    /// Zoom out, anchored at the viewport center
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    /// Restore the default zoom and pan
    ResetView,
    /// Select the next map in the library
    NextMap,
    /// Select the previous map in the library
    PrevMap,
    /// Select a map by zero-based index
    SelectMap(u8),
    /// Open a file (image viewer path prompt)
    OpenFile,
    /// Toggle the help/about overlay
    ToggleHelp,
    /// Dismiss the error overlay
    Dismiss,
}

impl ViewerAction {
    /// Parse action from its camelCase name
    ///
    /// `SelectMap` has no textual form and is never returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use wargame_types::ViewerAction;
    ///
    /// assert_eq!(ViewerAction::from_str("zoomIn"), Some(ViewerAction::ZoomIn));
    /// assert_eq!(ViewerAction::from_str("NEXTMAP"), Some(ViewerAction::NextMap));
    /// assert_eq!(ViewerAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zoomin" => Some(ViewerAction::ZoomIn),
            "zoomout" => Some(ViewerAction::ZoomOut),
            "panleft" => Some(ViewerAction::PanLeft),
            "panright" => Some(ViewerAction::PanRight),
            "panup" => Some(ViewerAction::PanUp),
            "pandown" => Some(ViewerAction::PanDown),
            "resetview" => Some(ViewerAction::ResetView),
            "nextmap" => Some(ViewerAction::NextMap),
            "prevmap" => Some(ViewerAction::PrevMap),
            "openfile" => Some(ViewerAction::OpenFile),
            "togglehelp" => Some(ViewerAction::ToggleHelp),
            "dismiss" => Some(ViewerAction::Dismiss),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerAction::ZoomIn => "zoomIn",
            ViewerAction::ZoomOut => "zoomOut",
            ViewerAction::PanLeft => "panLeft",
            ViewerAction::PanRight => "panRight",
            ViewerAction::PanUp => "panUp",
            ViewerAction::PanDown => "panDown",
            ViewerAction::ResetView => "resetView",
            ViewerAction::NextMap => "nextMap",
            ViewerAction::PrevMap => "prevMap",
            ViewerAction::SelectMap(_) => "selectMap",
            ViewerAction::OpenFile => "openFile",
            ViewerAction::ToggleHelp => "toggleHelp",
            ViewerAction::Dismiss => "dismiss",
        }
    }

    /// Screen-space pan delta for the arrow-key actions.
    pub fn pan_delta(&self) -> Option<(f64, f64)> {
        match self {
            // Moving the view left reveals what is left of it: the map moves right.
            ViewerAction::PanLeft => Some((KEY_PAN_STEP, 0.0)),
            ViewerAction::PanRight => Some((-KEY_PAN_STEP, 0.0)),
            ViewerAction::PanUp => Some((0.0, KEY_PAN_STEP)),
            ViewerAction::PanDown => Some((0.0, -KEY_PAN_STEP)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_match_viewer_behavior() {
        assert_eq!(WHEEL_ZOOM_STEP, 1.1);
        assert_eq!(KEY_ZOOM_STEP, 1.2);
        assert_eq!((MAP_MIN_ZOOM, MAP_MAX_ZOOM), (0.3, 3.0));
        assert_eq!((IMAGE_MIN_ZOOM, IMAGE_MAX_ZOOM), (0.1, 5.0));
        assert_eq!(TILE_SIZE, 50.0);
    }

    #[test]
    fn rgb_hex_parse_and_display() {
        assert_eq!(Rgb::from_hex("#EDC9AF"), Some(Rgb::new(237, 201, 175)));
        assert_eq!(Rgb::from_hex("0077be"), Some(Rgb::new(0, 119, 190)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
        assert_eq!(Rgb::new(139, 137, 137).to_string(), "#8B8989");
    }

    #[test]
    fn zoom_direction_multiplies_or_divides() {
        assert!((ZoomDirection::In.apply(1.0, 1.1) - 1.1).abs() < 1e-12);
        assert!((ZoomDirection::Out.apply(1.1, 1.1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn action_names_roundtrip() {
        for action in [
            ViewerAction::ZoomIn,
            ViewerAction::PanDown,
            ViewerAction::ResetView,
            ViewerAction::PrevMap,
            ViewerAction::OpenFile,
        ] {
            assert_eq!(ViewerAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn pan_keys_move_map_opposite_to_view() {
        assert_eq!(ViewerAction::PanLeft.pan_delta(), Some((KEY_PAN_STEP, 0.0)));
        assert_eq!(ViewerAction::PanDown.pan_delta(), Some((0.0, -KEY_PAN_STEP)));
        assert_eq!(ViewerAction::ZoomIn.pan_delta(), None);
    }
}
