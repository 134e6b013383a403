//! Terminal front-end for the map viewers.
//!
//! A small rendering layer on top of crossterm. It avoids widget toolkits and
//! renders into a framebuffer that is diff-flushed to the terminal:
//!
//! - [`fb`]: styled character cells
//! - [`canvas`]: half-block dot canvas that rasterizes shapes and images
//! - [`view`]: header, map area, status row and overlays
//! - [`renderer`]: raw mode, alternate screen, mouse capture, diff flushing
//! - [`render_throttle`]: frame pacing keyed on a scene fingerprint

pub mod canvas;
pub mod fb;
pub mod render_throttle;
pub mod renderer;
pub mod view;

pub use wargame_core as core;
pub use wargame_types as types;

pub use canvas::{DotCanvas, OUTLINE_MIN_DOTS};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::{Fnv1aHasher, RenderThrottle};
pub use renderer::{
    changed_runs, encode_enter_into, encode_exit_into, encode_full_into, encode_runs_into, Run,
    TerminalRenderer,
};
pub use view::{Backdrop, Chrome, MapArea, ViewerView, Viewport, FOOTER_ROWS, HEADER_ROWS};
