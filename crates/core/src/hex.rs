//! Pointy-top hexagon grid with odd rows shifted right by half a hexagon.
//!
//! Decorative only: every hexagon has the same fill and carries no terrain.

use std::f64::consts::PI;

use crate::shapes::{Polygon, Shape};
use crate::types::{Point, Rgb, HEX_GRID_HEIGHT, HEX_GRID_WIDTH, HEX_SIZE};
use crate::viewport::ViewportState;

/// Canvas color behind the hex grid.
pub const HEX_BACKGROUND: Rgb = Rgb::new(0xF0, 0xF0, 0xF0);

/// Margin between the canvas edge and the first hexagon's bounding box.
const HEX_MARGIN: f64 = 10.0;

/// Six vertices of a pointy-top hexagon, starting at 30° and turning clockwise
/// in screen space (y grows downward).
pub fn hex_vertices(center: Point, size: f64) -> [Point; 6] {
    let mut out = [Point::default(); 6];
    for (i, p) in out.iter_mut().enumerate() {
        let angle = (60.0 * i as f64 + 30.0) * PI / 180.0;
        *p = Point::new(center.x + size * angle.cos(), center.y + size * angle.sin());
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct HexLayout {
    /// Center-to-corner radius in world pixels.
    pub size: f64,
    pub cols: usize,
    pub rows: usize,
    /// World position of the center of hexagon (0, 0).
    pub start: Point,
    pub fill: Rgb,
    pub outline: Rgb,
    pub outline_width: f64,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::new(HEX_SIZE, HEX_GRID_WIDTH, HEX_GRID_HEIGHT)
    }
}

impl HexLayout {
    pub fn new(size: f64, cols: usize, rows: usize) -> Self {
        let width = 3f64.sqrt() * size;
        let height = 2.0 * size;
        Self {
            size,
            cols,
            rows,
            start: Point::new(width / 2.0 + HEX_MARGIN, height / 2.0 + HEX_MARGIN),
            fill: Rgb::WHITE,
            outline: Rgb::BLACK,
            outline_width: 2.0,
        }
    }

    /// Distance between neighbouring centers in a row.
    pub fn horiz_spacing(&self) -> f64 {
        3f64.sqrt() * self.size
    }

    /// Distance between rows (three quarters of a hexagon's height).
    pub fn vert_spacing(&self) -> f64 {
        2.0 * self.size * 0.75
    }

    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// World-space center of the hexagon at `col`, `row`.
    pub fn center(&self, col: usize, row: usize) -> Point {
        let h = self.horiz_spacing();
        let shift = if row % 2 == 1 { h / 2.0 } else { 0.0 };
        Point::new(
            self.start.x + col as f64 * h + shift,
            self.start.y + row as f64 * self.vert_spacing(),
        )
    }

    /// Canvas size that fits the whole grid plus margins, in world pixels.
    pub fn world_size(&self) -> (f64, f64) {
        let h = self.horiz_spacing();
        let v = self.vert_spacing();
        (
            self.cols as f64 * h + h / 2.0 + self.size,
            self.rows as f64 * v + v + self.size,
        )
    }

    /// All hexagons transformed to screen space, row-major.
    pub fn shapes(&self, viewport: &ViewportState) -> Vec<Shape> {
        let mut out = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let points: Polygon = hex_vertices(self.center(col, row), self.size)
                    .into_iter()
                    .map(|p| viewport.world_to_screen(p))
                    .collect();
                out.push(Shape {
                    points,
                    fill: self.fill,
                    outline: self.outline,
                    outline_width: self.outline_width * viewport.zoom,
                });
            }
        }
        out
    }
}
