//! Drawable shapes produced from a grid and a viewport.
//!
//! This module is pure (no I/O). Shapes are in screen pixels and are handed to
//! whatever host rasterizes them.

use arrayvec::ArrayVec;

use crate::grid::TerrainGrid;
use crate::types::{Point, Rgb};
use crate::viewport::ViewportState;

/// Outline width of square terrain tiles, in screen pixels.
pub const TILE_OUTLINE_WIDTH: f64 = 1.0;

/// Convex polygon with at most six vertices (squares and hexagons).
pub type Polygon = ArrayVec<Point, 6>;

/// A filled, outlined convex polygon in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub points: Polygon,
    pub fill: Rgb,
    pub outline: Rgb,
    pub outline_width: f64,
}

impl Shape {
    /// Axis-aligned rectangle with a 1px black outline.
    pub fn rect(origin: Point, w: f64, h: f64, fill: Rgb) -> Self {
        let mut points = Polygon::new();
        points.push(origin);
        points.push(Point::new(origin.x + w, origin.y));
        points.push(Point::new(origin.x + w, origin.y + h));
        points.push(Point::new(origin.x, origin.y + h));
        Self {
            points,
            fill,
            outline: Rgb::BLACK,
            outline_width: TILE_OUTLINE_WIDTH,
        }
    }

    /// Top-left vertex for rectangles; first vertex otherwise.
    pub fn origin(&self) -> Point {
        self.points.first().copied().unwrap_or_default()
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Point-in-polygon for convex shapes of either winding. Edges count as inside.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0.0f64;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
            if cross == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Polygon edges as `(start, end)` pairs, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Render every cell of `grid` as a square tile.
///
/// Produces exactly `width * height` shapes in row-major order.
pub fn square_tiles(grid: &TerrainGrid, viewport: &ViewportState, tile_size: f64) -> Vec<Shape> {
    let mut out = Vec::with_capacity(grid.len());
    square_tiles_into(grid, viewport, tile_size, &mut out);
    out
}

/// Allocation-reusing variant of [`square_tiles`]. Clears `out` first.
pub fn square_tiles_into(
    grid: &TerrainGrid,
    viewport: &ViewportState,
    tile_size: f64,
    out: &mut Vec<Shape>,
) {
    out.clear();
    let side = tile_size * viewport.zoom;
    for (x, y, terrain) in grid.iter() {
        let world = Point::new(x as f64 * tile_size, y as f64 * tile_size);
        let origin = viewport.world_to_screen(world);
        out.push(Shape::rect(origin, side, side, terrain.color()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_interior_and_edges() {
        let s = Shape::rect(Point::new(0.0, 0.0), 10.0, 10.0, Rgb::WHITE);
        assert!(s.contains(Point::new(5.0, 5.0)));
        assert!(s.contains(Point::new(0.0, 5.0)));
        assert!(!s.contains(Point::new(10.5, 5.0)));
        assert!(!s.contains(Point::new(-0.1, -0.1)));
    }

    #[test]
    fn bounds_of_rect() {
        let s = Shape::rect(Point::new(2.0, 3.0), 4.0, 5.0, Rgb::WHITE);
        let (min, max) = s.bounds();
        assert_eq!(min, Point::new(2.0, 3.0));
        assert_eq!(max, Point::new(6.0, 8.0));
        assert_eq!(s.edges().count(), 4);
    }

    #[test]
    fn tiles_scale_with_zoom_and_follow_pan() {
        let grid = TerrainGrid::from_labels("t", &[&["grass", "water"]]).unwrap();
        let vp = ViewportState::new(100.0, 20.0, 2.0);
        let shapes = square_tiles(&grid, &vp, 50.0);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1].origin(), Point::new(200.0, 20.0));
        let (min, max) = shapes[1].bounds();
        assert_eq!(max.x - min.x, 100.0);
        assert_eq!(shapes[1].outline, Rgb::BLACK);
        assert_eq!(shapes[1].outline_width, 1.0);
    }
}
