//! Half-block dot canvas.
//!
//! Every terminal cell holds two vertically stacked dots drawn with `▀`
//! (foreground = upper dot, background = lower dot). A dot covers
//! `px_per_dot` × `px_per_dot` screen pixels, so screen pixel `(sx, sy)`
//! lands on dot `(sx / k, sy / k)`.

use crate::core::{RasterImage, Shape, ViewportState};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Point, Rgb};

/// Shapes narrower or shorter than this many dots are filled without outline.
pub const OUTLINE_MIN_DOTS: f64 = 3.0;

const HALF_BLOCK: char = '▀';

#[derive(Debug, Clone, PartialEq)]
pub struct DotCanvas {
    width: u16,
    height: u16,
    px_per_dot: f64,
    dots: Vec<Rgb>,
}

impl DotCanvas {
    /// Canvas for `cols` × `rows` terminal cells.
    pub fn new(cols: u16, rows: u16, px_per_dot: f64) -> Self {
        let height = rows.saturating_mul(2);
        Self {
            width: cols,
            height,
            px_per_dot,
            dots: vec![Rgb::BLACK; cols as usize * height as usize],
        }
    }

    /// Width in dots (equal to terminal columns).
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in dots (twice the terminal rows).
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn px_per_dot(&self) -> f64 {
        self.px_per_dot
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        let height = rows.saturating_mul(2);
        if self.width == cols && self.height == height {
            return;
        }
        self.width = cols;
        self.height = height;
        self.dots.resize(cols as usize * height as usize, Rgb::BLACK);
    }

    pub fn clear(&mut self, color: Rgb) {
        self.dots.fill(color);
    }

    #[inline]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        self.idx(x as i64, y as i64).map(|i| self.dots[i])
    }

    /// Set a dot. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.dots[i] = color;
        }
    }

    /// Screen pixel at the center of dot (`x`, `y`).
    pub fn dot_center(&self, x: u16, y: u16) -> Point {
        let k = self.px_per_dot;
        Point::new((x as f64 + 0.5) * k, (y as f64 + 0.5) * k)
    }

    /// Inclusive dot range whose centers fall within `[min, max]` pixels.
    fn dot_span(&self, min: f64, max: f64, len: u16) -> Option<(u16, u16)> {
        if len == 0 {
            return None;
        }
        let k = self.px_per_dot;
        let lo = (min / k - 0.5).ceil().max(0.0);
        let hi = (max / k - 0.5).floor().min(len as f64 - 1.0);
        if lo > hi {
            return None;
        }
        Some((lo as u16, hi as u16))
    }

    /// Fill a convex shape by sampling dot centers.
    pub fn fill_shape(&mut self, shape: &Shape) {
        let (min, max) = shape.bounds();
        let Some((x0, x1)) = self.dot_span(min.x, max.x, self.width) else {
            return;
        };
        let Some((y0, y1)) = self.dot_span(min.y, max.y, self.height) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                if shape.contains(self.dot_center(x, y)) {
                    self.set(x as i64, y as i64, shape.fill);
                }
            }
        }
    }

    /// Draw polygon edges one dot thick.
    pub fn stroke_shape(&mut self, shape: &Shape) {
        let k = self.px_per_dot;
        let step = k / 2.0;
        for (a, b) in shape.edges() {
            let length = a.distance(b);
            let samples = (length / step).ceil().max(1.0) as usize;
            for i in 0..=samples {
                let t = i as f64 / samples as f64;
                let x = a.x + (b.x - a.x) * t;
                let y = a.y + (b.y - a.y) * t;
                self.set((x / k).floor() as i64, (y / k).floor() as i64, shape.outline);
            }
        }
    }

    /// Fill, then outline when the shape is large enough to show one.
    pub fn draw_shape(&mut self, shape: &Shape) {
        self.fill_shape(shape);
        let (min, max) = shape.bounds();
        let k = self.px_per_dot;
        if shape.outline_width > 0.0
            && (max.x - min.x) / k >= OUTLINE_MIN_DOTS
            && (max.y - min.y) / k >= OUTLINE_MIN_DOTS
        {
            self.stroke_shape(shape);
        }
    }

    /// Paint `image` nearest-neighbour through `viewport`; dots outside the
    /// image get `background`.
    pub fn paint_image(&mut self, image: &RasterImage, viewport: &ViewportState, background: Rgb) {
        for y in 0..self.height {
            for x in 0..self.width {
                let world = viewport.screen_to_world(self.dot_center(x, y));
                let color = image.sample(world).unwrap_or(background);
                self.set(x as i64, y as i64, color);
            }
        }
    }

    /// Copy the canvas into `fb` starting at terminal row `top_row`.
    pub fn blit(&self, fb: &mut FrameBuffer, top_row: u16) {
        let rows = self.height / 2;
        for row in 0..rows {
            for x in 0..self.width {
                let top = self.get(x, row * 2).unwrap_or_default();
                let bottom = self.get(x, row * 2 + 1).unwrap_or_default();
                fb.put_char(
                    x,
                    top_row.saturating_add(row),
                    HALF_BLOCK,
                    CellStyle::colors(top, bottom),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_covers_dot_centers_inside() {
        let mut canvas = DotCanvas::new(4, 2, 10.0);
        canvas.clear(Rgb::BLACK);
        let red = Rgb::new(255, 0, 0);
        // Covers dot centers 5 and 15 on both axes.
        canvas.fill_shape(&Shape::rect(Point::new(0.0, 0.0), 20.0, 20.0, red));
        assert_eq!(canvas.get(0, 0), Some(red));
        assert_eq!(canvas.get(1, 1), Some(red));
        assert_eq!(canvas.get(2, 0), Some(Rgb::BLACK));
        assert_eq!(canvas.get(0, 2), Some(Rgb::BLACK));
    }

    #[test]
    fn small_shapes_skip_outline() {
        let mut canvas = DotCanvas::new(4, 2, 10.0);
        let green = Rgb::new(0, 255, 0);
        canvas.draw_shape(&Shape::rect(Point::new(0.0, 0.0), 20.0, 20.0, green));
        assert_eq!(canvas.get(0, 0), Some(green));
        assert_eq!(canvas.get(1, 1), Some(green));
    }

    #[test]
    fn large_shapes_get_outline_and_interior() {
        let mut canvas = DotCanvas::new(8, 4, 10.0);
        let fill = Rgb::new(0, 0, 255);
        let mut shape = Shape::rect(Point::new(0.0, 0.0), 50.0, 50.0, fill);
        shape.outline = Rgb::new(1, 2, 3);
        canvas.draw_shape(&shape);
        assert_eq!(canvas.get(0, 0), Some(shape.outline));
        assert_eq!(canvas.get(5, 2), Some(shape.outline));
        assert_eq!(canvas.get(2, 2), Some(fill));
    }

    #[test]
    fn blit_packs_two_dots_per_cell() {
        let mut canvas = DotCanvas::new(1, 1, 10.0);
        let top = Rgb::new(10, 20, 30);
        let bottom = Rgb::new(40, 50, 60);
        canvas.set(0, 0, top);
        canvas.set(0, 1, bottom);

        let mut fb = FrameBuffer::new(1, 3);
        canvas.blit(&mut fb, 1);
        let cell = fb.get(0, 1).unwrap();
        assert_eq!(cell.ch, '▀');
        assert_eq!(cell.style.fg, top);
        assert_eq!(cell.style.bg, bottom);
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn offscreen_shapes_are_clipped() {
        let mut canvas = DotCanvas::new(2, 1, 10.0);
        canvas.clear(Rgb::BLACK);
        canvas.draw_shape(&Shape::rect(
            Point::new(-500.0, -500.0),
            100.0,
            100.0,
            Rgb::WHITE,
        ));
        assert!(canvas.dots.iter().all(|&c| c == Rgb::BLACK));
    }
}
