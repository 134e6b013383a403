//! ViewerView: composes a backdrop and the viewer chrome into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: one header row, the map area, one status row. The
//! map area is drawn through a [`DotCanvas`], so one terminal row shows two
//! rows of dots.

use crate::canvas::DotCanvas;
use crate::core::{RasterImage, ScreenSize, Shape, ViewportState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const HEADER_ROWS: u16 = 1;
pub const FOOTER_ROWS: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows of the terminal given to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapArea {
    pub top: u16,
    pub rows: u16,
    pub cols: u16,
}

/// What fills the map area.
#[derive(Debug, Clone, Copy)]
pub enum Backdrop<'a> {
    /// Screen-space shapes painted in order over a solid background.
    Shapes { shapes: &'a [Shape], background: Rgb },
    /// A raster image seen through a viewport.
    Image {
        image: &'a RasterImage,
        viewport: ViewportState,
        background: Rgb,
    },
    Empty { background: Rgb },
}

/// Text around and over the map area.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chrome<'a> {
    pub title: &'a str,
    pub tabs: &'a [String],
    pub selected_tab: Option<usize>,
    pub zoom: f64,
    pub status: &'a str,
    /// Centered in the map area, e.g. when nothing is loaded.
    pub hint: Option<&'a str>,
    /// Modal error box.
    pub error: Option<&'a str>,
    /// Help box lines.
    pub help: Option<&'a [&'a str]>,
    /// Path being typed; replaces the status row.
    pub prompt: Option<&'a str>,
}

const BAR: CellStyle = CellStyle {
    fg: Rgb::new(230, 230, 230),
    bg: Rgb::new(30, 30, 40),
    bold: false,
    dim: false,
};

const TAB_ACTIVE: CellStyle = CellStyle {
    fg: Rgb::new(20, 20, 20),
    bg: Rgb::new(240, 200, 80),
    bold: true,
    dim: false,
};

const ERROR_BOX: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    bg: Rgb::new(120, 20, 20),
    bold: true,
    dim: false,
};

const HELP_BOX: CellStyle = CellStyle {
    fg: Rgb::new(230, 230, 230),
    bg: Rgb::new(40, 40, 60),
    bold: false,
    dim: false,
};

/// Terminal renderer for the viewers.
#[derive(Debug, Clone, Copy)]
pub struct ViewerView {
    px_per_dot: f64,
}

impl ViewerView {
    pub fn new(px_per_dot: f64) -> Self {
        Self { px_per_dot }
    }

    pub fn px_per_dot(&self) -> f64 {
        self.px_per_dot
    }

    pub fn map_area(&self, viewport: Viewport) -> MapArea {
        MapArea {
            top: HEADER_ROWS.min(viewport.height),
            rows: viewport.height.saturating_sub(HEADER_ROWS + FOOTER_ROWS),
            cols: viewport.width,
        }
    }

    /// Map area size in screen pixels.
    pub fn screen_size(&self, viewport: Viewport) -> ScreenSize {
        let area = self.map_area(viewport);
        ScreenSize::new(
            area.cols as f64 * self.px_per_dot,
            area.rows as f64 * 2.0 * self.px_per_dot,
        )
    }

    /// Render into an existing canvas and framebuffer.
    ///
    /// Callers keep both across frames; they are only reallocated when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        backdrop: Backdrop<'_>,
        chrome: &Chrome<'_>,
        viewport: Viewport,
        canvas: &mut DotCanvas,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let area = self.map_area(viewport);
        canvas.resize(area.cols, area.rows);
        match backdrop {
            Backdrop::Shapes { shapes, background } => {
                canvas.clear(background);
                for shape in shapes {
                    canvas.draw_shape(shape);
                }
            }
            Backdrop::Image {
                image,
                viewport: view,
                background,
            } => canvas.paint_image(image, &view, background),
            Backdrop::Empty { background } => canvas.clear(background),
        }
        canvas.blit(fb, area.top);

        self.draw_header(fb, chrome, viewport);
        self.draw_status(fb, chrome, viewport);

        if let Some(hint) = chrome.hint {
            let y = area.top + area.rows / 2;
            let x = viewport.width.saturating_sub(char_len(hint)) / 2;
            fb.put_str(x, y, hint, BAR);
        }
        if let Some(lines) = chrome.help {
            draw_box(fb, area, " Help ", lines, HELP_BOX);
        }
        if let Some(message) = chrome.error {
            draw_box(fb, area, " Error ", &[message, "", "Enter: dismiss"], ERROR_BOX);
        }
    }

    pub fn render(
        &self,
        backdrop: Backdrop<'_>,
        chrome: &Chrome<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let mut canvas = DotCanvas::new(0, 0, self.px_per_dot);
        self.render_into(backdrop, chrome, viewport, &mut canvas, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, chrome: &Chrome<'_>, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        fb.fill_rect(0, 0, viewport.width, 1, ' ', BAR);
        let title = CellStyle { bold: true, ..BAR };
        let mut x = fb.put_str(1, 0, chrome.title, title) + 2;

        for (i, name) in chrome.tabs.iter().enumerate() {
            let style = if chrome.selected_tab == Some(i) {
                TAB_ACTIVE
            } else {
                BAR
            };
            let label = format!(" {}:{} ", i + 1, name);
            x = fb.put_str(x, 0, &label, style) + 1;
        }

        let zoom = format!("Zoom: {:.2}x", chrome.zoom);
        let zx = viewport.width.saturating_sub(char_len(&zoom) + 1);
        fb.put_str(zx, 0, &zoom, BAR);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, chrome: &Chrome<'_>, viewport: Viewport) {
        if viewport.height < HEADER_ROWS + FOOTER_ROWS {
            return;
        }
        let y = viewport.height - 1;
        fb.fill_rect(0, y, viewport.width, 1, ' ', BAR);
        match chrome.prompt {
            Some(text) => {
                let end = fb.put_str(1, y, "Open image: ", BAR);
                let end = fb.put_str(end, y, text, CellStyle { bold: true, ..BAR });
                fb.put_char(end, y, '█', BAR);
            }
            None => {
                fb.put_str(1, y, chrome.status, BAR);
            }
        }
    }
}

impl Default for ViewerView {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_PX_PER_DOT)
    }
}

fn char_len(s: &str) -> u16 {
    s.chars().count().min(u16::MAX as usize) as u16
}

/// Bordered box of text centered in `area`.
fn draw_box(fb: &mut FrameBuffer, area: MapArea, title: &str, lines: &[&str], style: CellStyle) {
    let inner_w = lines
        .iter()
        .map(|l| char_len(l))
        .chain(std::iter::once(char_len(title)))
        .max()
        .unwrap_or(0);
    let w = (inner_w + 4).min(area.cols);
    let h = (lines.len() as u16 + 2).min(area.rows);
    if w < 2 || h < 2 {
        return;
    }
    let x = (area.cols - w) / 2;
    let y = area.top + (area.rows - h) / 2;

    fb.fill_rect(x, y, w, h, ' ', style);
    fb.draw_border(x, y, w, h, style);
    fb.put_str(x + 2, y, title, style);
    for (i, line) in lines.iter().enumerate().take((h - 2) as usize) {
        let row = y + 1 + i as u16;
        let end = x + w - 2;
        for (dx, ch) in line.chars().enumerate() {
            let cx = x + 2 + dx as u16;
            if cx >= end {
                break;
            }
            fb.put_char(cx, row, ch, style);
        }
    }
}
