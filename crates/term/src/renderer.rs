//! Terminal output for the viewers.
//!
//! [`TerminalRenderer`] owns the terminal session (raw mode, alternate screen,
//! mouse reporting) and presents framebuffers. A frame is written in full
//! after [`enter`](TerminalRenderer::enter), a size change or
//! [`invalidate`](TerminalRenderer::invalidate); otherwise only the changed
//! runs of each row are sent.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// A horizontal stretch of changed cells in one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows. `None` forces a full frame.
    front: Option<FrameBuffer>,
    runs: Vec<Run>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            front: None,
            runs: Vec::new(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen and mouse capture on.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        encode_enter_into(&mut self.buf)?;
        self.front = None;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Raw mode is left even if writing fails.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_exit_into(&mut self.buf)?;
        let written = self.flush();
        terminal::disable_raw_mode()?;
        written
    }

    /// Send the next frame in full (after a resize event).
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Write `fb` to the terminal and keep it as the on-screen frame.
    ///
    /// `fb` gets the previous frame's buffer back so no frame is cloned; its
    /// contents are stale and the caller redraws it before the next call.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut front = match self.front.take() {
            Some(front) if front.width() == fb.width() && front.height() == fb.height() => {
                changed_runs(&front, fb, &mut self.runs);
                encode_runs_into(fb, &self.runs, &mut self.buf)?;
                front
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut front = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                front.resize(fb.width(), fb.height());
                front
            }
        };
        self.flush()?;

        std::mem::swap(&mut front, fb);
        self.front = Some(front);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Terminal setup sequence written by [`TerminalRenderer::enter`].
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    out.queue(EnableMouseCapture)?;
    Ok(())
}

/// Teardown sequence written by [`TerminalRenderer::exit`].
pub fn encode_exit_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(DisableMouseCapture)?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Clear the screen and write every cell of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for (y, row) in rows(fb).enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        pen.print(out, row)?;
    }
    pen.finish(out)
}

/// Write the cells of `fb` covered by `runs`. Nothing is written for no runs.
pub fn encode_runs_into(fb: &FrameBuffer, runs: &[Run], out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for run in runs {
        let Some(row) = rows(fb).nth(run.y as usize) else {
            continue;
        };
        let start = (run.x as usize).min(row.len());
        let end = (start + run.len as usize).min(row.len());
        out.queue(cursor::MoveTo(run.x, run.y))?;
        pen.print(out, &row[start..end])?;
    }
    pen.finish(out)
}

/// Collect the changed runs between two frames of the same size into `out`.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<Run>) {
    out.clear();
    for (y, (old, new)) in rows(prev).zip(rows(next)).enumerate() {
        let width = old.len().min(new.len());
        let mut x = 0;
        while x < width {
            if old[x] == new[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < width && old[x] != new[x] {
                x += 1;
            }
            out.push(Run {
                x: start as u16,
                y: y as u16,
                len: (x - start) as u16,
            });
        }
    }
}

fn rows(fb: &FrameBuffer) -> std::slice::Chunks<'_, Cell> {
    fb.cells().chunks(fb.width().max(1) as usize)
}

/// Current terminal colors and attributes, so unchanged ones are not resent.
#[derive(Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    attrs: Option<(bool, bool)>,
    used: bool,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            self.style(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn style(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        self.used = true;
        let attrs = (style.bold, style.dim);
        if self.attrs != Some(attrs) {
            // SGR reset also drops both colors.
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.attrs = Some(attrs);
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.used {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
