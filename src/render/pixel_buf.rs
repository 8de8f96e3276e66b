use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as CColor},
};

use super::palette::{LETTERBOX, Rgb};
use crate::constants::{CANVAS_H, CANVAS_W};

// ── Pixel buffer with half-block rendering ──────────────────────────────────

pub struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![LETTERBOX; w * h],
        }
    }

    /// Pixel buffer covering a terminal of `cols` x `rows` cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize, rows as usize * 2)
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, LETTERBOX);
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h < 2
    }

    pub fn clear(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    pub fn dim_all(&mut self) {
        for p in &mut self.px {
            *p = p.dim();
        }
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = Rgb(0, 0, 0);
        let mut prev_bg = Rgb(0, 0, 0);
        let mut need_fg = true;
        let mut need_bg = true;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    if need_bg || prev_bg != top {
                        queue!(out, style::SetBackgroundColor(term_color(top)))?;
                        prev_bg = top;
                        need_bg = false;
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != top {
                        queue!(out, style::SetForegroundColor(term_color(top)))?;
                        prev_fg = top;
                        need_fg = false;
                    }
                    if need_bg || prev_bg != bot {
                        queue!(out, style::SetBackgroundColor(term_color(bot)))?;
                        prev_bg = bot;
                        need_bg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row < rows - 1 {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                need_fg = true;
                need_bg = true;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

fn term_color(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Logical canvas → pixel mapping ──────────────────────────────────────────

/// Uniform scale that fits the logical canvas into the pixel buffer, centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub ox: f64,
    pub oy: f64,
}

impl Viewport {
    pub fn fit(pw: usize, ph: usize) -> Self {
        let scale = (pw as f64 / CANVAS_W).min(ph as f64 / CANVAS_H);
        Self {
            scale,
            ox: ((pw as f64 - CANVAS_W * scale) / 2.0).floor(),
            oy: ((ph as f64 - CANVAS_H * scale) / 2.0).floor(),
        }
    }

    pub fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (self.ox + x * self.scale, self.oy + y * self.scale)
    }

    pub fn to_logical(&self, px: f64, py: f64) -> (f64, f64) {
        ((px - self.ox) / self.scale, (py - self.oy) / self.scale)
    }

    /// Logical point under the centre of a terminal cell.
    pub fn cell_to_logical(&self, col: u16, row: u16) -> (f64, f64) {
        self.to_logical(col as f64 + 0.5, row as f64 * 2.0 + 1.0)
    }

    /// Pixel bounds of the canvas, as `[x0, x1) x [y0, y1)`.
    pub fn canvas_px(&self) -> (i32, i32, i32, i32) {
        let (x0, y0) = self.to_px(0.0, 0.0);
        let (x1, y1) = self.to_px(CANVAS_W, CANVAS_H);
        (
            x0.round() as i32,
            y0.round() as i32,
            x1.round() as i32,
            y1.round() as i32,
        )
    }
}

/// A pixel buffer seen through a viewport, clipped to the canvas.
pub struct Canvas<'a> {
    pub buf: &'a mut PixelBuf,
    pub vp: Viewport,
    clip: (i32, i32, i32, i32),
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut PixelBuf) -> Self {
        let vp = Viewport::fit(buf.width(), buf.height());
        let clip = vp.canvas_px();
        Self { buf, vp, clip }
    }

    fn px_span(&self, a: f64, len: f64, origin: f64, lo: i32, hi: i32) -> (i32, i32) {
        let start = (origin + a * self.vp.scale).round() as i32;
        let mut end = (origin + (a + len) * self.vp.scale).round() as i32;
        if len > 0.0 && end == start {
            end = start + 1;
        }
        (start.max(lo), end.min(hi))
    }

    /// Fill a logical rectangle; the colour callback gets the column index
    /// within the rectangle and its pixel width.
    pub fn fill_with(&mut self, x: f64, y: f64, w: f64, h: f64, shade: impl Fn(i32, i32) -> Rgb) {
        let (cx0, cy0, cx1, cy1) = self.clip;
        let (x0, x1) = self.px_span(x, w, self.vp.ox, cx0, cx1);
        let (y0, y1) = self.px_span(y, h, self.vp.oy, cy0, cy1);
        let full_x0 = (self.vp.ox + x * self.vp.scale).round() as i32;
        let full_w = ((w * self.vp.scale).round() as i32).max(1);
        for py in y0..y1 {
            for px in x0..x1 {
                self.buf.set(px, py, shade(px - full_x0, full_w));
            }
        }
    }

    pub fn fill(&mut self, x: f64, y: f64, w: f64, h: f64, c: Rgb) {
        self.fill_with(x, y, w, h, |_, _| c);
    }

    /// Sample `texel` at the logical centre of every pixel in the box.
    pub fn paint(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        texel: impl Fn(f64, f64) -> Option<Rgb>,
    ) {
        let (cx0, cy0, cx1, cy1) = self.clip;
        let (x0, x1) = self.px_span(x, w, self.vp.ox, cx0, cx1);
        let (y0, y1) = self.px_span(y, h, self.vp.oy, cy0, cy1);
        for py in y0..y1 {
            for px in x0..x1 {
                let (lx, ly) = self.vp.to_logical(px as f64 + 0.5, py as f64 + 0.5);
                if let Some(c) = texel(lx, ly) {
                    self.buf.set(px, py, c);
                }
            }
        }
    }

    /// Pixel position of a logical point.
    pub fn px(&self, x: f64, y: f64) -> (i32, i32) {
        let (px, py) = self.vp.to_px(x, y);
        (px.round() as i32, py.round() as i32)
    }
}
