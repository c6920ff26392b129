use crate::color::{Rgb, Rgba};
use crate::surface::Surface;
use std::f32::consts::TAU;
use std::io::{self, Write};

const BEZIER_STEPS: usize = 12;
const STROKE_STEP: f32 = 0.5;

#[derive(Clone, Copy)]
struct Glyph {
    ch: char,
    color: Rgba,
}

// Two pixels per cell (lower half block); glyphs sit in a per-cell layer on top.
pub struct TermCanvas {
    cols: usize,
    rows: usize,
    scale: f32,
    pixels: Vec<Rgb>,
    glyphs: Vec<Option<Glyph>>,
    coverage: Vec<bool>,
    touched: Vec<usize>,
    origin: (f32, f32),
    fill_style: Rgba,
    stroke_style: Rgba,
    line_width: f32,
    font_size: f32,
    path: Vec<Vec<(f32, f32)>>,
    output_buf: Vec<u8>,
}

impl TermCanvas {
    pub fn new(cols: usize, rows: usize, scale: f32, background: Rgb) -> Self {
        let height = rows * 2;
        Self {
            cols,
            rows,
            scale,
            pixels: vec![background; cols * height],
            glyphs: vec![None; cols * rows],
            coverage: vec![false; cols * height],
            touched: Vec::with_capacity(256),
            origin: (0.0, 0.0),
            fill_style: background.into(),
            stroke_style: background.into(),
            line_width: 1.0,
            font_size: 10.0,
            path: Vec::new(),
            output_buf: Vec::with_capacity(cols * rows * 25),
        }
    }

    // Content is discarded; the next frame repaints everything.
    pub fn resize(&mut self, cols: usize, rows: usize, scale: f32) {
        let background = self.pixels.first().copied().unwrap_or(Rgb::BLACK);
        let height = rows * 2;
        self.cols = cols;
        self.rows = rows;
        self.scale = scale;
        self.pixels = vec![background; cols * height];
        self.glyphs = vec![None; cols * rows];
        self.coverage = vec![false; cols * height];
        self.touched.clear();
        self.output_buf = Vec::with_capacity(cols * rows * 25);
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.cols && y < self.rows * 2 {
            Some(self.pixels[y * self.cols + x])
        } else {
            None
        }
    }

    pub fn glyph_at(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            self.glyphs[row * self.cols + col].map(|g| g.ch)
        } else {
            None
        }
    }

    fn pixel_height(&self) -> usize {
        self.rows * 2
    }

    fn to_pixels(&self, x: f32, y: f32) -> (f32, f32) {
        ((x + self.origin.0) * self.scale, (y + self.origin.1) * self.scale)
    }

    fn mark(&mut self, px: i32, py: i32) {
        if px < 0 || py < 0 {
            return;
        }
        let (px, py) = (px as usize, py as usize);
        if px >= self.cols || py >= self.pixel_height() {
            return;
        }
        let idx = py * self.cols + px;
        if !self.coverage[idx] {
            self.coverage[idx] = true;
            self.touched.push(idx);
        }
    }

    fn commit(&mut self, color: Rgba) {
        for &idx in &self.touched {
            self.coverage[idx] = false;
            self.pixels[idx] = self.pixels[idx].blend(color.rgb, color.alpha);
            if color.alpha >= 0.5 {
                let cell = (idx / self.cols / 2) * self.cols + idx % self.cols;
                self.glyphs[cell] = None;
            }
        }
        self.touched.clear();
    }

    fn stamp_disc(&mut self, cx: f32, cy: f32, radius: f32) {
        let reach = radius + 0.2;
        let x0 = (cx - reach).floor() as i32;
        let x1 = (cx + reach).ceil() as i32;
        let y0 = (cy - reach).floor() as i32;
        let y1 = (cy + reach).ceil() as i32;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= reach * reach {
                    self.mark(px, py);
                }
            }
        }
    }

    fn current_point(&self) -> Option<(f32, f32)> {
        self.path.last().and_then(|sub| sub.last().copied())
    }

    fn push_point(&mut self, point: (f32, f32)) {
        match self.path.last_mut() {
            Some(sub) => sub.push(point),
            None => self.path.push(vec![point]),
        }
    }
}

impl Surface for TermCanvas {
    fn size(&self) -> (f32, f32) {
        (
            self.cols as f32 / self.scale,
            self.pixel_height() as f32 / self.scale,
        )
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.fill_style = color;
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.stroke_style = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Non-finite or non-positive widths are ignored, as on a canvas.
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn set_font(&mut self, size: f32) {
        self.font_size = size;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (x0, y0) = self.to_pixels(x, y);
        let (x1, y1) = self.to_pixels(x + width, y + height);
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));

        let px0 = (x0 - 0.5).ceil().max(0.0) as i32;
        let py0 = (y0 - 0.5).ceil().max(0.0) as i32;
        let px1 = (x1 - 0.5).ceil().min(self.cols as f32) as i32;
        let py1 = (y1 - 0.5).ceil().min(self.pixel_height() as f32) as i32;
        for py in py0..py1 {
            for px in px0..px1 {
                self.mark(px, py);
            }
        }
        self.commit(self.fill_style);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.to_pixels(x, y);
        self.path.push(vec![p]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.to_pixels(x, y);
        self.push_point(p);
    }

    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        let c1 = self.to_pixels(c1x, c1y);
        let c2 = self.to_pixels(c2x, c2y);
        let end = self.to_pixels(x, y);
        let start = match self.current_point() {
            Some(p) => p,
            None => {
                self.path.push(vec![c1]);
                c1
            }
        };

        for step in 1..=BEZIER_STEPS {
            let t = step as f32 / BEZIER_STEPS as f32;
            let u = 1.0 - t;
            let a = u * u * u;
            let b = 3.0 * u * u * t;
            let c = 3.0 * u * t * t;
            let d = t * t * t;
            self.push_point((
                a * start.0 + b * c1.0 + c * c2.0 + d * end.0,
                a * start.1 + b * c1.1 + c * c2.1 + d * end.1,
            ));
        }
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        let (cx, cy) = self.to_pixels(x, y);
        let r = radius.max(0.0) * self.scale;
        let sweep = (end - start).clamp(-TAU, TAU);
        let segments = ((r * 2.0).ceil() as usize).clamp(8, 64);

        let first = (cx + r * start.cos(), cy + r * start.sin());
        if self.current_point().is_some() {
            self.push_point(first);
        } else {
            self.path.push(vec![first]);
        }
        for i in 1..=segments {
            let angle = start + sweep * i as f32 / segments as f32;
            self.push_point((cx + r * angle.cos(), cy + r * angle.sin()));
        }
    }

    fn stroke(&mut self) {
        if self.stroke_style.alpha <= 0.0 {
            return;
        }
        let radius = (self.line_width * self.scale).max(1.0) / 2.0;
        let path = std::mem::take(&mut self.path);
        for sub in &path {
            if let [only] = sub.as_slice() {
                self.stamp_disc(only.0, only.1, radius);
            }
            for pair in sub.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let length = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
                let steps = (length / STROKE_STEP).ceil().max(1.0) as usize;
                for i in 0..=steps {
                    let t = i as f32 / steps as f32;
                    self.stamp_disc(a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t, radius);
                }
            }
        }
        self.path = path;
        self.commit(self.stroke_style);
    }

    fn fill(&mut self) {
        if self.fill_style.alpha <= 0.0 {
            return;
        }
        let path = std::mem::take(&mut self.path);
        let mut crossings = Vec::new();

        for py in 0..self.pixel_height() {
            let sy = py as f32 + 0.5;
            crossings.clear();
            for sub in &path {
                if sub.len() < 3 {
                    continue;
                }
                // Subpaths close implicitly.
                for (i, &a) in sub.iter().enumerate() {
                    let b = sub[(i + 1) % sub.len()];
                    if (a.1 <= sy) != (b.1 <= sy) {
                        crossings.push(a.0 + (sy - a.1) / (b.1 - a.1) * (b.0 - a.0));
                    }
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                let px0 = (span[0] - 0.5).ceil().max(0.0) as i32;
                let px1 = (span[1] - 0.5).ceil().min(self.cols as f32) as i32;
                for px in px0..px1 {
                    self.mark(px, py as i32);
                }
            }
        }

        self.path = path;
        self.commit(self.fill_style);
    }

    fn fill_text(&mut self, glyph: char, x: f32, y: f32) {
        let (left, _) = self.to_pixels(x, y);
        let (_, middle) = self.to_pixels(x, y - self.font_size / 2.0);
        let col = (left + 0.5).floor();
        let row = (middle / 2.0).floor();
        if col < 0.0 || row < 0.0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.cols || row >= self.rows {
            return;
        }
        self.glyphs[row * self.cols + col] = Some(Glyph {
            ch: glyph,
            color: self.fill_style,
        });
    }

    fn measure_text(&self, _glyph: char) -> f32 {
        // One terminal cell, in logical units.
        1.0 / self.scale
    }
}

impl TermCanvas {
    pub fn present<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let mut prev_bg: Option<Rgb> = None;
        let mut prev_fg: Option<Rgb> = None;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let top = self.pixels[(row * 2) * self.cols + col];
                let bot = self.pixels[(row * 2 + 1) * self.cols + col];

                let (bg, fg, symbol) = match self.glyphs[row * self.cols + col] {
                    Some(glyph) => {
                        let cell = top.blend(bot, 0.5);
                        (cell, cell.blend(glyph.color.rgb, glyph.color.alpha), glyph.ch)
                    }
                    None => (top, bot, '▄'),
                };

                if prev_bg != Some(bg) {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", bg.0, bg.1, bg.2)?;
                    prev_bg = Some(bg);
                }
                if prev_fg != Some(fg) {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", fg.0, fg.1, fg.2)?;
                    prev_fg = Some(fg);
                }

                let mut utf8 = [0u8; 4];
                self.output_buf
                    .extend_from_slice(symbol.encode_utf8(&mut utf8).as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_bg = None;
            prev_fg = None;
            if row + 1 < self.rows {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()
    }
}
