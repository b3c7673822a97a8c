//! Drawing-context abstraction consumed by the section renderers.
//!
//! Coordinates are millimetres from the top-left corner of an A4 page. The
//! context is stateful (current colours, font, line width) the same way a
//! PDF content stream is; renderers set state explicitly before each draw.

use crate::layout::font_metrics::{FontFamily, FontSpec, FontWeight};
use crate::styles::Rgb;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    FillStroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// The drawing primitives a render pass needs.
///
/// Measurement defaults to the static metric tables for the current font, so
/// an implementation only has to record or emit the draw calls.
pub trait Canvas {
    fn set_text_color(&mut self, color: Rgb);
    fn set_fill_color(&mut self, color: Rgb);
    fn set_draw_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, family: FontFamily, weight: FontWeight);
    fn set_font_size(&mut self, size_pt: f32);
    fn font(&self) -> FontSpec;

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, mode: PaintMode);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    /// Places `lines` with the first baseline at `y`; later lines advance by
    /// the font's line height.
    fn text(&mut self, lines: &[String], x: f32, y: f32, align: TextAlign);

    fn add_page(&mut self);
    fn set_page(&mut self, index: usize);
    fn current_page(&self) -> usize;
    fn page_count(&self) -> usize;

    fn text_width(&self, text: &str) -> f32 {
        self.font().text_width(text)
    }

    fn split_text(&self, text: &str, max_width: f32) -> Vec<String> {
        self.font().split_text(text, max_width)
    }

    fn text_line(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.text(&[text.to_string()], x, y, align);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recording implementation
// ────────────────────────────────────────────────────────────────────────────

/// One recorded draw call with the graphics state resolved at call time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        mode: PaintMode,
        fill: Rgb,
        stroke: Rgb,
        line_width: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb,
        width: f32,
    },
    Text {
        lines: Vec<String>,
        x: f32,
        y: f32,
        align: TextAlign,
        font: FontSpec,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// In-memory document: the draw calls of every page, in order.
/// `layout::pdf::write_pdf` serialises it.
#[derive(Debug, Clone)]
pub struct Document {
    pages: Vec<Page>,
    current: usize,
    text_color: Rgb,
    fill_color: Rgb,
    draw_color: Rgb,
    line_width: f32,
    font: FontSpec,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            current: 0,
            text_color: Rgb::BLACK,
            fill_color: Rgb::BLACK,
            draw_color: Rgb::BLACK,
            line_width: 0.2,
            font: FontSpec::new(FontFamily::Helvetica, FontWeight::Normal, 16.0),
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn push(&mut self, op: DrawOp) {
        self.pages[self.current].ops.push(op);
    }

    /// Every op on every page, tagged with its page index.
    pub fn ops(&self) -> impl Iterator<Item = (usize, &DrawOp)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, p)| p.ops.iter().map(move |op| (i, op)))
    }

    /// All placed text lines, in draw order.
    pub fn text_lines(&self) -> Vec<&str> {
        self.ops()
            .filter_map(|(_, op)| match op {
                DrawOp::Text { lines, .. } => Some(lines.iter().map(String::as_str)),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_lines().iter().any(|line| line.contains(needle))
    }
}

impl Canvas for Document {
    fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.draw_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_font(&mut self, family: FontFamily, weight: FontWeight) {
        self.font.family = family;
        self.font.weight = weight;
    }

    fn set_font_size(&mut self, size_pt: f32) {
        self.font.size_pt = size_pt;
    }

    fn font(&self) -> FontSpec {
        self.font
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, mode: PaintMode) {
        let op = DrawOp::Rect {
            x,
            y,
            w,
            h,
            radius,
            mode,
            fill: self.fill_color,
            stroke: self.draw_color,
            line_width: self.line_width,
        };
        self.push(op);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let op = DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: self.draw_color,
            width: self.line_width,
        };
        self.push(op);
    }

    fn text(&mut self, lines: &[String], x: f32, y: f32, align: TextAlign) {
        if lines.is_empty() {
            return;
        }
        let op = DrawOp::Text {
            lines: lines.to_vec(),
            x,
            y,
            align,
            font: self.font,
            color: self.text_color,
        };
        self.push(op);
    }

    fn add_page(&mut self) {
        self.pages.push(Page::default());
        self.current = self.pages.len() - 1;
    }

    /// Out-of-range indices are clamped to the last page.
    fn set_page(&mut self, index: usize) {
        self.current = index.min(self.pages.len() - 1);
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
