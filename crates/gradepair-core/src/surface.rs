//! Drawing surfaces.
//!
//! The renderer only needs two primitives, filled rectangles and text, so any
//! backend implementing [`Surface`] can receive a grid. Two backends ship with
//! the crate:
//!
//! - [`RecordingSurface`] keeps the list of draw calls. Tests and dry runs use
//!   it to inspect exactly what was painted.
//! - [`SvgSurface`] accumulates SVG elements and writes a standalone document.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::color::Rgb;
use crate::error::Result;

/// Axis-aligned rectangle in surface pixels; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Font used for text draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Font {
    pub family: String,
    pub size_px: u32,
}

impl Font {
    pub fn new(family: impl Into<String>, size_px: u32) -> Self {
        Font {
            family: family.into(),
            size_px,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::new("Arial", 20)
    }
}

/// Something a grid can be painted onto.
pub trait Surface {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &Font, color: Rgb);
}

// ---------------------------------------------------------------------------
// Recording backend
// ---------------------------------------------------------------------------

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        font: Font,
        color: Rgb,
    },
}

/// Surface that remembers every call in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Rgb)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((rect, color)),
            DrawOp::Text { .. } => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, i32, i32)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            DrawOp::FillRect { .. } => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &Font, color: Rgb) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font: font.clone(),
            color,
        });
    }
}

// ---------------------------------------------------------------------------
// SVG backend
// ---------------------------------------------------------------------------

/// Surface that builds an SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        SvgSurface {
            width,
            height,
            body: String::new(),
        }
    }

    /// The complete document, elements in draw order.
    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_svg())?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        // Writing into a String cannot fail.
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            rect.x, rect.y, rect.width, rect.height, color
        );
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: &Font, color: Rgb) {
        let _ = writeln!(
            self.body,
            "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}px\" fill=\"{}\">{}</text>",
            x,
            y,
            escape_xml(&font.family),
            font.size_px,
            color,
            escape_xml(text)
        );
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
