//! Paints a normalized grid plus its axis labels onto a [`Surface`].

use log::debug;
use serde::Serialize;

use crate::color::{Rgb, weight_to_color};
use crate::grid::{GRID_SIZE, WeightGrid};
use crate::surface::{Font, Rect, Surface};

/// Pixel layout of a rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Side length of one cell.
    pub cell_size: u32,
    /// Width of the left strip reserved for the vertical labels.
    pub left_margin: u32,
    pub font: Font,
    pub label_color: Rgb,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            canvas_width: 400,
            canvas_height: 400,
            cell_size: 60,
            left_margin: 40,
            font: Font::default(),
            label_color: Rgb::BLACK,
        }
    }
}

impl Layout {
    /// Screen rectangle of cell `(x, y)`. Row 5 is at the top.
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        let cell = self.cell_size as i32;
        let top_row = (GRID_SIZE - 1) as i32;
        Rect::new(
            self.left_margin as i32 + x as i32 * cell,
            (top_row - y as i32) * cell,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Area covered by all cells together.
    pub fn grid_extent(&self) -> Rect {
        let side = self.cell_size * GRID_SIZE as u32;
        Rect::new(self.left_margin as i32, 0, side, side)
    }
}

/// Draw `grid` onto `surface`: vertical labels 5..0, horizontal labels 0..5,
/// then one filled cell per grid entry.
pub fn draw_grid<S: Surface + ?Sized>(grid: &WeightGrid, layout: &Layout, surface: &mut S) {
    let cell = layout.cell_size as i32;
    let top_row = GRID_SIZE - 1;

    for i in 0..GRID_SIZE {
        let label = (top_row - i).to_string();
        surface.draw_text(
            &label,
            0,
            cell * (i as i32 + 1),
            &layout.font,
            layout.label_color,
        );
    }

    for i in 0..GRID_SIZE {
        surface.draw_text(
            &i.to_string(),
            cell * i as i32 + layout.left_margin as i32,
            layout.canvas_height as i32,
            &layout.font,
            layout.label_color,
        );
    }

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            surface.fill_rect(layout.cell_rect(x, y), weight_to_color(grid.get(x, y)));
        }
    }

    let (w, h) = surface.size();
    debug!("painted {GRID_SIZE}x{GRID_SIZE} grid on {w}x{h} surface");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn render(grid: &WeightGrid) -> RecordingSurface {
        let layout = Layout::default();
        let mut s = RecordingSurface::new(layout.canvas_width, layout.canvas_height);
        draw_grid(grid, &layout, &mut s);
        s
    }

    #[test]
    fn test_draw_counts() {
        let s = render(&WeightGrid::default());
        assert_eq!(s.rects().count(), 36);
        assert_eq!(s.texts().count(), 12);
    }

    #[test]
    fn test_labels() {
        let s = render(&WeightGrid::default());
        let texts: Vec<_> = s.texts().collect();
        assert_eq!(
            &texts[..6],
            &[
                ("5", 0, 60),
                ("4", 0, 120),
                ("3", 0, 180),
                ("2", 0, 240),
                ("1", 0, 300),
                ("0", 0, 360)
            ]
        );
        assert_eq!(
            &texts[6..],
            &[
                ("0", 40, 400),
                ("1", 100, 400),
                ("2", 160, 400),
                ("3", 220, 400),
                ("4", 280, 400),
                ("5", 340, 400)
            ]
        );
    }

    #[test]
    fn test_rects_tile_the_grid_area() {
        let layout = Layout::default();
        let s = render(&WeightGrid::default());
        let extent = layout.grid_extent();
        assert_eq!(extent, Rect::new(40, 0, 360, 360));

        let mut covered = std::collections::HashSet::new();
        for (rect, _) in s.rects() {
            assert_eq!((rect.width, rect.height), (60, 60));
            assert!(rect.x >= extent.x && rect.right() <= extent.right());
            assert!(rect.y >= extent.y && rect.bottom() <= extent.bottom());
            assert!(covered.insert((rect.x, rect.y)), "overlapping cell");
        }
        assert_eq!(covered.len(), 36);
    }

    #[test]
    fn test_inverted_rows() {
        let mut cells = [[0.0; GRID_SIZE]; GRID_SIZE];
        cells[5][0] = 1.0;
        cells[0][5] = 0.5;
        let s = render(&WeightGrid::from_rows(cells));

        let color_at = |x: i32, y: i32| {
            s.rects()
                .find(|(r, _)| r.x == x && r.y == y)
                .map(|(_, c)| *c)
                .unwrap()
        };
        // Row 5 (x = 0) sits at the top-left.
        assert_eq!(color_at(40, 0), Rgb::BLUE);
        // Row 0 (x = 5) sits at the bottom-right.
        assert_eq!(color_at(340, 300), Rgb::new(128, 128, 255));
        assert_eq!(color_at(40, 300), Rgb::WHITE);
    }

    #[test]
    fn test_labels_use_layout_font() {
        let layout = Layout {
            font: Font::new("Courier", 14),
            ..Layout::default()
        };
        let mut s = RecordingSurface::new(400, 400);
        draw_grid(&WeightGrid::default(), &layout, &mut s);
        for op in s.ops() {
            if let crate::surface::DrawOp::Text { font, color, .. } = op {
                assert_eq!(font, &Font::new("Courier", 14));
                assert_eq!(*color, Rgb::BLACK);
            }
        }
    }
}
