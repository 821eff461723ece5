//! The 6×6 co-occurrence grid and its normalized form.
//!
//! Cells are indexed `[y][x]`: the row is the second element of a pair, the
//! column the first.

use log::debug;
use serde::Serialize;

use crate::error::{GradeVizError, Result};
use crate::pair::Pair;

/// Number of grade values per axis (0..=5).
pub const GRID_SIZE: usize = 6;

/// Largest grade value accepted on either axis.
pub const MAX_GRADE: i32 = GRID_SIZE as i32 - 1;

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

/// Raw pair counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CountGrid {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl CountGrid {
    /// An all-zero grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every pair into a fresh grid.
    ///
    /// Fails on the first pair with a coordinate outside 0..=5; nothing is
    /// written for that pair or any later one.
    pub fn from_pairs(pairs: &[Pair]) -> Result<Self> {
        let mut grid = Self::new();
        for (index, pair) in pairs.iter().enumerate() {
            let (x, y) = grid_index(*pair).ok_or(out_of_range(index, *pair))?;
            grid.cells[y][x] += 1;
        }
        debug!(
            "built {}x{} grid from {} pairs",
            GRID_SIZE,
            GRID_SIZE,
            pairs.len()
        );
        Ok(grid)
    }

    /// Count at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.cells[y][x]
    }

    pub fn rows(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Sum of all cells. Equals the number of pairs counted.
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().map(|&c| c as u64).sum()
    }

    /// Largest cell, 0 for an empty grid.
    pub fn max_cell(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Counts rescaled into [0, 1] by the largest cell.
    pub fn normalized(&self) -> WeightGrid {
        let mut weights = WeightGrid::from(self);
        weights.normalize();
        weights
    }
}

/// Fail with `OutOfRangeIndex` on the first pair outside 0..=5.
pub fn check_grade_range(pairs: &[Pair]) -> Result<()> {
    match pairs.iter().position(|p| grid_index(*p).is_none()) {
        Some(index) => Err(out_of_range(index, pairs[index])),
        None => Ok(()),
    }
}

fn out_of_range(index: usize, pair: Pair) -> GradeVizError {
    GradeVizError::OutOfRangeIndex {
        index,
        x: pair.x,
        y: pair.y,
    }
}

fn grid_index(pair: Pair) -> Option<(usize, usize)> {
    let range = 0..=MAX_GRADE;
    if range.contains(&pair.x) && range.contains(&pair.y) {
        Some((pair.x as usize, pair.y as usize))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Floating-point cells, normally in [0, 1] after [`WeightGrid::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WeightGrid {
    cells: [[f64; GRID_SIZE]; GRID_SIZE],
}

impl WeightGrid {
    pub fn from_rows(cells: [[f64; GRID_SIZE]; GRID_SIZE]) -> Self {
        WeightGrid { cells }
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.cells[y][x]
    }

    pub fn rows(&self) -> &[[f64; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn max_cell(&self) -> f64 {
        self.cells.iter().flatten().copied().fold(0.0, f64::max)
    }

    /// Divide every cell by the largest one, in place.
    ///
    /// An all-zero grid is left untouched.
    pub fn normalize(&mut self) {
        let max = self.max_cell();
        if max == 0.0 {
            debug!("grid is empty, skipping normalization");
            return;
        }
        for cell in self.cells.iter_mut().flatten() {
            *cell /= max;
        }
    }
}

impl From<&CountGrid> for WeightGrid {
    fn from(counts: &CountGrid) -> Self {
        let mut cells = [[0.0; GRID_SIZE]; GRID_SIZE];
        for (dst, src) in cells.iter_mut().zip(counts.rows()) {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s as f64;
            }
        }
        WeightGrid { cells }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
