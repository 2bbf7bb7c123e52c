//! Stitch grid of palette indices
//!
//! Rows run top to bottom, columns left to right, matching the orientation of
//! the source image. Each cell holds the palette index of one stitch.

use ndarray::{Array2, ArrayView1};

/// Two-dimensional grid of palette indices, one cell per stitch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGrid {
    cells: Array2<u8>,
}

impl ChartGrid {
    /// Wrap a `(rows, cols)` array of palette indices
    pub const fn from_array(cells: Array2<u8>) -> Self {
        Self { cells }
    }

    /// Build a grid from row-major indices
    ///
    /// Returns `None` when `indices.len()` is not `width * height`.
    pub fn from_row_major(width: usize, height: usize, indices: Vec<u8>) -> Option<Self> {
        Array2::from_shape_vec((height, width), indices)
            .ok()
            .map(Self::from_array)
    }

    /// Chart width in stitches
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Chart height in rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Chart dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Palette index at the given position
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get((row, col)).copied()
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, u8>> {
        self.cells.rows().into_iter()
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().copied()
    }

    /// Largest palette index referenced by any cell
    pub fn max_index(&self) -> Option<u8> {
        self.cells.iter().copied().max()
    }

    /// Borrow the underlying array
    pub const fn as_array(&self) -> &Array2<u8> {
        &self.cells
    }
}
