//! Per-row statistics over a stitch grid

use crate::chart::grid::ChartGrid;
use bitvec::prelude::*;

/// Summary of one chart row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSummary {
    /// Zero-based row position, top row first
    pub row_index: usize,
    /// Stitches in the row, always the chart width
    pub stitch_count: usize,
    /// Distinct palette indices used in the row
    pub distinct_colors: usize,
}

/// Summarize every row of the grid
///
/// Colors are counted by palette index, so two indices are distinct even if
/// they happen to share an RGB value.
pub fn row_summaries(grid: &ChartGrid) -> Vec<RowSummary> {
    let index_span = grid.max_index().map_or(0, |max| usize::from(max) + 1);

    grid.rows()
        .enumerate()
        .map(|(row_index, row)| {
            let mut seen = bitvec![0; index_span];
            for &index in row.iter() {
                seen.set(usize::from(index), true);
            }
            RowSummary {
                row_index,
                stitch_count: row.len(),
                distinct_colors: seen.count_ones(),
            }
        })
        .collect()
}
