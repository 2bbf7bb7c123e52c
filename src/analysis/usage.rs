//! Stitch totals per palette color

use crate::chart::converter::Chart;

/// Number of stitches worked in one palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorUsage {
    /// Palette index
    pub index: usize,
    /// Palette color
    pub rgb: [u8; 3],
    /// Stitches using this color across the whole chart
    pub stitch_count: usize,
}

/// Count stitches for every palette entry, in palette order
///
/// Entries that no cell references are reported with a zero count.
pub fn color_usage(chart: &Chart) -> Vec<ColorUsage> {
    let mut counts = vec![0usize; chart.palette.len()];
    for index in chart.grid.iter() {
        if let Some(count) = counts.get_mut(usize::from(index)) {
            *count += 1;
        }
    }

    chart
        .palette
        .colors()
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(index, (&rgb, stitch_count))| ColorUsage {
            index,
            rgb,
            stitch_count,
        })
        .collect()
}
