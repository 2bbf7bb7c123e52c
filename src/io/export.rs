//! In-memory chart exports: PNG bytes, enlarged preview, row table and palette
//!
//! Nothing here touches the filesystem. Callers decide where the buffers go.

use crate::analysis::rows::{RowSummary, row_summaries};
use crate::chart::converter::Chart;
use crate::chart::palette::Palette;
use crate::io::configuration::{
    CSV_HEADER, DEFAULT_PREVIEW_BLOCK_SIZE, GRID_LINE_RGB, MAX_PREVIEW_BLOCK_SIZE,
};
use crate::io::error::{ChartError, Result, invalid_parameter};
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, Rgb, RgbImage};
use std::fmt::Write;

/// Rendering options for the enlarged preview
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Edge length in pixels of the square drawn for each stitch
    pub block_size: u32,
    /// Draw a one-pixel line along the top and left edge of every block
    pub grid_lines: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_PREVIEW_BLOCK_SIZE,
            grid_lines: false,
        }
    }
}

impl PreviewOptions {
    /// Check the block size against its accepted range
    ///
    /// # Errors
    ///
    /// Returns an error if the block size is zero or above [`MAX_PREVIEW_BLOCK_SIZE`]
    pub fn validate(self) -> Result<()> {
        if self.block_size == 0 || self.block_size > MAX_PREVIEW_BLOCK_SIZE {
            return Err(invalid_parameter(
                "block_size",
                &self.block_size,
                &format!("must be between 1 and {MAX_PREVIEW_BLOCK_SIZE}"),
            ));
        }
        Ok(())
    }
}

/// Render the chart at one pixel per stitch
///
/// # Errors
///
/// Returns an error if a cell references a missing palette entry
pub fn render_chart(chart: &Chart) -> Result<RgbImage> {
    render_blocks(chart, 1, false)
}

/// Render the chart with every stitch enlarged to a square block
///
/// # Errors
///
/// Returns an error if:
/// - The block size is zero or above [`MAX_PREVIEW_BLOCK_SIZE`]
/// - A cell references a missing palette entry
pub fn render_preview(chart: &Chart, options: &PreviewOptions) -> Result<RgbImage> {
    options.validate()?;
    render_blocks(chart, options.block_size, options.grid_lines)
}

fn render_blocks(chart: &Chart, block_size: u32, grid_lines: bool) -> Result<RgbImage> {
    let (width, height) = chart.dimensions();
    let mut img = RgbImage::new(width as u32 * block_size, height as u32 * block_size);

    for (row, cells) in chart.grid.rows().enumerate() {
        for (col, &index) in cells.iter().enumerate() {
            let rgb = palette_color(&chart.palette, index)?;
            let origin_x = col as u32 * block_size;
            let origin_y = row as u32 * block_size;

            for dy in 0..block_size {
                for dx in 0..block_size {
                    let on_line = grid_lines && (dx == 0 || dy == 0);
                    let color = if on_line { GRID_LINE_RGB } else { rgb };
                    img.put_pixel(origin_x + dx, origin_y + dy, Rgb(color));
                }
            }
        }
    }

    Ok(img)
}

fn palette_color(palette: &Palette, index: u8) -> Result<[u8; 3]> {
    palette
        .get(usize::from(index))
        .ok_or(ChartError::InvalidPaletteIndex {
            index: usize::from(index),
            palette_len: palette.len(),
        })
}

/// Encode an RGB image as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_rgb_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|source| ChartError::Encode { source })?;
    Ok(bytes)
}

/// Lossless PNG of the chart at one pixel per stitch
///
/// # Errors
///
/// Returns an error if rendering or encoding fails
pub fn encode_png(chart: &Chart) -> Result<Vec<u8>> {
    encode_rgb_png(&render_chart(chart)?)
}

/// PNG of the enlarged preview
///
/// # Errors
///
/// Returns an error if the options are invalid or encoding fails
pub fn encode_preview_png(chart: &Chart, options: &PreviewOptions) -> Result<Vec<u8>> {
    encode_rgb_png(&render_preview(chart, options)?)
}

/// Format row summaries as `Row,Stitch Count,Colors` text
///
/// Every line, header included, ends with a newline.
pub fn rows_csv(rows: &[RowSummary]) -> String {
    let mut csv = String::with_capacity((rows.len() + 1) * 16);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for row in rows {
        // Writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{}",
            row.row_index, row.stitch_count, row.distinct_colors
        );
    }

    csv
}

/// Row table of a chart as CSV text
pub fn chart_csv(chart: &Chart) -> String {
    rows_csv(&row_summaries(&chart.grid))
}

/// Palette colors as `#RRGGBB` strings, in palette order
pub fn palette_hex(palette: &Palette) -> Vec<String> {
    palette.hex_codes()
}

/// Human-readable chart size such as `30W × 24H stitches`
pub fn dimensions_summary(chart: &Chart) -> String {
    let (width, height) = chart.dimensions();
    format!("{width}W × {height}H stitches")
}
