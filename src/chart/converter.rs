//! Image to stitch chart conversion
//!
//! A conversion runs resize, flatten and quantize in sequence and either
//! returns a complete [`Chart`] or an error. Nothing is cached between calls.

use crate::chart::grid::ChartGrid;
use crate::chart::palette::Palette;
use crate::chart::quantize::median_cut;
use crate::chart::resize::{flatten_alpha, resize_nearest};
use crate::io::configuration::{
    DEFAULT_NUM_COLORS, DEFAULT_STITCH_WIDTH, MAX_COLORS, MAX_SOURCE_PIXELS, MAX_STITCH_WIDTH,
    MIN_COLORS, MIN_STITCH_WIDTH,
};
use crate::io::error::{ChartError, Result, conversion_error, invalid_parameter};
use crate::io::image::decode_bytes;
use image::DynamicImage;

/// Chart parameters chosen by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSettings {
    /// Chart width in stitches
    pub stitch_width: u32,
    /// Maximum number of yarn colors
    pub num_colors: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            stitch_width: DEFAULT_STITCH_WIDTH,
            num_colors: DEFAULT_NUM_COLORS,
        }
    }
}

impl ChartSettings {
    /// Create settings without validating them
    pub const fn new(stitch_width: u32, num_colors: usize) -> Self {
        Self {
            stitch_width,
            num_colors,
        }
    }

    /// Check both parameters against their accepted ranges
    ///
    /// # Errors
    ///
    /// Returns an error if the stitch width or color count is out of range
    pub fn validate(self) -> Result<()> {
        if !(MIN_STITCH_WIDTH..=MAX_STITCH_WIDTH).contains(&self.stitch_width) {
            return Err(invalid_parameter(
                "stitch_width",
                &self.stitch_width,
                &format!("must be between {MIN_STITCH_WIDTH} and {MAX_STITCH_WIDTH}"),
            ));
        }
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.num_colors) {
            return Err(invalid_parameter(
                "num_colors",
                &self.num_colors,
                &format!("must be between {MIN_COLORS} and {MAX_COLORS}"),
            ));
        }
        Ok(())
    }
}

/// Quantized stitch chart: palette indices plus the colors they refer to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    /// Palette index per stitch
    pub grid: ChartGrid,
    /// Colors referenced by the grid
    pub palette: Palette,
}

impl Chart {
    /// Chart dimensions as (width, height) in stitches
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// RGB color of the stitch at the given position
    pub fn color_at(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        self.grid
            .get(row, col)
            .and_then(|index| self.palette.get(usize::from(index)))
    }
}

/// Reject sources that are empty or above the pixel ceiling
///
/// # Errors
///
/// Returns an error if either dimension is zero or the pixel count exceeds
/// [`MAX_SOURCE_PIXELS`]
pub fn check_source_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(conversion_error(
            "validate",
            &format!("source is {width}x{height} (degenerate dimensions)"),
        ));
    }
    if u64::from(width) * u64::from(height) > MAX_SOURCE_PIXELS {
        return Err(ChartError::ImageTooLarge {
            width,
            height,
            max_pixels: MAX_SOURCE_PIXELS,
        });
    }
    Ok(())
}

/// Convert a decoded image into a stitch chart
///
/// # Errors
///
/// Returns an error if:
/// - The settings are out of range
/// - The image is empty or exceeds the pixel ceiling
/// - Resizing or quantization fails
pub fn convert(image: &DynamicImage, settings: ChartSettings) -> Result<Chart> {
    settings.validate()?;
    check_source_dimensions(image.width(), image.height())?;

    let small = resize_nearest(&image.to_rgba8(), settings.stitch_width)?;
    let flat = flatten_alpha(&small);
    let (width, height) = (flat.width() as usize, flat.height() as usize);

    let pixels: Vec<[u8; 3]> = flat.pixels().map(|pixel| pixel.0).collect();
    let quantized = median_cut(&pixels, settings.num_colors)?;

    let grid = ChartGrid::from_row_major(width, height, quantized.indices).ok_or_else(|| {
        conversion_error("quantize", &"index count does not match chart dimensions")
    })?;

    Ok(Chart {
        grid,
        palette: Palette::new(quantized.palette),
    })
}

/// Decode image bytes and convert them into a stitch chart
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded or conversion fails
pub fn convert_bytes(bytes: &[u8], settings: ChartSettings) -> Result<Chart> {
    settings.validate()?;
    let image = decode_bytes(bytes)?;
    convert(&image, settings)
}
