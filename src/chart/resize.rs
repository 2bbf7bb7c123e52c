//! Aspect-preserving nearest-neighbor downscaling and alpha flattening

use crate::io::configuration::BACKGROUND_RGB;
use crate::io::error::{Result, conversion_error};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, RgbaImage};
use num_traits::ToPrimitive;

/// Chart height in rows for a source of the given size
///
/// Computes `round(source_height * stitch_width / source_width)`, never less
/// than one row.
///
/// # Errors
///
/// Returns an error if the source width is zero or the height does not fit
/// into `u32`.
pub fn target_height(source_width: u32, source_height: u32, stitch_width: u32) -> Result<u32> {
    if source_width == 0 {
        return Err(conversion_error(
            "resize",
            &"source width is zero (degenerate dimensions)",
        ));
    }

    // Multiply before dividing so exact halves stay exact
    let scaled = f64::from(source_height) * f64::from(stitch_width) / f64::from(source_width);
    let rows = scaled.round().to_u32().ok_or_else(|| {
        conversion_error("resize", &format!("derived height {scaled} is out of range"))
    })?;

    Ok(rows.max(1))
}

/// Downscale to the chart grid without interpolation
///
/// Each output pixel copies exactly one source pixel so hard color edges
/// survive the resize.
///
/// # Errors
///
/// Returns an error if the source has degenerate dimensions.
pub fn resize_nearest(source: &RgbaImage, stitch_width: u32) -> Result<RgbaImage> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(conversion_error(
            "resize",
            &format!("source is {width}x{height} (degenerate dimensions)"),
        ));
    }

    let rows = target_height(width, height, stitch_width)?;
    if (stitch_width, rows) == (width, height) {
        return Ok(source.clone());
    }

    Ok(imageops::resize(source, stitch_width, rows, FilterType::Nearest))
}

/// Composite every pixel over the opaque background, dropping alpha
pub fn flatten_alpha(image: &RgbaImage) -> RgbImage {
    let mut flat = RgbImage::new(image.width(), image.height());

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        flat.put_pixel(
            x,
            y,
            Rgb([
                blend_channel(r, BACKGROUND_RGB[0], a),
                blend_channel(g, BACKGROUND_RGB[1], a),
                blend_channel(b, BACKGROUND_RGB[2], a),
            ]),
        );
    }

    flat
}

fn blend_channel(foreground: u8, background: u8, alpha: u8) -> u8 {
    let alpha = u32::from(alpha);
    let mixed = u32::from(foreground) * alpha + u32::from(background) * (255 - alpha);
    // Rounded division by 255 stays within u8 range
    ((mixed + 127) / 255) as u8
}
