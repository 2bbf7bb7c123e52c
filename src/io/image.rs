//! Source image decoding with an up-front size check

use crate::chart::converter::check_source_dimensions;
use crate::io::error::{ChartError, Result, file_system_error};
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::path::Path;

fn reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|source| ChartError::Decode {
            source: image::ImageError::IoError(source),
        })
}

/// Decode JPEG, PNG or GIF bytes into an image
///
/// The header is read first so oversized images are rejected before their
/// pixels are allocated.
///
/// # Errors
///
/// Returns an error if:
/// - The format is not recognized or the data is corrupt
/// - The image is empty or exceeds the pixel ceiling
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    let (width, height) = reader(bytes)?.into_dimensions()?;
    check_source_dimensions(width, height)?;

    Ok(reader(bytes)?.decode()?)
}

/// Read and decode an image file
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_path(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|e| file_system_error(path, "read image", e))?;

    decode_bytes(&bytes).map_err(|error| match error {
        ChartError::Decode { source } => ChartError::ImageLoad {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
