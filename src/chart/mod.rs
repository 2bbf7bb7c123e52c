//! Conversion of source images into quantized stitch charts

/// Conversion entry points and chart settings
pub mod converter;
/// Grid of palette indices
pub mod grid;
/// Chart color palette
pub mod palette;
/// Median-cut color quantization
pub mod quantize;
/// Nearest-neighbor resizing and alpha flattening
pub mod resize;

pub use converter::{Chart, ChartSettings, convert, convert_bytes};
pub use grid::ChartGrid;
pub use palette::Palette;
