//! Chart constants and runtime configuration defaults

// Stitch grid width range accepted by the converter
/// Smallest chart width in stitches
pub const MIN_STITCH_WIDTH: u32 = 10;
/// Largest chart width in stitches
pub const MAX_STITCH_WIDTH: u32 = 100;

// Palette size range accepted by the quantizer
/// Smallest requested palette size
pub const MIN_COLORS: usize = 2;
/// Largest requested palette size
pub const MAX_COLORS: usize = 20;

// Safety limit to keep worst-case conversion latency bounded
/// Maximum source pixel count accepted for conversion
pub const MAX_SOURCE_PIXELS: u64 = 25_000_000;

/// Opaque background that transparent pixels are composited against
pub const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];

// Preview rendering
/// Pixels per stitch in the enlarged preview
pub const DEFAULT_PREVIEW_BLOCK_SIZE: u32 = 10;
/// Largest accepted preview block size
pub const MAX_PREVIEW_BLOCK_SIZE: u32 = 64;
/// Color of the optional preview grid lines
pub const GRID_LINE_RGB: [u8; 3] = [64, 64, 64];

/// Header line of the row table export
pub const CSV_HEADER: &str = "Row,Stitch Count,Colors";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Default chart width in stitches
pub const DEFAULT_STITCH_WIDTH: u32 = 30;
/// Default number of palette colors
pub const DEFAULT_NUM_COLORS: usize = 6;

// Output settings
/// Suffix of the low-resolution chart image
pub const CHART_SUFFIX: &str = "_chart";
/// Suffix of the row table export
pub const DATA_SUFFIX: &str = "_chart_data";
/// Suffix of the enlarged preview image
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Input file extensions picked up by the batch processor
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];
