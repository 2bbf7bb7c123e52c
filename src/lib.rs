//! Image to crochet stitch chart conversion
//!
//! Source images are downscaled with nearest-neighbor sampling to a chosen
//! stitch width, quantized to a small palette with a deterministic median cut,
//! and exported as PNG bytes, an enlarged preview and a per-row CSV table
//! suitable for corner-to-corner, filet or tapestry crochet.

#![forbid(unsafe_code)]

/// Per-row and per-color chart statistics
pub mod analysis;
/// Resizing, quantization and the chart data model
pub mod chart;
/// Decoding, exports, command line and error handling
pub mod io;

pub use chart::{Chart, ChartGrid, ChartSettings, Palette, convert, convert_bytes};
pub use io::error::{ChartError, Result};
