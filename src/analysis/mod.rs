//! Statistics derived from finished charts

/// Per-row distinct color counts
pub mod rows;
/// Stitch totals per palette color
pub mod usage;

pub use rows::{RowSummary, row_summaries};
pub use usage::{ColorUsage, color_usage};
