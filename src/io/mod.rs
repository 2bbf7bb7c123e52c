//! Input/output: decoding, exports, command line and error handling

/// Command-line parsing and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// In-memory chart exports
pub mod export;
/// Source image decoding
pub mod image;
/// Terminal progress display
pub mod progress;
