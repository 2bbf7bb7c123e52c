//! Error types for chart conversion and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all chart operations
#[derive(Debug)]
pub enum ChartError {
    /// Input bytes are not a valid or supported image
    Decode {
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source image exceeds the pixel ceiling
    ImageTooLarge {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
        /// Maximum accepted pixel count
        max_pixels: u64,
    },

    /// Resizing or quantization failed
    ///
    /// Occurs for degenerate source dimensions or when an intermediate
    /// result cannot be represented.
    Conversion {
        /// Name of the conversion step that failed
        operation: &'static str,
        /// Description of the underlying cause
        reason: String,
    },

    /// Chart parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid cell references a palette entry that does not exist
    InvalidPaletteIndex {
        /// The invalid palette index
        index: usize,
        /// Number of palette entries available
        palette_len: usize,
    },

    /// Failed to encode an image into an in-memory buffer
    Encode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { source } => {
                write!(f, "Failed to decode image: {source}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageTooLarge {
                width,
                height,
                max_pixels,
            } => {
                write!(
                    f,
                    "Image {width}x{height} exceeds the limit of {max_pixels} pixels"
                )
            }
            Self::Conversion { operation, reason } => {
                write!(f, "Error converting image during {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidPaletteIndex { index, palette_len } => {
                write!(
                    f,
                    "Palette index {index} is out of bounds (palette has {palette_len} colors)"
                )
            }
            Self::Encode { source } => {
                write!(f, "Failed to encode image: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source }
            | Self::ImageLoad { source, .. }
            | Self::Encode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for chart results
pub type Result<T> = std::result::Result<T, ChartError>;

impl From<image::ImageError> for ChartError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode { source: err }
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ChartError {
    ChartError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a conversion error
pub fn conversion_error(operation: &'static str, reason: &impl ToString) -> ChartError {
    ChartError::Conversion {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> ChartError {
    ChartError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
