//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use stitchchart::ChartError;
    use stitchchart::io::error::{conversion_error, file_system_error, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/test.png", "read", io_error);

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("stitch_width", &5, &"must be between 10 and 100");

        let message = error.to_string();
        assert!(message.contains("stitch_width"));
        assert!(message.contains('5'));
        assert!(message.contains("must be between 10 and 100"));
        assert!(error.source().is_none());
    }

    // Tests Conversion error names the failing step and cause
    // Verified by omitting reason from message
    #[test]
    fn test_conversion_error() {
        let error = conversion_error("quantize", &"image has no pixels");

        let message = error.to_string();
        assert!(message.contains("quantize"));
        assert!(message.contains("image has no pixels"));
    }

    // Tests decode errors keep the image error as source
    // Verified by dropping source from Decode
    #[test]
    fn test_decode_error_source() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "bad header",
        ));
        let error: ChartError = image_error.into();

        assert!(matches!(error, ChartError::Decode { .. }));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("bad header"));
    }

    // Tests size ceiling message reports dimensions and limit
    // Verified by omitting the limit from the message
    #[test]
    fn test_image_too_large_error() {
        let error = ChartError::ImageTooLarge {
            width: 6000,
            height: 5000,
            max_pixels: 25_000_000,
        };

        let message = error.to_string();
        assert!(message.contains("6000x5000"));
        assert!(message.contains("25000000"));
    }

    // Tests palette index error formatting
    // Verified by swapping index and length
    #[test]
    fn test_invalid_palette_index_error() {
        let error = ChartError::InvalidPaletteIndex {
            index: 7,
            palette_len: 3,
        };

        let message = error.to_string();
        assert!(message.contains("index 7"));
        assert!(message.contains("3 colors"));
    }

    // Tests io errors convert into file system errors
    // Verified by mapping io errors to decode errors
    #[test]
    fn test_io_error_conversion() {
        let error: ChartError = std::io::Error::other("disk full").into();
        assert!(matches!(error, ChartError::FileSystem { .. }));
    }
}
