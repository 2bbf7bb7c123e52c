//! Tests for palette access and hex formatting

#[cfg(test)]
mod tests {
    use stitchchart::Palette;
    use stitchchart::chart::palette::rgb_to_hex;

    // Tests hex codes are uppercase with a leading hash
    // Verified by switching to lowercase formatting
    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex([255, 0, 0]), "#FF0000");
        assert_eq!(rgb_to_hex([1, 171, 205]), "#01ABCD");
        assert_eq!(rgb_to_hex([0, 0, 0]), "#000000");
    }

    // Tests palette accessors and hex conversion keep order
    // Verified by sorting hex codes
    #[test]
    fn test_palette_accessors() {
        let palette = Palette::new(vec![[255, 255, 255], [0, 128, 0]]);

        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(1), Some([0, 128, 0]));
        assert_eq!(palette.get(2), None);
        assert_eq!(palette.colors(), &[[255, 255, 255], [0, 128, 0]]);
        assert_eq!(palette.hex_codes(), vec!["#FFFFFF", "#008000"]);
    }

    // Tests explicit palettes are stored as given, duplicates included
    // Verified by deduplicating in the constructor
    #[test]
    fn test_palette_new_keeps_entries_as_given() {
        let palette = Palette::new(vec![[9, 9, 9], [9, 9, 9]]);

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.hex_codes(), vec!["#090909", "#090909"]);
    }

    // Tests default palette is empty
    // Verified by seeding a default color
    #[test]
    fn test_palette_default_is_empty() {
        let palette = Palette::default();
        assert!(palette.is_empty());
        assert!(palette.hex_codes().is_empty());
    }
}
