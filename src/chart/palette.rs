//! Resolved chart colors

/// Ordered RGB colors referenced by a chart grid
///
/// Palettes produced by conversion hold distinct colors with index 0 the most
/// used. [`Palette::new`] accepts any list as given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Create a palette from RGB triples
    pub const fn new(colors: Vec<[u8; 3]>) -> Self {
        Self { colors }
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Test if the palette has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// RGB color at the given index
    pub fn get(&self, index: usize) -> Option<[u8; 3]> {
        self.colors.get(index).copied()
    }

    /// All colors in palette order
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Colors as `#RRGGBB` strings
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(|&rgb| rgb_to_hex(rgb)).collect()
    }
}

/// Format an RGB triple as an uppercase `#RRGGBB` string
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
