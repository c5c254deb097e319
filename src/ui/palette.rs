//! Sixteen-colour handheld palette
//!
//! Colours are addressed by index, the way the handheld's image API does.

use tiny_skia::Color;

/// Index into the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteColor(pub u8);

impl PaletteColor {
    pub const WHITE: PaletteColor = PaletteColor(1);
    pub const ORANGE: PaletteColor = PaletteColor(4);
    pub const TEAL: PaletteColor = PaletteColor(6);
    pub const LIGHT_BLUE: PaletteColor = PaletteColor(9);
    pub const BLACK: PaletteColor = PaletteColor(15);

    const RGB: [(u8, u8, u8); 16] = [
        (0x00, 0x00, 0x00),
        (0xff, 0xff, 0xff),
        (0xff, 0x21, 0x21),
        (0xff, 0x93, 0xc4),
        (0xff, 0x81, 0x35),
        (0xff, 0xf6, 0x09),
        (0x24, 0x9c, 0xa3),
        (0x78, 0xdc, 0x52),
        (0x00, 0x3f, 0xad),
        (0x87, 0xf2, 0xff),
        (0x8e, 0x2e, 0xc4),
        (0xa4, 0x83, 0x9f),
        (0x5c, 0x40, 0x6c),
        (0xe5, 0xcd, 0xc4),
        (0x91, 0x46, 0x3d),
        (0x00, 0x00, 0x00),
    ];

    /// Opaque RGB value; indices wrap modulo 16
    pub fn rgb(self) -> (u8, u8, u8) {
        Self::RGB[(self.0 & 0x0f) as usize]
    }

    pub fn to_color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::from_rgba8(r, g, b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(PaletteColor::WHITE.rgb(), (0xff, 0xff, 0xff));
        assert_eq!(PaletteColor::ORANGE.rgb(), (0xff, 0x81, 0x35));
        assert_eq!(PaletteColor::TEAL.rgb(), (0x24, 0x9c, 0xa3));
        assert_eq!(PaletteColor::LIGHT_BLUE.rgb(), (0x87, 0xf2, 0xff));
    }

    #[test]
    fn indices_wrap() {
        assert_eq!(PaletteColor(17).rgb(), PaletteColor(1).rgb());
    }
}
