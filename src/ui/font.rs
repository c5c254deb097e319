//! Text fonts
//!
//! The built-in font is font8x8's basic Latin set, one 8x8 cell per
//! character, scaled by whole pixels. A TrueType font loaded through ab_glyph
//! can replace it; it is sized so that one cell height equals the bitmap
//! cell height.

use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use font8x8::{BASIC_FONTS, UnicodeFonts};

use crate::ui::renderer::RendererError;

/// Advance of one bitmap character, in unscaled pixels
pub const CELL_WIDTH: u32 = 8;
/// Line height of the bitmap font, in unscaled pixels
pub const CELL_HEIGHT: u32 = 8;

/// Rows of a bitmap glyph, top to bottom; bit 0 of each row is the leftmost pixel
pub type GlyphRows = [u8; 8];

/// Bitmap glyph for `c`, if the basic Latin set has one
pub fn glyph(c: char) -> Option<GlyphRows> {
    BASIC_FONTS.get(c)
}

/// Font used to rasterize text
pub enum TextFont {
    /// Built-in 8x8 bitmap font
    Bitmap,
    /// TrueType/OpenType font
    Outline(FontVec),
}

impl std::fmt::Debug for TextFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextFont::Bitmap => write!(f, "TextFont::Bitmap"),
            TextFont::Outline(_) => write!(f, "TextFont::Outline"),
        }
    }
}

impl TextFont {
    /// Loads a font file
    pub fn load(path: &Path) -> Result<Self, RendererError> {
        let data = std::fs::read(path).map_err(|source| RendererError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| RendererError::InvalidFont {
            path: path.to_path_buf(),
        })?;
        Ok(TextFont::Outline(font))
    }

    /// Loads `path` when given, otherwise the bitmap font
    pub fn from_settings(path: Option<&Path>) -> Result<Self, RendererError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(TextFont::Bitmap),
        }
    }

    /// Width of `text` in canvas pixels at `scale` cells
    pub fn text_width(&self, text: &str, scale: u32) -> f32 {
        match self {
            TextFont::Bitmap => (text.chars().count() as u32 * CELL_WIDTH * scale) as f32,
            TextFont::Outline(font) => {
                let scaled = font.as_scaled(PxScale::from((CELL_HEIGHT * scale) as f32));
                let mut width = 0.0;
                let mut previous = None;
                for c in text.chars() {
                    let id = scaled.glyph_id(c);
                    if let Some(previous) = previous {
                        width += scaled.kern(previous, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                width
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_have_glyphs() {
        for c in '0'..='9' {
            assert!(glyph(c).is_some(), "missing glyph for {c}");
        }
    }

    #[test]
    fn lowercase_has_its_own_shape() {
        assert!(glyph('t').is_some());
        assert_ne!(glyph('a'), glyph('A'));
        assert_ne!(glyph('t'), glyph('T'));
    }

    #[test]
    fn space_is_blank_and_non_latin_is_missing() {
        assert_eq!(glyph(' '), Some([0; 8]));
        assert!(glyph('\u{2603}').is_none());
    }

    #[test]
    fn history_punctuation_has_glyphs() {
        assert!(glyph(',').is_some_and(|rows| rows.iter().any(|row| *row != 0)));
    }

    #[test]
    fn bitmap_width_counts_cells() {
        let font = TextFont::Bitmap;
        assert_eq!(font.text_width("88", 4), 64.0);
        assert_eq!(font.text_width("Press A to start", 1), 128.0);
        assert_eq!(font.text_width("", 2), 0.0);
    }

    #[test]
    fn missing_font_file_is_reported() {
        let result = TextFont::load(Path::new("/nonexistent/font.ttf"));
        assert!(matches!(result, Err(RendererError::FontRead { .. })));
    }

    #[test]
    fn no_font_path_means_bitmap() {
        assert!(matches!(TextFont::from_settings(None), Ok(TextFont::Bitmap)));
    }
}
