//! Frame rasterization
//!
//! Turns a `Frame` into a tiny-skia pixmap: palette background fill, then
//! each text item in the bitmap font (whole-pixel squares) or an outline
//! font (coverage-blended glyphs).

use std::path::PathBuf;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use tiny_skia::{Paint, Pixmap, PremultipliedColorU8, Rect as SkiaRect, Transform};

use crate::ui::font::{CELL_HEIGHT, CELL_WIDTH, TextFont, glyph};
use crate::ui::layout::{Frame, SCREEN_HEIGHT, SCREEN_WIDTH, TextAnchor, TextItem};
use crate::ui::palette::PaletteColor;

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("Failed to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {path} is not a usable font")]
    InvalidFont { path: PathBuf },
}

/// Rasterizes frames onto a 160x120 canvas
#[derive(Debug)]
pub struct FrameRenderer {
    font: TextFont,
}

impl FrameRenderer {
    pub fn new(font: TextFont) -> Self {
        Self { font }
    }

    /// Allocates a blank canvas
    pub fn canvas() -> Result<Pixmap, RendererError> {
        Pixmap::new(SCREEN_WIDTH, SCREEN_HEIGHT).ok_or(RendererError::PixmapCreationFailed)
    }

    /// Renders `frame` onto a fresh canvas
    pub fn render(&self, frame: &Frame) -> Result<Pixmap, RendererError> {
        let mut pixmap = Self::canvas()?;
        self.render_into(frame, &mut pixmap);
        Ok(pixmap)
    }

    /// Renders `frame` over an existing canvas, clearing it first
    pub fn render_into(&self, frame: &Frame, pixmap: &mut Pixmap) {
        pixmap.fill(frame.background.to_color());

        for item in &frame.texts {
            self.render_text(pixmap, item);
        }
    }

    fn text_origin_x(&self, item: &TextItem) -> i32 {
        match item.anchor {
            TextAnchor::Left(x) => x,
            TextAnchor::Centered => {
                let width = self.font.text_width(&item.text, item.size.scale());
                ((SCREEN_WIDTH as f32 - width) / 2.0).floor() as i32
            }
        }
    }

    fn render_text(&self, pixmap: &mut Pixmap, item: &TextItem) {
        if item.text.is_empty() {
            return;
        }

        let x = self.text_origin_x(item);
        match &self.font {
            TextFont::Bitmap => render_bitmap_text(pixmap, item, x),
            TextFont::Outline(font) => render_outline_text(pixmap, font, item, x),
        }
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(TextFont::Bitmap)
    }
}

fn render_bitmap_text(pixmap: &mut Pixmap, item: &TextItem, x: i32) {
    let scale = item.size.scale();
    let pixel = scale as f32;

    let mut paint = Paint::default();
    paint.set_color(item.color.to_color());
    paint.anti_alias = false;

    for (index, c) in item.text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };

        let cell_x = x + (index as u32 * CELL_WIDTH * scale) as i32;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..CELL_WIDTH {
                if (bits >> col) & 1 == 0 {
                    continue;
                }

                let px = cell_x + (col * scale) as i32;
                let py = item.y + (row as u32 * scale) as i32;
                if let Some(rect) = SkiaRect::from_xywh(px as f32, py as f32, pixel, pixel) {
                    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                }
            }
        }
    }
}

fn render_outline_text(pixmap: &mut Pixmap, font: &FontVec, item: &TextItem, x: i32) {
    let scale = PxScale::from((CELL_HEIGHT * item.size.scale()) as f32);
    let scaled = font.as_scaled(scale);
    let baseline = item.y as f32 + scaled.ascent();

    let mut caret = x as f32;
    let mut previous = None;

    for c in item.text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }

        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                blend_pixel(
                    pixmap,
                    bounds.min.x as i32 + gx as i32,
                    bounds.min.y as i32 + gy as i32,
                    item.color,
                    coverage,
                );
            });
        }
    }
}

/// Mixes `color` over an opaque canvas pixel by `coverage`
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: PaletteColor, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= pixmap.width() || y as u32 >= pixmap.height() {
        return;
    }

    let index = (y as u32 * pixmap.width() + x as u32) as usize;
    let pixels = pixmap.pixels_mut();
    let dst = pixels[index];

    let alpha = coverage.clamp(0.0, 1.0);
    let mix = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;

    let (r, g, b) = color.rgb();
    if let Some(blended) =
        PremultipliedColorU8::from_rgba(mix(r, dst.red()), mix(g, dst.green()), mix(b, dst.blue()), 255)
    {
        pixels[index] = blended;
    }
}

/// Reads the canvas pixel at (x, y) as opaque RGB
pub fn pixel_rgb(pixmap: &Pixmap, x: u32, y: u32) -> Option<(u8, u8, u8)> {
    pixmap.pixel(x, y).map(|p| (p.red(), p.green(), p.blue()))
}

/// Canvas pixels as top-down BGRA rows, the layout GDI expects for 32-bit DIBs
pub fn bgra_pixels(pixmap: &Pixmap) -> Vec<u8> {
    let mut data = pixmap.data().to_vec();
    for pixel in data.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{History, NumberRange, ShownSet};
    use crate::ui::layout::{all_numbers_frame, current_frame, grid_position, start_frame};

    fn count_color(pixmap: &Pixmap, color: PaletteColor, area: (u32, u32, u32, u32)) -> usize {
        let (x0, y0, x1, y1) = area;
        let mut count = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                if pixel_rgb(pixmap, x, y) == Some(color.rgb()) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn canvas_has_screen_size() {
        let pixmap = FrameRenderer::default().render(&start_frame()).unwrap();
        assert_eq!(pixmap.width(), 160);
        assert_eq!(pixmap.height(), 120);
        assert_eq!(pixmap.data().len(), 160 * 120 * 4);
    }

    #[test]
    fn background_uses_palette() {
        let pixmap = FrameRenderer::default().render(&start_frame()).unwrap();
        assert_eq!(pixel_rgb(&pixmap, 0, 0), Some(PaletteColor::ORANGE.rgb()));
        assert_eq!(pixel_rgb(&pixmap, 159, 119), Some(PaletteColor::ORANGE.rgb()));
    }

    #[test]
    fn title_is_drawn_in_white() {
        let pixmap = FrameRenderer::default().render(&start_frame()).unwrap();
        assert!(count_color(&pixmap, PaletteColor::WHITE, (0, 44, 160, 76)) > 0);
        assert!(count_color(&pixmap, PaletteColor::WHITE, (0, 0, 160, 40)) == 0);
    }

    #[test]
    fn current_number_is_drawn_at_top() {
        let frame = current_frame(Some(88), &History::new(3));
        let pixmap = FrameRenderer::default().render(&frame).unwrap();
        assert!(count_color(&pixmap, PaletteColor::LIGHT_BLUE, (0, 5, 160, 37)) > 0);
        assert_eq!(count_color(&pixmap, PaletteColor::LIGHT_BLUE, (0, 40, 160, 120)), 0);
    }

    #[test]
    fn large_digits_are_centered() {
        let frame = current_frame(Some(88), &History::new(3));
        let pixmap = FrameRenderer::default().render(&frame).unwrap();
        // "88" is 64 px wide, so it spans x = 48..112
        assert!(count_color(&pixmap, PaletteColor::LIGHT_BLUE, (48, 0, 112, 120)) > 0);
        assert_eq!(count_color(&pixmap, PaletteColor::LIGHT_BLUE, (0, 0, 48, 120)), 0);
        assert_eq!(count_color(&pixmap, PaletteColor::LIGHT_BLUE, (112, 0, 160, 120)), 0);
    }

    #[test]
    fn shown_number_occupies_its_grid_cell() {
        let mut shown = ShownSet::new(NumberRange::new(1, 90));
        shown.mark(42);
        let pixmap = FrameRenderer::default()
            .render(&all_numbers_frame(&shown, NumberRange::new(1, 90)))
            .unwrap();

        let (x, y) = grid_position(42);
        let cell = (x as u32, y as u32, x as u32 + 16, y as u32 + 8);
        assert!(count_color(&pixmap, PaletteColor::LIGHT_BLUE, cell) > 0);

        let (x, y) = grid_position(1);
        let empty = (x as u32, y as u32, x as u32 + 16, y as u32 + 8);
        assert_eq!(count_color(&pixmap, PaletteColor::LIGHT_BLUE, empty), 0);
    }

    #[test]
    fn bgra_swaps_red_and_blue() {
        let pixmap = FrameRenderer::default().render(&start_frame()).unwrap();
        let bgra = bgra_pixels(&pixmap);
        let (r, g, b) = PaletteColor::ORANGE.rgb();
        assert_eq!(bgra.len(), 160 * 120 * 4);
        assert_eq!(&bgra[..4], &[b, g, r, 255]);
    }

    #[test]
    fn blending_outside_canvas_is_ignored() {
        let mut pixmap = FrameRenderer::canvas().unwrap();
        blend_pixel(&mut pixmap, -1, 0, PaletteColor::WHITE, 1.0);
        blend_pixel(&mut pixmap, 0, 500, PaletteColor::WHITE, 1.0);
        blend_pixel(&mut pixmap, 3, 3, PaletteColor::WHITE, 1.0);
        assert_eq!(pixel_rgb(&pixmap, 3, 3), Some(PaletteColor::WHITE.rgb()));
    }
}
