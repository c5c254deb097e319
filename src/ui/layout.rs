//! Frame layout for the three screens
//!
//! Layout is calculated separately from rasterization so screens can be
//! compared and tested without touching pixels. A `Frame` is a complete
//! description of one canvas.

use crate::config::game::GRID_RANGE;
use crate::domain::{History, Number, NumberRange, ShownSet};
use crate::ui::font::{CELL_HEIGHT, CELL_WIDTH};
use crate::ui::palette::PaletteColor;

/// Canvas width in pixels
pub const SCREEN_WIDTH: u32 = 160;
/// Canvas height in pixels
pub const SCREEN_HEIGHT: u32 = 120;

/// Left edge of the first grid column
pub const GRID_ORIGIN_X: i32 = 10;
/// Top edge of the first grid row
pub const GRID_ORIGIN_Y: i32 = 5;
/// Horizontal distance between grid columns
pub const GRID_PITCH_X: i32 = 16;
/// Vertical distance between grid rows
pub const GRID_PITCH_Y: i32 = 11;
/// Numbers per grid column
pub const GRID_ROWS: u32 = 10;

/// Character scale of a text item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// 1x, 8x8 cells
    Small,
    /// 2x, 16x16 cells
    Medium,
    /// 4x, 32x32 cells
    Large,
}

impl TextSize {
    pub fn scale(self) -> u32 {
        match self {
            TextSize::Small => 1,
            TextSize::Medium => 2,
            TextSize::Large => 4,
        }
    }

    /// Line height in canvas pixels
    pub fn line_height(self) -> u32 {
        CELL_HEIGHT * self.scale()
    }

    /// Width of `text` in the built-in font
    pub fn cell_width(self, text: &str) -> u32 {
        text.chars().count() as u32 * CELL_WIDTH * self.scale()
    }
}

/// Horizontal placement of a text item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Centred on the canvas width
    Centered,
    /// Left edge at the given x
    Left(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub text: String,
    pub anchor: TextAnchor,
    /// Top edge of the text line
    pub y: i32,
    pub color: PaletteColor,
    pub size: TextSize,
}

/// Everything drawn on one canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub background: PaletteColor,
    pub texts: Vec<TextItem>,
}

impl Frame {
    fn new(background: PaletteColor) -> Self {
        Self {
            background,
            texts: Vec::new(),
        }
    }

    fn push(&mut self, text: impl Into<String>, anchor: TextAnchor, y: i32, color: PaletteColor, size: TextSize) {
        self.texts.push(TextItem {
            text: text.into(),
            anchor,
            y,
            color,
            size,
        });
    }
}

#[cfg(test)]
impl Frame {
    /// Returns true if any text item shows exactly `text`
    pub fn shows_text(&self, text: &str) -> bool {
        self.texts.iter().any(|item| item.text == text)
    }
}

/// Title screen shown before the first draw
pub fn start_frame() -> Frame {
    let mut frame = Frame::new(PaletteColor::ORANGE);
    let title_y = (SCREEN_HEIGHT - TextSize::Large.line_height()) / 2;
    frame.push("BINGO", TextAnchor::Centered, title_y as i32, PaletteColor::WHITE, TextSize::Large);
    frame.push(
        "Press A to start",
        TextAnchor::Centered,
        (SCREEN_HEIGHT - 16) as i32,
        PaletteColor::WHITE,
        TextSize::Small,
    );
    frame
}

/// Current number in large digits with the history line below it
pub fn current_frame(current: Option<Number>, history: &History) -> Frame {
    let mut frame = Frame::new(PaletteColor::ORANGE);

    if let Some(n) = current {
        frame.push(n.to_string(), TextAnchor::Centered, 5, PaletteColor::LIGHT_BLUE, TextSize::Large);
    }

    let line = history.joined();
    let size = if TextSize::Medium.cell_width(&line) <= SCREEN_WIDTH {
        TextSize::Medium
    } else {
        TextSize::Small
    };
    frame.push(line, TextAnchor::Centered, 60, PaletteColor::WHITE, size);

    frame
}

/// Grid cell of `n`: column `(n-1) / 10`, row `(n-1) % 10`. `n` must lie in 1..=90.
pub fn grid_position(n: Number) -> (i32, i32) {
    debug_assert!(GRID_RANGE.contains(n), "{n} has no grid cell");
    let index = (n - 1) as i32;
    let col = index / GRID_ROWS as i32;
    let row = index % GRID_ROWS as i32;
    (GRID_ORIGIN_X + col * GRID_PITCH_X, GRID_ORIGIN_Y + row * GRID_PITCH_Y)
}

/// Every shown number of `display_range` (clipped to 1..=90) in its grid cell
pub fn all_numbers_frame(shown: &ShownSet, display_range: NumberRange) -> Frame {
    let mut frame = Frame::new(PaletteColor::TEAL);

    let Some(range) = display_range.intersection(&GRID_RANGE) else {
        return frame;
    };

    for n in range.iter().filter(|&n| shown.contains(n)) {
        let (x, y) = grid_position(n);
        frame.push(format!("{n:>2}"), TextAnchor::Left(x), y, PaletteColor::LIGHT_BLUE, TextSize::Small);
    }

    frame
}
