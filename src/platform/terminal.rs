//! Terminal host
//!
//! Presents the canvas with upper-half-block cells: each character cell
//! shows two canvas rows, the top pixel as foreground and the bottom pixel
//! as background. The canvas is down-sampled by whole steps when the
//! terminal is too small.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use tiny_skia::Pixmap;
use tracing::{debug, error, info, warn};

use crate::app::{Audio, BingoController, Cue, Screen};
use crate::config::GameConfig;
use crate::input::HostInput;
use crate::platform::HostError;
use crate::ui::renderer::pixel_rgb;
use crate::ui::{Frame, FrameRenderer, SCREEN_HEIGHT, SCREEN_WIDTH, TextFont};

const UPPER_HALF_BLOCK: char = '\u{2580}';

/// RAII wrapper for raw mode and the alternate screen
///
/// Restores the terminal when dropped, including on error paths.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, HostError> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Down-sampled view of the canvas for a terminal of a given size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    /// Canvas pixels per output pixel, in both directions
    pub step: u32,
    /// Output width in character cells
    pub cols: u16,
    /// Output height in character cells
    pub rows: u16,
    /// Column of the left edge, centring the image
    pub left: u16,
}

impl CellGrid {
    /// Picks the smallest whole step that fits the canvas into `cols x rows`
    pub fn fit(term_cols: u16, term_rows: u16) -> Self {
        let cols = u32::from(term_cols.max(1));
        let pixel_rows = u32::from(term_rows.max(1)) * 2;

        let step = SCREEN_WIDTH
            .div_ceil(cols)
            .max(SCREEN_HEIGHT.div_ceil(pixel_rows))
            .max(1);

        let out_cols = SCREEN_WIDTH / step;
        let out_rows = (SCREEN_HEIGHT / step).div_ceil(2);

        Self {
            step,
            cols: out_cols as u16,
            rows: out_rows as u16,
            left: ((cols - out_cols.min(cols)) / 2) as u16,
        }
    }

    /// Colours of the two canvas pixels behind cell (`col`, `row`)
    pub fn sample(&self, pixmap: &Pixmap, col: u16, row: u16) -> ((u8, u8, u8), (u8, u8, u8)) {
        let x = u32::from(col) * self.step;
        let top_y = u32::from(row) * 2 * self.step;
        let bottom_y = top_y + self.step;

        let top = pixel_rgb(pixmap, x, top_y).unwrap_or((0, 0, 0));
        let bottom = pixel_rgb(pixmap, x, bottom_y).unwrap_or((0, 0, 0));
        (top, bottom)
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// Screen that rasterizes frames and draws them into a terminal
pub struct TerminalScreen<W: Write> {
    renderer: FrameRenderer,
    canvas: Pixmap,
    out: W,
    size: (u16, u16),
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(renderer: FrameRenderer, out: W, size: (u16, u16)) -> Result<Self, HostError> {
        Ok(Self {
            renderer,
            canvas: FrameRenderer::canvas()?,
            out,
            size,
        })
    }

    /// Updates the terminal size and redraws the last canvas
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
        if let Err(e) = self.clear().and_then(|_| self.present()) {
            error!("Failed to redraw after resize: {}", e);
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All))
    }

    /// Writes the current canvas to the terminal
    pub fn present(&mut self) -> io::Result<()> {
        let grid = CellGrid::fit(self.size.0, self.size.1);

        for row in 0..grid.rows {
            queue!(self.out, MoveTo(grid.left, row))?;
            for col in 0..grid.cols {
                let (top, bottom) = grid.sample(&self.canvas, col, row);
                queue!(
                    self.out,
                    SetForegroundColor(rgb(top)),
                    SetBackgroundColor(rgb(bottom)),
                    Print(UPPER_HALF_BLOCK)
                )?;
            }
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    pub fn canvas(&self) -> &Pixmap {
        &self.canvas
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn show(&mut self, frame: &Frame) {
        self.renderer.render_into(frame, &mut self.canvas);
        if let Err(e) = self.present() {
            error!("Failed to present frame: {}", e);
        }
    }
}

/// Audio through the terminal bell
///
/// The bell cannot be stopped, so `stop_all` has nothing to do.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Audio for TerminalBell {
    fn play(&mut self, cue: Cue) {
        let rings = match cue {
            Cue::Draw => 1,
            Cue::Exhausted => 2,
        };

        let mut stdout = io::stdout().lock();
        for _ in 0..rings {
            if let Err(e) = stdout.write_all(b"\x07") {
                warn!("Failed to ring terminal bell: {}", e);
                return;
            }
        }
        let _ = stdout.flush();
    }

    fn stop_all(&mut self) {}
}

/// Runs the game in the current terminal until the player quits
pub fn run(game: &GameConfig, font: TextFont) -> Result<(), HostError> {
    let _guard = TerminalGuard::new()?;

    let size = terminal::size()?;
    info!("Terminal host started at {}x{} cells", size.0, size.1);

    let screen = TerminalScreen::new(FrameRenderer::new(font), io::stdout(), size)?;
    let mut controller = BingoController::new(game, &mut rand::thread_rng(), screen, TerminalBell);

    loop {
        match event::read()? {
            Event::Key(key) => match HostInput::from_key_event(&key) {
                Some(HostInput::Press(button)) => {
                    debug!("Button {:?}", button);
                    controller.handle_button(button);
                }
                Some(HostInput::Quit) => {
                    info!("Quit requested");
                    break;
                }
                None => {}
            },
            Event::Resize(cols, rows) => controller.screen_mut().resize(cols, rows),
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::start_frame;
    use crate::ui::PaletteColor;

    #[test]
    fn large_terminal_uses_full_resolution() {
        let grid = CellGrid::fit(200, 80);
        assert_eq!(grid.step, 1);
        assert_eq!(grid.cols, 160);
        assert_eq!(grid.rows, 60);
        assert_eq!(grid.left, 20);
    }

    #[test]
    fn small_terminal_is_downsampled() {
        let grid = CellGrid::fit(80, 24);
        assert_eq!(grid.step, 3);
        assert_eq!(grid.cols, 53);
        assert_eq!(grid.rows, 20);
        assert!(grid.rows <= 24);
    }

    #[test]
    fn tiny_terminal_still_fits() {
        let grid = CellGrid::fit(1, 1);
        assert!(grid.cols <= 1);
        assert!(grid.rows <= 1);
    }

    #[test]
    fn sampling_reads_background() {
        let mut screen = TerminalScreen::new(FrameRenderer::default(), Vec::new(), (160, 60)).unwrap();
        screen.show(&start_frame());

        let grid = CellGrid::fit(160, 60);
        let (top, bottom) = grid.sample(screen.canvas(), 0, 0);
        assert_eq!(top, PaletteColor::ORANGE.rgb());
        assert_eq!(bottom, PaletteColor::ORANGE.rgb());
    }

    #[test]
    fn show_writes_half_blocks() {
        let mut screen = TerminalScreen::new(FrameRenderer::default(), Vec::new(), (160, 60)).unwrap();
        screen.show(&start_frame());

        let output = String::from_utf8(screen.out.clone()).unwrap();
        assert_eq!(output.matches(UPPER_HALF_BLOCK).count(), 160 * 60);
    }
}
