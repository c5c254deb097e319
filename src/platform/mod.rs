//! Platform hosts
//!
//! A host owns the event loop, turns key presses into button presses and
//! presents rendered frames. The terminal host works everywhere; the
//! window host is Win32 only.

pub mod terminal;
#[cfg(windows)]
pub mod window;

use thiserror::Error;
use tracing::info;

use crate::config::{GameConfig, HostKind, Settings};
use crate::ui::{RendererError, TextFont};

/// Host errors
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Renderer setup failed: {0}")]
    Renderer(#[from] RendererError),

    #[error("Failed to register window class")]
    WindowClassRegistrationFailed,

    #[error("Failed to create game window")]
    WindowCreationFailed,

    #[error("The window host is only available on Windows")]
    WindowUnsupported,
}

/// Runs the game on the host selected by `settings` until the player quits
pub fn run(settings: &Settings) -> Result<(), HostError> {
    let game = settings.variant.config();
    let font = TextFont::from_settings(settings.display.font.as_deref())?;
    let host = settings.display.host.resolve();

    info!("Starting {:?} host with {:?} variant", host, settings.variant);

    match host {
        HostKind::Window => run_window(&game, font, settings.display.scale),
        _ => terminal::run(&game, font),
    }
}

#[cfg(windows)]
fn run_window(game: &GameConfig, font: TextFont, scale: u32) -> Result<(), HostError> {
    window::run(game, font, scale)
}

#[cfg(not(windows))]
fn run_window(_game: &GameConfig, _font: TextFont, _scale: u32) -> Result<(), HostError> {
    Err(HostError::WindowUnsupported)
}
