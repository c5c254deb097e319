//! Configuration module for bingo-caller
//!
//! Game variants are compiled in. The settings file only selects one of
//! them and carries the ambient options (logging, display host, font).

pub mod game;
pub mod settings;

pub use game::{GameConfig, Variant};
pub use settings::{DisplaySettings, HostKind, LogLevel, LogSettings, Settings, SettingsError};
