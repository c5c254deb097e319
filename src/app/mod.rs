//! Application orchestration layer
//!
//! This module ties the draw engine to the screens and sound cues. It owns
//! the view-mode state machine and the two button handlers.

pub mod controller;
pub mod effects;
pub mod state;

pub use controller::BingoController;
pub use effects::{Audio, Cue, Screen};
pub use state::{StateEvent, StateMachine, ViewMode};
