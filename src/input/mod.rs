//! Input mapping
//!
//! Hosts translate their native key events into the game's two buttons.

pub mod buttons;

pub use buttons::{Button, HostInput};
