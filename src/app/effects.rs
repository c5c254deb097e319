//! Output collaborators
//!
//! The controller only ever pushes to these; nothing is read back and no
//! failure is reported to it. Hosts log their own errors.

use crate::ui::layout::Frame;

/// Sound cues the game plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A new number was drawn
    Draw,
    /// Draw pressed after every number was used
    Exhausted,
}

/// Displays complete frames
pub trait Screen {
    /// Replaces the visible canvas with `frame`
    fn show(&mut self, frame: &Frame);
}

/// Plays sound cues
pub trait Audio {
    fn play(&mut self, cue: Cue);

    /// Silences anything still playing
    fn stop_all(&mut self);
}
