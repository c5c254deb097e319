//! Domain logic and core data structures
//!
//! This module contains the pure draw logic: ranges, the shuffled draw
//! sequence, shown-number bookkeeping and the rolling history. Nothing in
//! here knows about rendering, audio or input.

pub mod engine;
pub mod history;
pub mod range;
pub mod sequence;
pub mod shown;

pub use engine::{DrawEngine, DrawOutcome};
pub use history::History;
pub use range::{Number, NumberRange};
pub use sequence::{DrawSequence, RandomSource, SequenceError};
pub use shown::ShownSet;
