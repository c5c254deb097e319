//! Draw engine
//!
//! Owns the shuffled sequence, the cursor into it, the shown flags and the
//! history. The engine has no notion of views; callers decide when a draw
//! is allowed.

use crate::domain::history::History;
use crate::domain::range::{Number, NumberRange};
use crate::domain::sequence::{DrawSequence, RandomSource};
use crate::domain::shown::ShownSet;

/// Result of a draw attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A new number became current
    Drawn(Number),
    /// Every number has already been drawn; nothing changed
    Exhausted,
}

/// Draw state for one session
///
/// Invariants:
/// - `cursor <= sequence.len()` and only grows
/// - `shown` contains exactly the first `cursor` numbers of `sequence`
/// - `current` is `sequence[cursor - 1]` once `cursor > 0`
/// - `history` holds the numbers drawn just before `current`
#[derive(Debug, Clone)]
pub struct DrawEngine {
    sequence: DrawSequence,
    cursor: usize,
    shown: ShownSet,
    history: History,
    current: Option<Number>,
}

impl DrawEngine {
    /// Shuffles `range` and returns an engine with nothing drawn yet
    pub fn new<R: RandomSource + ?Sized>(
        range: NumberRange,
        history_len: usize,
        rng: &mut R,
    ) -> Self {
        Self::with_sequence(DrawSequence::shuffled(range, rng), history_len)
    }

    /// Uses an existing sequence as the draw order
    pub fn with_sequence(sequence: DrawSequence, history_len: usize) -> Self {
        Self {
            shown: ShownSet::new(sequence.range()),
            sequence,
            cursor: 0,
            history: History::new(history_len),
            current: None,
        }
    }

    /// Advances the cursor and makes the next number current
    pub fn draw(&mut self) -> DrawOutcome {
        let Some(next) = self.sequence.get(self.cursor) else {
            return DrawOutcome::Exhausted;
        };

        if let Some(previous) = self.current {
            self.history.push(previous);
        }

        self.current = Some(next);
        self.cursor += 1;
        self.shown.mark(next);

        DrawOutcome::Drawn(next)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.sequence.len()
    }

    /// Numbers drawn so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Numbers still waiting to be drawn
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.cursor
    }

    /// The most recent draw, or None before the first one
    pub fn current(&self) -> Option<Number> {
        self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn shown(&self) -> &ShownSet {
        &self.shown
    }

    pub fn sequence(&self) -> &DrawSequence {
        &self.sequence
    }

    pub fn range(&self) -> NumberRange {
        self.sequence.range()
    }
}
