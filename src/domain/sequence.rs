//! Shuffled draw order
//!
//! The draw sequence is built once per session: every number of the range in
//! ascending order, then a Fisher-Yates shuffle. It is never reshuffled.

use thiserror::Error;

use crate::domain::range::{Number, NumberRange};

/// Source of uniformly distributed integers
///
/// Only used while building the draw sequence.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in the closed range `[lo, hi]`
    fn int_in(&mut self, lo: usize, hi: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn int_in(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..=hi)
    }
}

/// Errors for explicitly supplied draw orders
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("draw order has {actual} numbers, range needs {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("number {0} is outside the draw range")]
    OutOfRange(Number),

    #[error("number {0} appears more than once")]
    Duplicate(Number),
}

/// A permutation of every number in a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSequence {
    range: NumberRange,
    order: Vec<Number>,
}

impl DrawSequence {
    /// Builds a uniformly random permutation of `range`
    pub fn shuffled<R: RandomSource + ?Sized>(range: NumberRange, rng: &mut R) -> Self {
        let mut order: Vec<Number> = range.iter().collect();

        for i in 0..order.len().saturating_sub(1) {
            let j = rng.int_in(i, order.len() - 1);
            order.swap(i, j);
        }

        Self { range, order }
    }

    /// Uses a caller-chosen order, which must be a permutation of `range`
    pub fn from_order(range: NumberRange, order: Vec<Number>) -> Result<Self, SequenceError> {
        if order.len() != range.len() {
            return Err(SequenceError::LengthMismatch {
                expected: range.len(),
                actual: order.len(),
            });
        }

        let mut seen = vec![false; range.len()];
        for &n in &order {
            let offset = range.offset_of(n).ok_or(SequenceError::OutOfRange(n))?;
            if std::mem::replace(&mut seen[offset], true) {
                return Err(SequenceError::Duplicate(n));
            }
        }

        Ok(Self { range, order })
    }

    /// The range this sequence permutes
    pub fn range(&self) -> NumberRange {
        self.range
    }

    /// Number of entries (equal to the range length)
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Number at position `index`
    pub fn get(&self, index: usize) -> Option<Number> {
        self.order.get(index).copied()
    }

    /// The full draw order
    pub fn as_slice(&self) -> &[Number] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_is_permutation(sequence: &DrawSequence, range: NumberRange) {
        let mut sorted = sequence.as_slice().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, range.iter().collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_permutation_of_range() {
        let ranges = [
            NumberRange::new(1, 90),
            NumberRange::new(1, 100),
            NumberRange::new(0, 100),
            NumberRange::new(5, 5),
            NumberRange::new(10, 11),
        ];

        for (seed, range) in ranges.into_iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let sequence = DrawSequence::shuffled(range, &mut rng);
            assert_eq!(sequence.len(), range.len());
            assert_is_permutation(&sequence, range);
        }
    }

    #[test]
    fn shuffle_is_reproducible_for_seed() {
        let range = NumberRange::new(1, 90);
        let a = DrawSequence::shuffled(range, &mut StdRng::seed_from_u64(42));
        let b = DrawSequence::shuffled(range, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_actually_reorders() {
        let range = NumberRange::new(1, 90);
        let sequence = DrawSequence::shuffled(range, &mut StdRng::seed_from_u64(7));
        let identity: Vec<Number> = range.iter().collect();
        assert_ne!(sequence.as_slice(), identity.as_slice());
    }

    #[test]
    fn permutations_are_equally_likely() {
        // 60 000 shuffles of three values: each of the six orders is expected 10 000 times.
        let range = NumberRange::new(1, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let mut counts: std::collections::HashMap<Vec<Number>, u32> = std::collections::HashMap::new();
        for _ in 0..60_000 {
            let order = DrawSequence::shuffled(range, &mut rng).as_slice().to_vec();
            *counts.entry(order).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (order, count) in &counts {
            assert!((9_500..=10_500).contains(count), "{order:?} drawn {count} times");
        }
    }

    #[test]
    fn explicit_order_is_validated() {
        let range = NumberRange::new(1, 3);
        assert!(DrawSequence::from_order(range, vec![3, 1, 2]).is_ok());
        assert_eq!(
            DrawSequence::from_order(range, vec![1, 2]),
            Err(SequenceError::LengthMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            DrawSequence::from_order(range, vec![1, 2, 4]),
            Err(SequenceError::OutOfRange(4))
        );
        assert_eq!(
            DrawSequence::from_order(range, vec![1, 2, 2]),
            Err(SequenceError::Duplicate(2))
        );
    }
}
