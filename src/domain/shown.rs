//! Record of every number drawn this session

use crate::domain::range::{Number, NumberRange};

/// One flag per number in the draw range; flags are only ever set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownSet {
    range: NumberRange,
    flags: Vec<bool>,
}

impl ShownSet {
    /// Creates a set with every flag cleared
    pub fn new(range: NumberRange) -> Self {
        Self {
            range,
            flags: vec![false; range.len()],
        }
    }

    /// Marks `n` as shown. Numbers outside the range are ignored.
    pub fn mark(&mut self, n: Number) {
        if let Some(offset) = self.range.offset_of(n) {
            self.flags[offset] = true;
        }
    }

    /// Returns true if `n` has been drawn
    pub fn contains(&self, n: Number) -> bool {
        self.range
            .offset_of(n)
            .is_some_and(|offset| self.flags[offset])
    }

    /// How many numbers have been shown
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&shown| shown).count()
    }

    /// Shown numbers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.range.iter().filter(|&n| self.contains(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let shown = ShownSet::new(NumberRange::new(1, 90));
        assert_eq!(shown.count(), 0);
        assert!(!shown.contains(1));
        assert!(shown.iter().next().is_none());
    }

    #[test]
    fn mark_sets_flag() {
        let mut shown = ShownSet::new(NumberRange::new(0, 100));
        shown.mark(0);
        shown.mark(95);
        shown.mark(95);
        assert!(shown.contains(0));
        assert!(shown.contains(95));
        assert!(!shown.contains(50));
        assert_eq!(shown.count(), 2);
        assert_eq!(shown.iter().collect::<Vec<_>>(), vec![0, 95]);
    }

    #[test]
    fn out_of_range_is_never_shown() {
        let mut shown = ShownSet::new(NumberRange::new(1, 90));
        shown.mark(91);
        assert!(!shown.contains(91));
        assert_eq!(shown.count(), 0);
    }
}
