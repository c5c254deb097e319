//! Closed numeric ranges
//!
//! Every range in the game is a closed interval of drawable numbers. Ranges
//! are compiled in, so an inverted range is a programming error rather than
//! a recoverable one.

/// A single bingo number
pub type Number = u32;

/// Closed interval `[min, max]` of numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    min: Number,
    max: Number,
}

impl NumberRange {
    /// Creates a new range
    ///
    /// # Panics
    /// If `min > max`
    pub const fn new(min: Number, max: Number) -> Self {
        assert!(min <= max, "number range must satisfy min <= max");
        Self { min, max }
    }

    /// Lowest number in the range
    pub fn min(&self) -> Number {
        self.min
    }

    /// Highest number in the range
    pub fn max(&self) -> Number {
        self.max
    }

    /// Number of integers in the range (never zero)
    pub fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    /// Returns true if `n` lies inside the range
    pub fn contains(&self, n: Number) -> bool {
        n >= self.min && n <= self.max
    }

    /// Position of `n` relative to `min`, or None if outside the range
    pub fn offset_of(&self, n: Number) -> Option<usize> {
        self.contains(n).then(|| (n - self.min) as usize)
    }

    /// Returns the overlap of two ranges, or None if they are disjoint
    pub fn intersection(&self, other: &NumberRange) -> Option<NumberRange> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);

        if min <= max {
            Some(NumberRange { min, max })
        } else {
            None
        }
    }

    /// Iterates over every number in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Number> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_basic_properties() {
        let range = NumberRange::new(1, 90);
        assert_eq!(range.min(), 1);
        assert_eq!(range.max(), 90);
        assert_eq!(range.len(), 90);
        assert!(range.contains(1));
        assert!(range.contains(90));
        assert!(!range.contains(0));
        assert!(!range.contains(91));
    }

    #[test]
    fn single_number_range() {
        let range = NumberRange::new(7, 7);
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn offsets_are_relative_to_min() {
        let range = NumberRange::new(0, 100);
        assert_eq!(range.offset_of(0), Some(0));
        assert_eq!(range.offset_of(100), Some(100));
        assert_eq!(range.offset_of(101), None);

        let range = NumberRange::new(1, 90);
        assert_eq!(range.offset_of(1), Some(0));
        assert_eq!(range.offset_of(0), None);
    }

    #[test]
    fn range_intersection() {
        let wide = NumberRange::new(0, 100);
        let grid = NumberRange::new(1, 90);
        assert_eq!(wide.intersection(&grid), Some(NumberRange::new(1, 90)));

        let low = NumberRange::new(1, 10);
        let high = NumberRange::new(20, 30);
        assert!(low.intersection(&high).is_none());
    }

    #[test]
    #[should_panic]
    fn inverted_range_panics() {
        let _ = NumberRange::new(10, 1);
    }
}
