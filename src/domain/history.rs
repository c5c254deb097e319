//! Rolling window of recently drawn numbers

use std::collections::VecDeque;

use crate::domain::range::Number;

/// The last `capacity` numbers pushed, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    capacity: usize,
    entries: VecDeque<Number>,
}

impl History {
    /// Creates an empty history holding at most `capacity` numbers
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Appends `n`, evicting the oldest entry once over capacity
    pub fn push(&mut self, n: Number) {
        self.entries.push_back(n);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.entries.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Number> {
        self.iter().collect()
    }

    /// Entries joined with ", ", oldest first
    pub fn joined(&self) -> String {
        self.iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first() {
        let mut history = History::new(3);
        for n in [7, 42, 3, 88] {
            history.push(n);
        }
        assert_eq!(history.to_vec(), vec![42, 3, 88]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn joined_is_comma_separated() {
        let mut history = History::new(5);
        assert_eq!(history.joined(), "");
        history.push(12);
        assert_eq!(history.joined(), "12");
        history.push(4);
        history.push(90);
        assert_eq!(history.joined(), "12, 4, 90");
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = History::new(0);
        history.push(1);
        assert!(history.is_empty());
    }
}
