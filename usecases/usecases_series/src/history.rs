//! Convergence History Module
//!
//! Ordered, append-only record of the partial sums of one expansion run.

/// Partial sums in evaluation order, one per evaluated term
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceHistory<T> {
    entries: Vec<T>,
}

impl<T> ConvergenceHistory<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, value: T) {
        self.entries.push(value);
    }

    /// Number of recorded partial sums
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent partial sum
    pub fn last(&self) -> Option<&T> {
        self.entries.last()
    }

    /// Most recent partial sum and the one before it
    pub fn last_two(&self) -> Option<(&T, &T)> {
        match self.entries.as_slice() {
            [.., previous, current] => Some((current, previous)),
            _ => None,
        }
    }

    /// Iterate in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Partial sums as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Consume into the underlying vector
    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }
}

impl<T> IntoIterator for ConvergenceHistory<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ConvergenceHistory<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history() {
        let mut history = ConvergenceHistory::with_capacity(4);
        assert!(history.is_empty());
        assert_eq!(history.last_two(), None);

        history.push(1);
        assert_eq!(history.last(), Some(&1));
        assert_eq!(history.last_two(), None);

        history.push(2);
        history.push(3);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last_two(), Some((&3, &2)));
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(history.into_vec(), vec![1, 2, 3]);
    }
}
