use std::fmt::{self, Debug, Formatter};
use std::iter::FromIterator;
use std::slice;

use crate::data::Square;

/// Set of squares kept sorted at all times.
///
/// Sorted storage gives a canonical form, so two sets are equal exactly when
/// their contents are, and iteration order (which scoring and hashing depend on)
/// doesn't depend on insertion order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(Vec<Square>);

impl SquareSet {
    pub fn new() -> Self {
        SquareSet(Vec::new())
    }

    /// Inserts `square` unless it's already present.
    pub fn add(&mut self, square: Square) {
        if let Err(index) = self.0.binary_search(&square) {
            self.0.insert(index, square);
        }
    }

    pub fn contains(&self, square: Square) -> bool {
        self.0.binary_search(&square).is_ok()
    }

    /// Moves `old` to `new`. Returns false and leaves the set untouched if `old` isn't present.
    pub fn replace(&mut self, old: Square, new: Square) -> bool {
        match self.0.binary_search(&old) {
            Ok(index) => {
                self.0.remove(index);
                self.add(new);
                true
            }
            Err(_) => false,
        }
    }

    /// True if every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &SquareSet) -> bool {
        self.0.iter().all(|&sq| other.contains(sq))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Square> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut squares: Vec<_> = iter.into_iter().collect();
        squares.sort();
        squares.dedup();
        SquareSet(squares)
    }
}

impl<'a> IntoIterator for &'a SquareSet {
    type Item = &'a Square;
    type IntoIter = slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Debug for SquareSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
