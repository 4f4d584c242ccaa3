//! Set of drawn edges around a single box.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// A set of `Direction`s, stored as a 4-bit mask.
///
/// `EdgeSet` is `Copy`: every value handed out is an independent snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeSet(u8);

impl EdgeSet {
    /// The set with no edges.
    pub const EMPTY: EdgeSet = EdgeSet(0);

    /// The set with all four edges.
    pub const FULL: EdgeSet = EdgeSet(0b1111);

    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Check whether `dir` is in the set.
    #[must_use]
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Add `dir`. Returns `true` if it was not already present.
    pub fn insert(&mut self, dir: Direction) -> bool {
        let added = !self.contains(dir);
        self.0 |= dir.bit();
        added
    }

    /// Number of edges in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// All four sides are drawn.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL.0
    }

    /// Iterate over the directions in the set, in `Direction::ALL` order.
    #[must_use]
    pub fn iter(self) -> Edges {
        Edges { set: self, next: 0 }
    }
}

impl FromIterator<Direction> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        for dir in iter {
            set.insert(dir);
        }
        set
    }
}

impl IntoIterator for EdgeSet {
    type Item = Direction;
    type IntoIter = Edges;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the directions in an `EdgeSet`.
#[derive(Clone, Debug)]
pub struct Edges {
    set: EdgeSet,
    next: usize,
}

impl Iterator for Edges {
    type Item = Direction;

    fn next(&mut self) -> Option<Direction> {
        while let Some(&dir) = Direction::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(dir) {
                return Some(dir);
            }
        }
        None
    }
}
