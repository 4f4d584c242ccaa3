//! Box positions on the grid.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Position of a box in the grid, 0-indexed.
///
/// `x` grows to the right and `y` grows downward, so the box below
/// `(x, y)` is `(x, y + 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Get the coordinate one unit away in `dir`.
    ///
    /// Returns `None` when the step would go below zero. Whether the
    /// result lies inside a particular grid is up to the caller.
    ///
    /// ```
    /// use dots_and_boxes::core::{Coordinate, Direction};
    ///
    /// let c = Coordinate::new(1, 0);
    /// assert_eq!(c.neighbor(Direction::Right), Some(Coordinate::new(2, 0)));
    /// assert_eq!(c.neighbor(Direction::Bottom), Some(Coordinate::new(1, 1)));
    /// assert_eq!(c.neighbor(Direction::Top), None);
    /// ```
    #[must_use]
    pub fn neighbor(self, dir: Direction) -> Option<Self> {
        let Self { x, y } = self;
        match dir {
            Direction::Top => y.checked_sub(1).map(|y| Self { x, y }),
            Direction::Bottom => y.checked_add(1).map(|y| Self { x, y }),
            Direction::Left => x.checked_sub(1).map(|x| Self { x, y }),
            Direction::Right => x.checked_add(1).map(|x| Self { x, y }),
        }
    }

    /// Check whether this coordinate lies inside a `size`×`size` grid.
    #[must_use]
    pub const fn in_grid(self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
