//! The grid of boxes.
//!
//! The `Board` owns one `GridBox` per coordinate of a `size`×`size` grid.
//! It resolves coordinates to boxes and answers whole-grid questions
//! (completion, ownership counts, drawn edges). Turn order lives in the
//! engine, not here.

use rustc_hash::FxHashMap;

use super::grid_box::GridBox;
use crate::core::{Coordinate, Direction, GameError, PlayerMap, Result, MIN_GRID_SIZE};

/// All boxes of one game, keyed by coordinate.
///
/// ## Usage
///
/// ```
/// use dots_and_boxes::grid::Board;
/// use dots_and_boxes::core::{Coordinate, Direction, Player};
///
/// let mut board = Board::new(2).unwrap();
/// board
///     .fetch_mut(Coordinate::new(0, 0))
///     .unwrap()
///     .draw_edge(Direction::Top, Player::One);
///
/// assert_eq!(board.drawn_edge_total(), 1);
/// assert!(board.get(Coordinate::new(2, 0)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    boxes: FxHashMap<Coordinate, GridBox>,
}

impl Board {
    /// Create a board with an empty box at every coordinate.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_GRID_SIZE {
            return Err(GameError::InvalidSize(size));
        }

        let mut boxes = FxHashMap::default();
        boxes.reserve(size * size);
        for coord in Self::coordinates_for(size) {
            boxes.insert(coord, GridBox::new());
        }

        Ok(Self { size, boxes })
    }

    /// Grid dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of boxes on the board.
    #[must_use]
    pub fn box_count(&self) -> usize {
        self.size * self.size
    }

    /// Number of distinct edges on the board, counting shared edges once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        2 * self.size * (self.size + 1)
    }

    /// Look up a box, returning `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<&GridBox> {
        self.boxes.get(&coord)
    }

    pub fn get_mut(&mut self, coord: Coordinate) -> Option<&mut GridBox> {
        self.boxes.get_mut(&coord)
    }

    /// Look up a box, failing for coordinates outside the grid.
    pub fn fetch(&self, coord: Coordinate) -> Result<&GridBox> {
        let size = self.size;
        self.boxes
            .get(&coord)
            .ok_or(GameError::OutOfBounds { coord, size })
    }

    pub fn fetch_mut(&mut self, coord: Coordinate) -> Result<&mut GridBox> {
        let size = self.size;
        self.boxes
            .get_mut(&coord)
            .ok_or(GameError::OutOfBounds { coord, size })
    }

    /// Iterate over every coordinate, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        Self::coordinates_for(self.size)
    }

    fn coordinates_for(size: usize) -> impl Iterator<Item = Coordinate> {
        (0..size).flat_map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }

    /// Every box has all four edges drawn.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.boxes.values().all(GridBox::is_complete)
    }

    /// Count owned boxes per player.
    #[must_use]
    pub fn owned_counts(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(0);
        for owner in self.boxes.values().filter_map(GridBox::owner) {
            counts[owner] += 1;
        }
        counts
    }

    /// Number of distinct edges drawn so far.
    ///
    /// Each box counts its top and left edges; bottom and right edges are
    /// counted only along the last row and column, where no neighbour
    /// holds them as its top or left.
    #[must_use]
    pub fn drawn_edge_total(&self) -> usize {
        let last = self.size - 1;
        self.boxes
            .iter()
            .map(|(coord, b)| {
                b.drawn_edges()
                    .iter()
                    .filter(|dir| match dir {
                        Direction::Top | Direction::Left => true,
                        Direction::Bottom => coord.y == last,
                        Direction::Right => coord.x == last,
                    })
                    .count()
            })
            .sum()
    }
}
