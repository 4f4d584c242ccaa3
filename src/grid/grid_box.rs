//! A single box on the grid.

use serde::{Deserialize, Serialize};

use super::edges::EdgeSet;
use crate::core::{Direction, Player};

/// One unit box: its drawn edges and, once all four are drawn, its owner.
///
/// ## Invariant
///
/// `owner()` is `Some` exactly when all four edges are drawn. The owner is
/// the player who drew the completing edge and never changes afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBox {
    owner: Option<Player>,
    drawn_edges: EdgeSet,
}

impl GridBox {
    /// Create an empty, unowned box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Player who completed this box, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// Snapshot of the drawn edges.
    #[must_use]
    pub fn drawn_edges(&self) -> EdgeSet {
        self.drawn_edges
    }

    #[must_use]
    pub fn is_drawn_edge_at(&self, dir: Direction) -> bool {
        self.drawn_edges.contains(dir)
    }

    /// All four edges are drawn.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.drawn_edges.is_full()
    }

    /// Draw the edge at `dir` on behalf of `player`.
    ///
    /// Drawing an edge that is already present changes nothing. If this
    /// call draws the fourth edge, `player` becomes the owner and `true`
    /// is returned.
    pub fn draw_edge(&mut self, dir: Direction, player: Player) -> bool {
        if !self.drawn_edges.insert(dir) {
            return false;
        }

        if self.drawn_edges.is_full() && self.owner.is_none() {
            self.owner = Some(player);
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_box_is_empty() {
        let b = GridBox::new();
        assert_eq!(b.owner(), None);
        assert!(b.drawn_edges().is_empty());
        assert!(!b.is_complete());
    }

    #[test]
    fn test_draw_edge() {
        let mut b = GridBox::new();
        assert!(!b.draw_edge(Direction::Top, Player::One));

        assert!(b.is_drawn_edge_at(Direction::Top));
        assert!(!b.is_drawn_edge_at(Direction::Bottom));
        assert_eq!(b.owner(), None);
    }

    #[test]
    fn test_fourth_edge_sets_owner() {
        let mut b = GridBox::new();
        b.draw_edge(Direction::Top, Player::One);
        b.draw_edge(Direction::Bottom, Player::Two);
        b.draw_edge(Direction::Left, Player::One);
        assert_eq!(b.owner(), None);

        assert!(b.draw_edge(Direction::Right, Player::Two));
        assert!(b.is_complete());
        assert_eq!(b.owner(), Some(Player::Two));
    }

    #[test]
    fn test_owner_never_changes() {
        let mut b = GridBox::new();
        for dir in Direction::ALL {
            b.draw_edge(dir, Player::One);
        }
        assert_eq!(b.owner(), Some(Player::One));

        assert!(!b.draw_edge(Direction::Left, Player::Two));
        assert_eq!(b.owner(), Some(Player::One));
        assert_eq!(b.drawn_edges().len(), 4);
    }

    #[test]
    fn test_redraw_is_noop() {
        let mut b = GridBox::new();
        b.draw_edge(Direction::Left, Player::One);
        let before = b.clone();

        b.draw_edge(Direction::Left, Player::Two);
        assert_eq!(b, before);
    }

    #[test]
    fn test_drawn_edges_is_a_copy() {
        let mut b = GridBox::new();
        b.draw_edge(Direction::Left, Player::One);

        let mut snapshot = b.drawn_edges();
        snapshot.insert(Direction::Right);
        assert_eq!(snapshot.len(), 2);

        assert!(b.is_drawn_edge_at(Direction::Left));
        assert!(!b.is_drawn_edge_at(Direction::Right));
    }
}
