//! Rules engine trait for Dots and Boxes implementations.
//!
//! `DotsAndBoxes` is the surface a caller (UI, test harness, bot) plays
//! against:
//! - Set up a board
//! - Draw edges
//! - Query turn, edges, owners and scores

use crate::core::{Coordinate, Direction, Player, PlayerMap, Result};
use crate::grid::EdgeSet;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One player owns more boxes.
    Winner(Player),
    /// Both players own the same number of boxes.
    Draw,
}

impl GameResult {
    /// Decide the result from final box counts.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<usize>) -> Self {
        let one = scores[Player::One];
        let two = scores[Player::Two];
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - Every method except `init` fails with `GameError::NotInitialized`
///   until `init` has succeeded.
/// - `init` may be called again at any time; it discards the previous game.
/// - `draw_edge` returns `Ok(false)` for an edge that is already drawn.
///   That is a rejected move, not an error.
/// - `current_player` returns `None` once every box is owned.
pub trait DotsAndBoxes {
    /// Start a new game on a `size`×`size` grid.
    ///
    /// Fails with `GameError::InvalidSize` when `size < 2`.
    fn init(&mut self, size: usize) -> Result<()>;

    /// Draw the edge on side `dir` of the box at `coord` for the current
    /// player.
    ///
    /// Returns `false` if that edge was already drawn. If the move completes
    /// one or two boxes the current player moves again; otherwise the turn
    /// passes to the opponent.
    fn draw_edge(&mut self, coord: Coordinate, dir: Direction) -> Result<bool>;

    /// Player to move, or `None` when the game is over.
    fn current_player(&self) -> Result<Option<Player>>;

    /// Drawn edges of the box at `coord`.
    fn drawn_edges_at(&self, coord: Coordinate) -> Result<EdgeSet>;

    /// Owner of the box at `coord`, if it is complete.
    fn owner_at(&self, coord: Coordinate) -> Result<Option<Player>>;

    /// Boxes owned by each player.
    fn scores(&self) -> Result<PlayerMap<usize>>;

    /// Grid dimension.
    fn size(&self) -> Result<usize>;

    // === Convenience Methods ===

    /// Check whether every box is owned.
    fn is_game_over(&self) -> Result<bool> {
        Ok(self.current_player()?.is_none())
    }

    /// Final result, or `None` while the game continues.
    fn result(&self) -> Result<Option<GameResult>> {
        if !self.is_game_over()? {
            return Ok(None);
        }
        Ok(Some(GameResult::from_scores(&self.scores()?)))
    }
}
