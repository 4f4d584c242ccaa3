//! Game configuration.
//!
//! A `GameConfig` describes the board a game is played on and who opens.
//! Engines are initialized from a config; `init(size)` is shorthand for the
//! default config with a different size.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::Player;

/// Smallest playable grid dimension.
pub const MIN_GRID_SIZE: usize = 2;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid dimension. The board holds `size`×`size` boxes.
    pub size: usize,

    /// Player who draws the first edge.
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            first_player: Player::One,
        }
    }
}

impl GameConfig {
    /// Create a config for a `size`×`size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::default().with_size(size)
    }

    /// Set the grid dimension.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the opening player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Check that the config describes a playable board.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_GRID_SIZE {
            return Err(GameError::InvalidSize(self.size));
        }
        Ok(())
    }
}
