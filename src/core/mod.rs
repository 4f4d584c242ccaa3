//! Core value types: players, directions, coordinates, configuration, errors.
//!
//! These are the small building blocks the grid and the rules engine are
//! written against.

pub mod player;
pub mod direction;
pub mod coordinate;
pub mod config;
pub mod error;

pub use player::{Player, PlayerMap};
pub use direction::Direction;
pub use coordinate::Coordinate;
pub use config::{GameConfig, MIN_GRID_SIZE};
pub use error::{ErrorKind, GameError, Result};
