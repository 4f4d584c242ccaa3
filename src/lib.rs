//! # dots-and-boxes
//!
//! Rules engine for the two-player pencil-and-paper game Dots and Boxes.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules Core**: No rendering, networking or persistence. The
//!    engine tracks drawn edges, box ownership, turn order and scores.
//!
//! 2. **Explicit Errors**: Every precondition violation is a `GameError`
//!    returned to the caller. Redrawing an edge is a rejected move
//!    (`Ok(false)`), not an error.
//!
//! 3. **Owned State**: One `GameEngine` per game, mutated through `&mut self`.
//!    Callers sharing an engine across threads serialize access themselves.
//!
//! ## Modules
//!
//! - `core`: Players, directions, coordinates, configuration, errors
//! - `grid`: Edge sets, boxes, and the board that holds them
//! - `rules`: `DotsAndBoxes` trait and `GameResult`
//! - `games`: `GameEngine`, the Dots and Boxes implementation

pub mod core;
pub mod grid;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Coordinate, Direction, ErrorKind, GameConfig, GameError, Player, PlayerMap, Result,
};

pub use crate::grid::{Board, EdgeSet, GridBox};

pub use crate::rules::{DotsAndBoxes, GameResult};

pub use crate::games::dots_and_boxes::{GameEngine, MoveOutcome};
