//! Dots and Boxes on an N×N grid of unit boxes.
//!
//! - Player One opens (configurable through `GameConfig`)
//! - On your turn: draw one undrawn edge
//! - Close a box (or two) with that edge: you own it and move again
//! - Otherwise the turn passes to your opponent
//! - Game ends when every box is owned; most boxes wins

mod game;

pub use game::{GameEngine, MoveOutcome};
