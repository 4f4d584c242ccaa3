//! Rules engine trait for Dots and Boxes.
//!
//! `DotsAndBoxes` defines what a game engine offers:
//! - Board setup
//! - Edge drawing with the extra-turn rule
//! - Turn, ownership and score queries
//!
//! `GameEngine` in `games::dots_and_boxes` is the implementation.

pub mod engine;

pub use engine::{DotsAndBoxes, GameResult};
