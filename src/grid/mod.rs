//! Grid storage: edge sets, boxes, and the board that holds them.

pub mod edges;
pub mod grid_box;
pub mod board;

pub use edges::{EdgeSet, Edges};
pub use grid_box::GridBox;
pub use board::Board;
