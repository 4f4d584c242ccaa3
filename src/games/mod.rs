//! Game implementations built on the core types and the rules trait.

pub mod dots_and_boxes;
