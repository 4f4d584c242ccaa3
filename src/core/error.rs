//! Error types for the rules engine.
//!
//! Every precondition violation is reported as a `GameError`. Errors fall
//! into two kinds (see `ErrorKind`): calling into an engine that was never
//! initialized, and passing an argument the engine cannot accept.
//!
//! Drawing an edge that is already drawn is not an error; the engine
//! reports it by returning `false`.

use thiserror::Error;

use super::coordinate::Coordinate;

/// Broad classification of a `GameError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The engine is not in a state that allows the operation.
    InvalidState,
    /// An argument is outside the range the engine accepts.
    InvalidArgument,
}

/// Errors returned by the rules engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("grid is not initialized")]
    NotInitialized,

    #[error("coordinate {coord} is outside the {size}x{size} grid")]
    OutOfBounds { coord: Coordinate, size: usize },

    #[error("direction is missing")]
    MissingDirection,

    #[error("unrecognized direction `{0}`")]
    UnknownDirection(String),

    #[error("grid size {0} is less than 2")]
    InvalidSize(usize),
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotInitialized => ErrorKind::InvalidState,
            GameError::OutOfBounds { .. }
            | GameError::MissingDirection
            | GameError::UnknownDirection(_)
            | GameError::InvalidSize(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
