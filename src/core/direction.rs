//! Edge directions relative to a box.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// One of the four sides of a box.
///
/// An interior edge is shared by two boxes. Seen from the neighbouring box,
/// the same edge lies in the `opposite()` direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// The same edge as seen from the neighbouring box.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Bit index used by `EdgeSet`.
    #[must_use]
    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Parse a direction from user input.
///
/// Accepts the full names and their first letters, case-insensitively.
///
/// ```
/// use dots_and_boxes::core::Direction;
///
/// assert_eq!("Top".parse::<Direction>().unwrap(), Direction::Top);
/// assert_eq!("r".parse::<Direction>().unwrap(), Direction::Right);
/// assert!("".parse::<Direction>().is_err());
/// ```
impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GameError::MissingDirection);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "top" | "t" => Ok(Direction::Top),
            "bottom" | "b" => Ok(Direction::Bottom),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(GameError::UnknownDirection(trimmed.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| GameError::UnknownDirection(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::Top.opposite(), Direction::Bottom);
        assert_eq!(Direction::Bottom.opposite(), Direction::Top);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_bits_are_distinct() {
        let mask = Direction::ALL.iter().fold(0u8, |acc, d| acc | d.bit());
        assert_eq!(mask, 0b1111);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("bottom".parse::<Direction>(), Ok(Direction::Bottom));
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" t ".parse::<Direction>(), Ok(Direction::Top));
    }

    #[test]
    fn test_parse_missing() {
        let err = "   ".parse::<Direction>().unwrap_err();
        assert_eq!(err, GameError::MissingDirection);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert_eq!(err, GameError::UnknownDirection("diagonal".to_string()));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_try_from_index() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::try_from(i as u8), Ok(*dir));
        }
        assert!(Direction::try_from(4).is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }
}
