//! The two sides of a Reversi game.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Side {
    Black,
    White,
}

impl Default for Side {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "expected \"black\" or \"white\"")]
pub struct ParseSideError;

impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Side::Black),
            "white" | "w" | "o" => Ok(Side::White),
            _ => Err(ParseSideError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_swaps_sides() {
        assert_eq!(!Side::Black, Side::White);
        assert_eq!(!!Side::White, Side::White);
    }

    #[test]
    fn parse_side() {
        assert_eq!("Black".parse(), Ok(Side::Black));
        assert_eq!("w".parse(), Ok(Side::White));
        assert_eq!("grey".parse::<Side>(), Err(ParseSideError));
    }
}
