//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A list of locations on the Othello board, which can be iterated to retrieve them.
/// Iteration yields locations in increasing square index (a1, b1, ..., h8).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a one-hot [`Bitboard`].
    #[inline]
    pub fn from_onehot(bitboard: Bitboard) -> Self {
        assert_eq!(bitboard.count_occupied(), 1);
        Self::from_onehot_unchecked(bitboard)
    }

    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` does not have exactly one location set.
    #[inline]
    pub fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from a row-major square index: 0 for a1, 63 for h8.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < 64);
        Self(Bitboard::from(1u64 << index))
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.trailing_zeros() as u8
    }

    /// Convert from zero-based row and column coordinates (row 0 is rank 1, column 0 is file a).
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self::from_index((row * EDGE_LENGTH + col) as u8)
    }

    /// Get the zero-based row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index() as usize;
        (index / EDGE_LENGTH, index % EDGE_LENGTH)
    }
}

/// Convert this [`Location`] into string notation ("d3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let col_str = "abcdefgh".chars().nth(col).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0.intersects(loc.into())
    }

    /// Returns whether there are no locations left in this list.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("d3", "D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_lowercase();
        let col = "abcdefgh".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if !(1..=EDGE_LENGTH).contains(&row) || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::from_coords(row - 1, col))
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move: Bitboard = (1u64 << bitboard.trailing_zeros()).into();
        self.0 ^= next_move;

        Some(Location::from_onehot_unchecked(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(0), Location(Bitboard::from(1)));
        assert_eq!(Location::from_index(63), Location(Bitboard::from(1 << 63)));
    }

    #[test]
    fn location_to_index() {
        assert_eq!(Location(Bitboard::from(1)).to_index(), 0);
        assert_eq!(Location(Bitboard::from(1 << 63)).to_index(), 63);
    }

    #[test]
    fn location_from_coords() {
        assert_eq!(Location::from_coords(0, 0), Location(Bitboard::from(1)));
        assert_eq!(
            Location::from_coords(7, 7),
            Location(Bitboard::from(1 << 63))
        );
        assert_eq!(Location::from_coords(2, 3), Location::from_index(19));
    }

    #[test]
    #[should_panic]
    fn location_from_coords_fail() {
        Location::from_coords(0, 8);
    }

    #[test]
    #[should_panic]
    fn location_from_onehot_fail() {
        Location::from_onehot(Bitboard::from(0b11));
    }

    #[test]
    fn location_to_coords() {
        assert_eq!(Location(Bitboard::from(1)).to_coords(), (0, 0));
        assert_eq!(Location(Bitboard::from(1 << 63)).to_coords(), (7, 7));
        assert_eq!(Location::from_index(44).to_coords(), (5, 4));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("a1"), Ok(Location(Bitboard::from(1))));
        assert_eq!(
            Location::from_str("H8"),
            Ok(Location(Bitboard::from(1 << 63)))
        );
        assert_eq!(Location::from_str("d3"), Ok(Location::from_index(19)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("a12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("aa"), Err(ParseLocationError));
        assert_eq!(Location::from_str("a9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("a0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("i5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(Bitboard::from(1)).to_string(), "a1");
        assert_eq!(Location(Bitboard::from(1 << 63)).to_string(), "h8");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "e2");
        assert_eq!(Location::from_str("f6").unwrap().to_string(), "f6");
    }

    #[test]
    fn location_list_iterates_in_index_order() {
        let list = LocationList::from(Bitboard::from((1u64 << 44) | (1 << 19) | (1 << 37)));
        assert_eq!(list.len(), 3);
        assert!(list.contains(Location::from_index(37)));
        assert!(!list.contains(Location::from_index(36)));

        let indices: Vec<u8> = list.map(Location::to_index).collect();
        assert_eq!(indices, vec![19, 37, 44]);
        assert_eq!(list.to_string(), "[d3, f5, e6]");
    }
}
