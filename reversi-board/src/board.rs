//! The authoritative Reversi game state and its in-place dynamics.
//!
//! A [`Board`] is two disjoint colour bitboards and nothing else: there is no
//! move history. Search code undoes a placement by replaying the flip mask it
//! got back from [`Board::flip`], which keeps backtracking allocation-free.

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::location::{Location, LocationList};
use crate::side::Side;
use crate::{utils, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// A pair of colour bitboards storing the complete game state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Gets the standard four-stone starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Construct the standard starting position.
    pub const fn new() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// Construct an arbitrary position from colour masks.
    /// The masks must not overlap.
    pub fn from_masks(black: Bitboard, white: Bitboard) -> Self {
        debug_assert!(!black.intersects(white), "colour masks overlap");
        Self { black, white }
    }

    #[inline]
    fn masks(&self, side: Side) -> (Bitboard, Bitboard) {
        match side {
            Side::Black => (self.black, self.white),
            Side::White => (self.white, self.black),
        }
    }

    #[inline]
    fn masks_mut(&mut self, side: Side) -> (&mut Bitboard, &mut Bitboard) {
        match side {
            Side::Black => (&mut self.black, &mut self.white),
            Side::White => (&mut self.white, &mut self.black),
        }
    }

    /// Mark the squares in `mask` as occupied by `side`.
    /// The squares must be empty; this is not checked.
    #[inline]
    pub fn set(&mut self, mask: Bitboard, side: Side) {
        let (mine, _) = self.masks_mut(side);
        *mine |= mask;
    }

    /// Capture every opposing run closed by the stone `side` just placed at `mask`,
    /// returning the flipped squares. `mask` must be one-hot.
    #[inline]
    pub fn flip(&mut self, mask: Bitboard, side: Side) -> Bitboard {
        let (mine, others) = self.masks_mut(side);
        let flips = bitboard::get_flip_mask(mask, *mine, *others);

        *mine |= flips;
        *others ^= flips;

        flips
    }

    /// Exact inverse of [`Board::flip`]: hand `flipped` back from `side` to its opponent.
    /// `side` and `flipped` must come from the matching `flip` call.
    #[inline]
    pub fn undo(&mut self, flipped: Bitboard, side: Side) {
        let (mine, others) = self.masks_mut(side);
        *mine &= !flipped;
        *others |= flipped;
    }

    /// Clear `mask` from both sides.
    #[inline]
    pub fn set_empty(&mut self, mask: Bitboard) {
        self.black &= !mask;
        self.white &= !mask;
    }

    /// Place a stone for `side` at `loc` and apply its flips, returning the flip mask.
    /// `loc` must be a legal move for `side`.
    #[inline]
    pub fn place(&mut self, loc: Location, side: Side) -> Bitboard {
        let mask = loc.into();
        self.set(mask, side);
        self.flip(mask, side)
    }

    /// Take back a [`Board::place`], given the flip mask it returned.
    #[inline]
    pub fn retract(&mut self, loc: Location, flipped: Bitboard, side: Side) {
        self.set_empty(loc.into());
        self.undo(flipped, side);
    }

    /// Count the stones of each side: (black, white).
    #[inline]
    pub fn count_stones(&self) -> (u8, u8) {
        (self.black.count_occupied(), self.white.count_occupied())
    }

    /// Count the legal moves of each side: (black, white).
    #[inline]
    pub fn count_legal_moves(&self) -> (u8, u8) {
        (
            self.legal_moves(Side::Black).len() as u8,
            self.legal_moves(Side::White).len() as u8,
        )
    }

    /// Get a mask of every occupied square.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Get a mask of every empty square.
    #[inline]
    pub fn empties(&self) -> Bitboard {
        !self.occupied()
    }

    /// Get the legal moves for `side`.
    #[inline]
    pub fn legal_moves(&self, side: Side) -> LocationList {
        let (mine, others) = self.masks(side);
        bitboard::get_move_mask(mine, others).into()
    }

    /// Flood from `origin` through orthogonally-connected `others` stones.
    #[inline]
    pub fn cross_floods(&self, origin: Bitboard, others: Bitboard) -> Bitboard {
        bitboard::get_cross_floods(origin, others)
    }

    /// Get the colour masks: (black, white).
    #[inline]
    pub fn field_data(&self) -> (Bitboard, Bitboard) {
        (self.black, self.white)
    }

    /// Restore the starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Copy the state of `other` into this board.
    pub fn overwrite(&mut self, other: &Board) {
        self.black = other.black;
        self.white = other.white;
    }

    /// Whether the game is over: the board is full or neither side can move.
    pub fn is_finished(&self) -> bool {
        self.occupied() == Bitboard::FULL
            || (self.legal_moves(Side::Black).is_empty() && self.legal_moves(Side::White).is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.black
                .into_iter()
                .zip(self.white)
                .map(|square| match square {
                    (true, false) => 'X',
                    (false, true) => 'O',
                    _ => '.',
                }),
            f,
        )
    }
}

/// A [`Board`] drawn for a human: `+` on legal moves, `*` on the last placement.
pub struct AnnotatedBoard<'a> {
    board: &'a Board,
    legal_moves: Bitboard,
    last_move: Bitboard,
}

impl Board {
    pub fn annotated(&self, legal_moves: LocationList, last_move: Option<Location>) -> AnnotatedBoard<'_> {
        AnnotatedBoard {
            board: self,
            legal_moves: legal_moves.into(),
            last_move: last_move.map_or(Bitboard::EMPTY, Bitboard::from),
        }
    }
}

impl fmt::Display for AnnotatedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks = self.legal_moves.into_iter().zip(self.last_move);

        utils::format_grid(
            self.board
                .black
                .into_iter()
                .zip(self.board.white)
                .zip(marks)
                .map(|square| match square {
                    (_, (_, true)) => '*',
                    ((true, false), _) => 'X',
                    ((false, true), _) => 'O',
                    (_, (true, _)) => '+',
                    _ => '.',
                }),
            f,
        )
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} squares, found {}", NUM_SPACES, _0)]
    WrongLength(#[error(not(source))] usize),
    #[display(fmt = "invalid square {:?}", _0)]
    InvalidSquare(#[error(not(source))] char),
}

/// Parse a board from 64 squares in row-major order from a1:
/// `X` for black, `O` for white, `-` or `.` for empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(squares.len()));
        }

        let mut black = 0u64;
        let mut white = 0u64;
        for (index, square) in squares.into_iter().enumerate() {
            match square {
                'X' | 'x' => black |= 1 << index,
                'O' | 'o' => white |= 1 << index,
                '-' | '.' => {}
                other => return Err(ParseBoardError::InvalidSquare(other)),
            }
        }

        Ok(Self::from_masks(black.into(), white.into()))
    }
}
