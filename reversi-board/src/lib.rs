//! `reversi-board` is a compact Reversi/Othello rules library built for search engines.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked shift-and-mask sweeps over [`Bitboard`]s.
//!    These are branchless, but trust their callers to pass well-formed masks.
//!  - [`Board`] holds the two colour bitboards of a game and exposes in-place
//!    placement, flipping and undo, so a search can walk the game tree without copying.
//!
//! [`Location`] and [`LocationList`] give a typed view of one-hot move masks
//! and legal-move masks respectively.

pub mod bitboard;
pub mod test_utils;

mod board;
mod location;
mod side;
mod utils;

pub use bitboard::Bitboard;
pub use board::*;
pub use location::*;
pub use side::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
