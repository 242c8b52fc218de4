//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] sweeps are unchecked and produce meaningless
//! masks if overlapping or multi-bit inputs are passed where one-hot masks are expected.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! bit 0 is a1, bit 7 is h1 and bit 63 is h8 (row-major from the first row).

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: d5 and e4.
pub const BLACK_START: Bitboard = Bitboard(0x0000_0008_1000_0000);

/// Starting bitboard for White: d4 and e5.
pub const WHITE_START: Bitboard = Bitboard(0x0000_0010_0800_0000);

// Opponent runs may never include these edges, or a sweep would wrap around the board.
const NOT_EDGE_COLUMNS: u64 = 0x7E7E_7E7E_7E7E_7E7E;
const NOT_EDGE_ROWS: u64 = 0x00FF_FFFF_FFFF_FF00;
const NOT_EDGE: u64 = NOT_EDGE_COLUMNS & NOT_EDGE_ROWS;

/// Axis families swept by every generator: (shift step, legal run mask).
/// Horizontal, vertical, and the two diagonals; each is swept in both directions.
const AXES: [(u32, u64); 4] = [
    (1, NOT_EDGE_COLUMNS),
    (8, NOT_EDGE_ROWS),
    (7, NOT_EDGE),
    (9, NOT_EDGE),
];

/// Longest possible run of flanked stones on one line.
const MAX_RUN: usize = 6;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(u64::MAX);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if every location set in `other` is also set here.
    #[inline]
    pub fn contains(self, other: Bitboard) -> bool {
        self.0 & other.0 == other.0
    }

    /// Return true if the bitboards share at least one location.
    #[inline]
    pub fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }
}

#[inline]
fn smear_forward(seed: u64, run: u64, step: u32) -> u64 {
    let mut smear = run & (seed << step);
    for _ in 1..MAX_RUN {
        smear |= run & (smear << step);
    }
    smear
}

#[inline]
fn smear_backward(seed: u64, run: u64, step: u32) -> u64 {
    let mut smear = run & (seed >> step);
    for _ in 1..MAX_RUN {
        smear |= run & (smear >> step);
    }
    smear
}

/// All ones if `bounded` is non-zero, else all zeros.
#[inline]
fn capture_gate(bounded: u64) -> u64 {
    ((bounded != 0) as u64).wrapping_neg()
}

/// Compute a mask of the legal moves for the player owning `mine`.
/// Undefined behavior if `mine` and `others` overlap.
#[inline]
pub fn get_move_mask(mine: Bitboard, others: Bitboard) -> Bitboard {
    let empties = !(mine.0 | others.0);
    let mut moves = 0;

    // Smear our stones through opponent runs; one more step past a run is a candidate.
    for &(step, edge) in AXES.iter() {
        let run = others.0 & edge;
        moves |= smear_forward(mine.0, run, step) << step;
        moves |= smear_backward(mine.0, run, step) >> step;
    }

    Bitboard(moves & empties)
}

/// Compute the stones captured when the owner of `mine` places at `placed`.
/// `placed` must be one-hot and empty; the boards themselves are left untouched.
#[inline]
pub fn get_flip_mask(placed: Bitboard, mine: Bitboard, others: Bitboard) -> Bitboard {
    let mut flips = 0;

    // A run only flips if the square just past it holds one of our stones.
    for &(step, edge) in AXES.iter() {
        let run = others.0 & edge;

        let forward = smear_forward(placed.0, run, step);
        flips |= forward & capture_gate(mine.0 & (forward << step));

        let backward = smear_backward(placed.0, run, step);
        flips |= backward & capture_gate(mine.0 & (backward >> step));
    }

    Bitboard(flips)
}

/// Flood from `origin` through contiguous `others` stones along the four
/// orthogonal directions. The origin itself is not included.
#[inline]
pub fn get_cross_floods(origin: Bitboard, others: Bitboard) -> Bitboard {
    let vertical = others.0 & NOT_EDGE_ROWS;
    let horizontal = others.0 & NOT_EDGE_COLUMNS;

    Bitboard(
        smear_forward(origin.0, vertical, 8)
            | smear_backward(origin.0, vertical, 8)
            | smear_forward(origin.0, horizontal, 1)
            | smear_backward(origin.0, horizontal, 1),
    )
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    index: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.0 & (1u64 << self.index) != 0;
        self.index += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order, starting from a1.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            index: 0,
            bitboard: self,
        }
    }
}
