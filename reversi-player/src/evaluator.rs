//! Heuristic position scoring used at the leaves of the search.

use reversi_board::{Bitboard, Board, Side, NUM_SPACES};

/// Score for eliminating every opposing stone.
pub const WIPEOUT_SCORE: i32 = 20_000_000;

/// Score for a finished game won on stone count.
pub const GAME_WIN_SCORE: i32 = 15_000;

/// Per-square positional weights, row 1 first. Corners are prized and their
/// neighbours are dangerous to occupy.
#[rustfmt::skip]
pub const SQUARE_WEIGHTS: [i32; NUM_SPACES] = [
     45, -11,  4, -1, -1,  4, -11,  45,
    -11, -16, -1, -3, -3,  2, -16, -11,
      4,  -1,  2, -1, -1,  2,  -1,   4,
     -1,  -3, -1,  0,  0, -1,  -3,  -1,
     -1,  -3, -1,  0,  0, -1,  -3,  -1,
      4,  -1,  2, -1, -1,  2,  -1,   4,
    -11, -16, -1, -3, -3,  2, -16, -11,
     45, -11,  4, -1, -1,  4, -11,  45,
];

/// a1, h1, a8, h8.
pub const CORNERS: [u64; 4] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0080,
    0x0100_0000_0000_0000,
    0x8000_0000_0000_0000,
];

const SQUARE_SCALE: i32 = 4;
const POSITIONAL_WEIGHT: i32 = 8;
const CONFIRMED_WEIGHT: i32 = 165;
const MOBILITY_WEIGHT: i32 = 20;

/// Scores a borrowed [`Board`] from either side's perspective.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'a> {
    board: &'a Board,
}

/// Board data seen from the evaluated side.
struct Perspective {
    mine: Bitboard,
    others: Bitboard,
    my_stones: u8,
    other_stones: u8,
    my_moves: u8,
    other_moves: u8,
}

impl<'a> Evaluator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Score the position for `side`; higher is better for `side`.
    pub fn evaluate(&self, side: Side) -> i32 {
        let view = self.perspective(side);

        if let Some(score) = Self::evaluate_game_end(&view) {
            return score;
        }

        Self::evaluate_weights(&view) * POSITIONAL_WEIGHT
            + self.evaluate_confirmed(&view) * CONFIRMED_WEIGHT
            + view.my_moves as i32 * MOBILITY_WEIGHT
    }

    fn perspective(&self, side: Side) -> Perspective {
        let (black, white) = self.board.field_data();
        let (black_stones, white_stones) = self.board.count_stones();
        let (black_moves, white_moves) = self.board.count_legal_moves();

        match side {
            Side::Black => Perspective {
                mine: black,
                others: white,
                my_stones: black_stones,
                other_stones: white_stones,
                my_moves: black_moves,
                other_moves: white_moves,
            },
            Side::White => Perspective {
                mine: white,
                others: black,
                my_stones: white_stones,
                other_stones: black_stones,
                my_moves: white_moves,
                other_moves: black_moves,
            },
        }
    }

    /// Fixed scores for wiped-out sides and decided games. Draws fall through.
    fn evaluate_game_end(view: &Perspective) -> Option<i32> {
        if view.other_stones == 0 {
            return Some(WIPEOUT_SCORE);
        }
        if view.my_stones == 0 {
            return Some(-WIPEOUT_SCORE);
        }

        let full = view.my_stones as usize + view.other_stones as usize == NUM_SPACES;
        let stuck = view.my_moves == 0 && view.other_moves == 0;
        if full || stuck {
            if view.my_stones > view.other_stones {
                return Some(GAME_WIN_SCORE);
            }
            if view.my_stones < view.other_stones {
                return Some(-GAME_WIN_SCORE);
            }
        }

        None
    }

    fn evaluate_weights(view: &Perspective) -> i32 {
        let mine: u64 = view.mine.into();
        let others: u64 = view.others.into();

        SQUARE_WEIGHTS
            .iter()
            .enumerate()
            .map(|(i, weight)| {
                let sign = ((mine >> i) & 1) as i32 - ((others >> i) & 1) as i32;
                weight * sign * SQUARE_SCALE
            })
            .sum()
    }

    /// Stones anchored to an occupied corner along its row or column,
    /// counted for the corner's owner.
    fn evaluate_confirmed(&self, view: &Perspective) -> i32 {
        CORNERS
            .iter()
            .map(|&corner| Bitboard::from(corner))
            .map(|corner| {
                if view.mine.intersects(corner) {
                    self.confirmed_run(corner, view.mine)
                } else if view.others.intersects(corner) {
                    -self.confirmed_run(corner, view.others)
                } else {
                    0
                }
            })
            .sum()
    }

    fn confirmed_run(&self, corner: Bitboard, owner: Bitboard) -> i32 {
        self.board.cross_floods(corner, owner).count_occupied() as i32 + 1
    }
}
