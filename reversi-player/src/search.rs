//! Depth-limited alpha-beta search over a board mutated in place.

use crate::evaluator::Evaluator;
use reversi_board::{Bitboard, Board, Location, Side};

/// A score paired with the move that produced it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchResult {
    pub score: i32,
    /// One-hot move mask, or empty when no move was made.
    pub mv: Bitboard,
}

impl SearchResult {
    pub fn new(score: i32, mv: Bitboard) -> Self {
        Self { score, mv }
    }

    /// The move as a [`Location`], if there is one.
    pub fn location(&self) -> Option<Location> {
        if self.mv.is_empty() {
            None
        } else {
            Some(Location::from_onehot_unchecked(self.mv))
        }
    }
}

/// Searches on behalf of `evaluate_side` over a borrowed board.
/// The board is restored to its original state whenever a search returns.
pub struct SearchSystem<'a> {
    board: &'a mut Board,
    evaluate_side: Side,
}

impl<'a> SearchSystem<'a> {
    pub fn new(board: &'a mut Board, evaluate_side: Side) -> Self {
        Self {
            board,
            evaluate_side,
        }
    }

    pub fn evaluate_side(&self) -> Side {
        self.evaluate_side
    }

    /// Alpha-beta search below the move `mv` that led to the current position.
    ///
    /// Leaves (depth exhausted, or `side` has no move) are scored for
    /// `evaluate_side` and labelled with `mv`. Interior nodes label their result
    /// with the move made at that node, so the root sees which of its own moves
    /// led to the returned score, cutoffs included.
    pub fn alpha_beta(
        &mut self,
        mv: Bitboard,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        side: Side,
    ) -> SearchResult {
        if depth == 0 {
            return self.leaf(mv);
        }

        let legal_moves = self.board.legal_moves(side);
        if legal_moves.is_empty() {
            return self.leaf(mv);
        }

        let maximizing = side == self.evaluate_side;
        let mut best = SearchResult::new(
            if maximizing { i32::MIN } else { i32::MAX },
            Bitboard::EMPTY,
        );

        for loc in legal_moves {
            let flips = self.board.place(loc, side);
            let child = self.alpha_beta(loc.into(), depth - 1, alpha, beta, !side);
            self.board.retract(loc, flips, side);

            let result = SearchResult::new(child.score, loc.into());

            if maximizing {
                // Beta cutoff
                if child.score >= beta {
                    return result;
                }

                if child.score > best.score {
                    best = result;
                    alpha = child.score;
                }
            } else {
                // Alpha cutoff
                if child.score <= alpha {
                    return result;
                }

                if child.score < best.score {
                    best = result;
                    beta = child.score;
                }
            }
        }

        best
    }

    fn leaf(&self, mv: Bitboard) -> SearchResult {
        let score = Evaluator::new(&*self.board).evaluate(self.evaluate_side);
        SearchResult::new(score, mv)
    }
}
