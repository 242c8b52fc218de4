//! A per-thread searcher that owns a private board copy.

use crate::search::{SearchResult, SearchSystem};
use reversi_board::{Board, Location, Side};

/// Searches one root move at a time on its own copy of the game board.
/// Workers never see each other's boards, so no locking is needed.
#[derive(Clone, Debug)]
pub struct SearchWorker {
    board: Board,
    evaluate_side: Side,
    depth: u8,
}

impl SearchWorker {
    pub fn new(depth: u8) -> Self {
        Self {
            board: Board::new(),
            evaluate_side: Side::default(),
            depth,
        }
    }

    /// Refresh the private board from `origin` before a new root search.
    pub fn initialize(&mut self, origin: &Board, side: Side) {
        self.evaluate_side = side;
        self.board.overwrite(origin);
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Play `root` for the evaluated side, search the reply tree one ply
    /// shallower, and take the move back. The result is labelled with `root`.
    pub fn search(&mut self, root: Location) -> SearchResult {
        let side = self.evaluate_side;
        let flips = self.board.place(root, side);

        let reply = SearchSystem::new(&mut self.board, side).alpha_beta(
            root.into(),
            self.depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            !side,
        );

        self.board.retract(root, flips, side);
        SearchResult::new(reply.score, root.into())
    }

    #[cfg(test)]
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }
}
