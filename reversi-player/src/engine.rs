//! The computer opponent: picks a move with a single-threaded or root-parallel search.

use crate::config::{self, EngineConfig, MAX_WORKERS};
use crate::search::{SearchResult, SearchSystem};
use crate::worker::SearchWorker;
use arrayvec::ArrayVec;
use crossbeam::channel;
use crossbeam::queue::SegQueue;
use log::debug;
use reversi_board::{Bitboard, Board, Location, Side};
use std::thread;

pub struct Engine {
    evaluate_side: Side,
    max_depth: u8,
    workers: ArrayVec<[SearchWorker; MAX_WORKERS]>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let max_depth = config::clamp_depth(config.search_depth);
        let workers = (0..config.workers.clamp(1, MAX_WORKERS))
            .map(|_| SearchWorker::new(max_depth))
            .collect();

        Self {
            evaluate_side: Side::default(),
            max_depth,
            workers,
        }
    }

    pub fn set_evaluate_side(&mut self, side: Side) {
        self.evaluate_side = side;
    }

    pub fn evaluate_side(&self) -> Side {
        self.evaluate_side
    }

    /// Set the search depth, clamped to the supported range.
    pub fn set_search_depth(&mut self, depth: u8) {
        self.max_depth = config::clamp_depth(depth);
        for worker in self.workers.iter_mut() {
            worker.set_search_depth(self.max_depth);
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Pick the best move for the evaluated side, or `None` if it has no legal move.
    /// `board` is searched in place and is unchanged when this returns.
    pub fn make_best_move(&mut self, board: &mut Board) -> Option<Location> {
        if self.workers.len() > 1 {
            self.make_best_move_parallel(board)
        } else {
            self.make_best_move_single(board)
        }
    }

    pub fn make_best_move_single(&mut self, board: &mut Board) -> Option<Location> {
        self.search_single(board).location()
    }

    pub fn make_best_move_parallel(&mut self, board: &Board) -> Option<Location> {
        self.search_parallel(board).location()
    }

    /// One alpha-beta search from the root, directly on `board`.
    pub fn search_single(&mut self, board: &mut Board) -> SearchResult {
        debug!("searching at depth {} on one thread", self.max_depth);

        let side = self.evaluate_side;
        SearchSystem::new(board, side).alpha_beta(
            Bitboard::EMPTY,
            self.max_depth,
            i32::MIN,
            i32::MAX,
            side,
        )
    }

    /// Search every root move to full depth on the worker pool and keep the best.
    ///
    /// Root moves form a FIFO queue; each idle worker takes the next one, so the
    /// first worker to finish is the first to be handed more work. Only a strictly
    /// greater score replaces the best result, so ties go to whichever finished first.
    pub fn search_parallel(&mut self, board: &Board) -> SearchResult {
        let side = self.evaluate_side;
        let mut best = SearchResult::new(i32::MIN, Bitboard::EMPTY);

        let queue = SegQueue::new();
        for root in board.legal_moves(side) {
            queue.push(root);
        }

        let mut pending = queue.len();
        if pending == 0 {
            return best;
        }

        for worker in self.workers.iter_mut() {
            worker.initialize(board, side);
        }

        let active = self.workers.len().min(pending);
        debug!(
            "searching {} root moves at depth {} on {} workers",
            pending, self.max_depth, active
        );

        let workers = &mut self.workers;
        let (done_tx, done_rx) = channel::unbounded();

        thread::scope(|scope| {
            for (id, worker) in workers.iter_mut().take(active).enumerate() {
                let queue = &queue;
                let done_tx = done_tx.clone();

                scope.spawn(move || {
                    while let Some(root) = queue.pop() {
                        let result = worker.search(root);
                        debug!("worker {} scored {} for {}", id, result.score, root);

                        if done_tx.send(result).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(done_tx);

            while pending > 0 {
                let result: SearchResult = match done_rx.recv() {
                    Ok(result) => result,
                    Err(_) => break,
                };

                if result.score > best.score {
                    best = result;
                }
                pending -= 1;
            }
        });

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_clamped_everywhere() {
        let mut engine = Engine::new(EngineConfig::default().with_workers(2));
        engine.set_search_depth(42);
        assert_eq!(engine.search_depth(), config::MAX_SEARCH_DEPTH);

        engine.set_search_depth(0);
        assert_eq!(engine.search_depth(), config::MIN_SEARCH_DEPTH);
    }

    #[test]
    fn always_keeps_one_worker() {
        let engine = Engine::new(EngineConfig {
            search_depth: 3,
            workers: 0,
        });
        assert_eq!(engine.worker_count(), 1);
    }

    #[test]
    fn no_legal_move_gives_none() {
        // White a1, black b1: black cannot move.
        let mut board: Board = "OX------ -------- -------- -------- -------- -------- -------- --------"
            .parse()
            .unwrap();

        let mut engine = Engine::new(EngineConfig::default().with_depth(3).with_workers(4));
        engine.set_evaluate_side(Side::Black);

        assert_eq!(engine.make_best_move_parallel(&board), None);
        assert_eq!(engine.make_best_move_single(&mut board), None);
    }

    #[test]
    fn single_legal_move_is_found_by_both_paths() {
        let mut board: Board = "OX------ -------- -------- -------- -------- -------- -------- --------"
            .parse()
            .unwrap();
        let c1 = "c1".parse().ok();

        let mut engine = Engine::new(EngineConfig::default().with_depth(4).with_workers(3));
        engine.set_evaluate_side(Side::White);

        assert_eq!(engine.make_best_move_parallel(&board), c1);
        assert_eq!(engine.make_best_move_single(&mut board), c1);
    }

    #[test]
    fn parallel_search_leaves_workers_consistent_across_calls() {
        let mut board = Board::new();
        let mut engine = Engine::new(EngineConfig::default().with_depth(3).with_workers(3));
        engine.set_evaluate_side(Side::Black);

        let first = engine.search_parallel(&board);
        board.place(first.location().unwrap(), Side::Black);

        engine.set_evaluate_side(Side::White);
        let reply = engine.search_parallel(&board);
        let single = engine.search_single(&mut board);

        assert_eq!(reply.score, single.score);
        assert!(board.legal_moves(Side::White).contains(reply.location().unwrap()));
    }
}
