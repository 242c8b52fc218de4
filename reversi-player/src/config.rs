//! Engine configuration.

use reversi_board::NUM_SPACES;
use std::thread;

/// Shallowest search the engine accepts.
pub const MIN_SEARCH_DEPTH: u8 = 1;

/// Deepest search the engine accepts.
pub const MAX_SEARCH_DEPTH: u8 = 10;

pub const DEFAULT_SEARCH_DEPTH: u8 = 7;

/// One worker per possible root move is the most that can ever be busy.
pub const MAX_WORKERS: usize = NUM_SPACES;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    pub search_depth: u8,
    /// Number of root-move workers. One disables the parallel search.
    pub workers: usize,
}

impl Default for EngineConfig {
    /// Default depth, with one worker per hardware thread.
    fn default() -> Self {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            workers: workers.min(MAX_WORKERS),
        }
    }
}

impl EngineConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.search_depth = clamp_depth(depth);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.clamp(1, MAX_WORKERS);
        self
    }
}

pub(crate) fn clamp_depth(depth: u8) -> u8 {
    depth.clamp(MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH)
}
