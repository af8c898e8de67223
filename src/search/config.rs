//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tree-search algorithm.
///
/// Both algorithms return the same score and the same move; alpha-beta
/// visits fewer nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive minimax over every admissible move.
    #[default]
    Minimax,
    /// Minimax with alpha-beta cutoffs.
    AlphaBeta,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to look ahead (single-player turns).
    pub depth: u32,

    /// Which tree-search algorithm to run.
    pub algorithm: Algorithm,

    /// Search root moves on the rayon thread pool.
    /// Each worker owns its own copy of the board.
    pub parallel: bool,

    /// Wall-clock budget. When set, the search deepens one ply at a time
    /// and returns the deepest iteration that finished in time.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            algorithm: Algorithm::Minimax,
            parallel: false,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    /// Exhaustive minimax to the given depth.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self::default().with_depth(depth)
    }

    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the search algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Enable or disable root-parallel search.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set a wall-clock budget (enables iterative deepening).
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}
