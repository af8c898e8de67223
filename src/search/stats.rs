//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, leaves included.
    pub nodes: u64,

    /// Nodes evaluated without expansion (depth exhausted or side out of seeds).
    pub leaves: u64,

    /// Moves dropped by the anti-starvation rule.
    pub starving_skipped: u64,

    /// Alpha-beta cutoffs.
    pub cutoffs: u64,

    /// Deepest ply entered.
    pub max_ply: u32,

    /// Depth of the search whose result was returned.
    pub depth_reached: u32,

    /// Whether the time limit interrupted the search.
    pub timed_out: bool,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold in the counters of another worker or iteration.
    ///
    /// `depth_reached` and `time_us` describe the whole search and are left
    /// to the caller.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.starving_skipped += other.starving_skipped;
        self.cutoffs += other.cutoffs;
        self.max_ply = self.max_ply.max(other.max_ply);
        self.timed_out |= other.timed_out;
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
