//! Look-ahead over captured seeds.
//!
//! - [`enumerate`]: every admissible line up to a depth, with its score
//! - [`min_max`] / [`suggest`]: the minimax value and best move
//! - [`Searcher`]: configurable search (alpha-beta, parallel root, time limit)

pub mod config;
pub mod enumerate;
pub mod minimax;
pub mod stats;

pub use config::{Algorithm, SearchConfig};
pub use enumerate::{enumerate, enumerate_with, Line};
pub use minimax::{min_max, suggest, SearchResult, Searcher};
pub use stats::SearchStats;
