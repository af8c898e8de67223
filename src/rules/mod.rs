//! Game rules: sowing, captures, end of game, anti-starvation.
//!
//! Everything here is a free function over a [`Board`](crate::core::Board):
//! - [`play`] / [`apply`] / [`undo`]: execute (and reverse) one move
//! - [`is_end`]: a side has no seeds left
//! - [`has_valid_move`] / [`legal_moves`]: the anti-starvation rule
//!
//! Rule decisions that turn a move away are reported as [`RuleEvent`]s.

pub mod events;
pub mod sowing;
pub mod starvation;

pub use events::{EventLog, LogObserver, NullObserver, RuleEvent, RuleObserver};
pub use sowing::{apply, check_move, play, undo, Undo};
pub use starvation::{has_valid_move, is_end, is_starving, legal_moves};

pub(crate) use sowing::apply_unchecked;
pub(crate) use starvation::admissible_moves;
