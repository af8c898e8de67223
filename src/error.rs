//! Error types for board construction and move execution.

use crate::core::PlayerId;

/// Errors raised when building a board from caller-supplied rows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("rows must have the same length (player 0 has {first} pits, player 1 has {second})")]
    UnequalRows { first: usize, second: usize },

    #[error("a board needs at least one pit per row")]
    NoPits,

    /// Seed counts are `u32`; the whole board must fit in one, so no pit,
    /// row total or capture total can overflow during play.
    #[error("the board holds more than {max} seeds")]
    TooManySeeds { max: u32 },
}

/// Errors raised when a move violates its preconditions.
///
/// Policy decisions such as refusing a starving move are not errors; they
/// are reported through [`RuleObserver`](crate::rules::RuleObserver).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {cell} is out of range (board has {pits} pits per row)")]
    CellOutOfRange { cell: usize, pits: usize },

    #[error("{player} has no seeds in cell {cell}")]
    EmptyCell { player: PlayerId, cell: usize },

    #[error("the game is over")]
    GameOver,
}
