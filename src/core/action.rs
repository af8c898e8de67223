//! Move representation and move history records.
//!
//! A move names the side that sows and the pit it empties. Moves carry no
//! seed counts of their own; the board decides what a move does.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A single sowing move: `player` empties `cell` of their own row.
///
/// ## Example
///
/// ```
/// use rust_awale::core::{Move, PlayerId};
///
/// let mv = Move::new(PlayerId::FIRST, 5);
/// assert_eq!(mv.to_string(), "Player 0 sows cell 5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that sows.
    pub player: PlayerId,

    /// The pit being emptied, indexed within `player`'s row.
    pub cell: usize,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(player: PlayerId, cell: usize) -> Self {
        Self { player, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} sows cell {}", self.player, self.cell)
    }
}

/// A played move with its outcome, for game history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was played.
    pub mv: Move,

    /// Seeds captured by the move.
    pub captured: u32,

    /// Ply number (0-based) at which the move was played.
    pub ply: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, captured: u32, ply: u32) -> Self {
        Self { mv, captured, ply }
    }
}
