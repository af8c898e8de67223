//! Exhaustive enumeration of move lines.
//!
//! Lists every line of play up to a depth, each with its net capture score
//! from player 0's point of view. Useful to inspect what the minimax search
//! is choosing between, and to check it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, PlayerId};
use crate::rules::{admissible_moves, apply_unchecked, is_end, undo, LogObserver, RuleObserver};

/// One line of play: alternating cells starting with the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Cells played, first move first.
    pub moves: SmallVec<[usize; 8]>,

    /// Seeds captured by player 0 minus seeds captured by player 1.
    pub score: i64,
}

/// Enumerate every admissible line of up to `depth` plies.
///
/// A line stops early when the side to move has no seeds. At depth 0, or
/// when `player` has no seeds, the result is the single empty line.
///
/// ```
/// use rust_awale::core::{Board, PlayerId};
/// use rust_awale::search::enumerate;
///
/// let board = Board::new([0, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 0]).unwrap();
/// let lines = enumerate(&board, PlayerId::FIRST, 1);
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].moves.as_slice(), &[5]);
/// assert_eq!(lines[0].score, 4);
/// ```
#[must_use]
pub fn enumerate(board: &Board, player: PlayerId, depth: u32) -> Vec<Line> {
    enumerate_with(board, player, depth, &LogObserver)
}

/// [`enumerate`], reporting skipped starving moves to `observer`.
#[must_use]
pub fn enumerate_with(
    board: &Board,
    player: PlayerId,
    depth: u32,
    observer: &dyn RuleObserver,
) -> Vec<Line> {
    let mut scratch = board.clone();
    let mut prefix = SmallVec::new();
    let mut lines = Vec::new();
    walk(&mut scratch, player, depth, &mut prefix, 0, observer, &mut lines);
    lines
}

fn walk(
    board: &mut Board,
    player: PlayerId,
    depth: u32,
    prefix: &mut SmallVec<[usize; 8]>,
    score: i64,
    observer: &dyn RuleObserver,
    lines: &mut Vec<Line>,
) {
    if depth == 0 || is_end(board, player) {
        lines.push(Line {
            moves: prefix.clone(),
            score,
        });
        return;
    }

    let (moves, _) = admissible_moves(board, player, observer);
    for cell in moves {
        let record = apply_unchecked(board, player, cell);
        let captured = i64::from(record.captured());
        let signed = if player == PlayerId::FIRST { captured } else { -captured };

        prefix.push(cell);
        walk(board, player.opponent(), depth - 1, prefix, score + signed, observer, lines);
        prefix.pop();

        undo(board, &record);
    }
}
