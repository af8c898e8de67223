//! End-of-game detection and the anti-starvation rule.
//!
//! A side whose row is empty cannot sow, so the game is over for it. A move
//! that empties the opponent's row "starves" them; it is only allowed when
//! every available move starves.

use smallvec::SmallVec;

use crate::core::{Board, PlayerId};
use crate::error::MoveError;

use super::events::{NullObserver, RuleEvent, RuleObserver};
use super::sowing::{apply_unchecked, check_move, undo};

/// Whether `player` has no seeds left to sow.
///
/// ```
/// use rust_awale::core::{Board, PlayerId};
/// use rust_awale::rules::is_end;
///
/// let board = Board::new([0, 0, 0], [1, 2, 3]).unwrap();
/// assert!(is_end(&board, PlayerId::FIRST));
/// assert!(!is_end(&board, PlayerId::SECOND));
/// ```
#[must_use]
pub fn is_end(board: &Board, player: PlayerId) -> bool {
    board.row_total(player) == 0
}

/// Whether playing `cell` would leave `player`'s opponent without seeds.
pub fn is_starving(board: &Board, player: PlayerId, cell: usize) -> Result<bool, MoveError> {
    check_move(board, player, cell)?;
    let mut scratch = board.clone();
    Ok(starves_in_place(&mut scratch, player, cell))
}

/// Whether `player` has at least one move that does not starve the opponent.
///
/// Simulates every candidate on a private copy; `board` is never modified.
#[must_use]
pub fn has_valid_move(board: &Board, player: PlayerId) -> bool {
    let mut scratch = board.clone();
    classify(&mut scratch, player).iter().any(|c| !c.starving)
}

/// Moves `player` may choose under the anti-starvation rule, ascending.
///
/// Every non-empty cell is listed, except starving ones when a non-starving
/// alternative exists. Empty only when `player`'s row is empty.
#[must_use]
pub fn legal_moves(board: &Board, player: PlayerId) -> SmallVec<[usize; 8]> {
    let mut scratch = board.clone();
    let (moves, _) = admissible_moves(&mut scratch, player, &NullObserver);
    moves
}

/// A non-empty cell and whether playing it starves the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub cell: usize,
    pub starving: bool,
}

/// Classify every non-empty cell of `player`. The board is restored before
/// returning.
pub(crate) fn classify(board: &mut Board, player: PlayerId) -> SmallVec<[Candidate; 8]> {
    let cells: SmallVec<[usize; 8]> = board.non_empty_cells(player).collect();
    cells
        .into_iter()
        .map(|cell| Candidate {
            cell,
            starving: starves_in_place(board, player, cell),
        })
        .collect()
}

/// Filter `player`'s candidates through the anti-starvation rule.
///
/// A starving candidate is dropped iff some *other* candidate does not
/// starve; the dropped cells are reported to `observer`. Returns the kept
/// cells and the number dropped. The board is restored before returning.
pub(crate) fn admissible_moves(
    board: &mut Board,
    player: PlayerId,
    observer: &dyn RuleObserver,
) -> (SmallVec<[usize; 8]>, u32) {
    let candidates = classify(board, player);
    let alternative_exists = candidates.iter().any(|c| !c.starving);

    let mut kept = SmallVec::new();
    let mut skipped = 0;
    for candidate in candidates {
        if candidate.starving && alternative_exists {
            observer.on_event(&RuleEvent::StarvingMoveSkipped {
                player,
                cell: candidate.cell,
            });
            skipped += 1;
        } else {
            kept.push(candidate.cell);
        }
    }
    (kept, skipped)
}

fn starves_in_place(board: &mut Board, player: PlayerId, cell: usize) -> bool {
    let record = apply_unchecked(board, player, cell);
    let starving = is_end(board, player.opponent());
    undo(board, &record);
    starving
}
