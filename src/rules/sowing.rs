//! Move execution: sowing and capture chains.
//!
//! ## Sowing
//!
//! The mover lifts every seed from the chosen pit and drops one into each
//! following pit, wrapping from the end of a row to cell 0 of the other
//! row. The emptied pit is not skipped on later laps.
//!
//! ## Capture
//!
//! If the last seed lands in the opponent's row on a pit holding exactly 2
//! or 3 seeds, that pit is captured, then the previous pit (lower index) is
//! examined the same way. The chain stops at the first pit outside {2, 3}
//! or at cell 0; it never crosses back into the mover's row.
//!
//! ## Reversible moves
//!
//! [`apply`] returns an [`Undo`] record and [`undo`] restores the board it
//! was produced from, so search can explore a line in place and backtrack
//! without cloning the board.

use smallvec::SmallVec;

use crate::core::{Board, Move, PlayerId};
use crate::error::MoveError;

/// Everything needed to take a move back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    mv: Move,
    /// Seeds lifted from the source pit.
    picked: u32,
    /// Captured opponent pits and the seeds each held, in capture order.
    captures: SmallVec<[(usize, u32); 8]>,
}

impl Undo {
    /// The move this record reverses.
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Seeds lifted from the source pit.
    #[must_use]
    pub fn sown(&self) -> u32 {
        self.picked
    }

    /// Total seeds captured by the move.
    #[must_use]
    pub fn captured(&self) -> u32 {
        self.captures.iter().map(|&(_, seeds)| seeds).sum()
    }

    /// Opponent cells emptied by the capture chain, starting at the landing pit.
    pub fn captured_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.captures.iter().map(|&(cell, _)| cell)
    }
}

/// Play `cell` for `player` and return the number of seeds captured.
///
/// The board is left untouched if the move is invalid.
///
/// ```
/// use rust_awale::core::{Board, PlayerId};
/// use rust_awale::rules::play;
///
/// let mut board = Board::new([0, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 0]).unwrap();
/// let captured = play(&mut board, PlayerId::FIRST, 5).unwrap();
///
/// assert_eq!(captured, 4);
/// assert_eq!(board.row(PlayerId::SECOND), &[0, 0, 0, 0, 0, 0]);
/// ```
pub fn play(board: &mut Board, player: PlayerId, cell: usize) -> Result<u32, MoveError> {
    apply(board, player, cell).map(|undo| undo.captured())
}

/// Play `cell` for `player`, returning a record that [`undo`] can reverse.
pub fn apply(board: &mut Board, player: PlayerId, cell: usize) -> Result<Undo, MoveError> {
    check_move(board, player, cell)?;
    Ok(apply_unchecked(board, player, cell))
}

/// Validate the preconditions of a move without playing it.
pub fn check_move(board: &Board, player: PlayerId, cell: usize) -> Result<(), MoveError> {
    let pits = board.pits();
    if cell >= pits {
        return Err(MoveError::CellOutOfRange { cell, pits });
    }
    if board.seeds(player, cell) == 0 {
        return Err(MoveError::EmptyCell { player, cell });
    }
    Ok(())
}

/// Apply a move already known to be valid.
pub(crate) fn apply_unchecked(board: &mut Board, player: PlayerId, cell: usize) -> Undo {
    let pits = board.pits();
    let picked = std::mem::take(board.pit_mut(player, cell));

    let (mut side, mut pos) = (player, cell);
    for _ in 0..picked {
        (side, pos) = next_pit(side, pos, pits);
        *board.pit_mut(side, pos) += 1;
    }

    let mut captures = SmallVec::new();
    if side != player {
        loop {
            let pit = board.pit_mut(side, pos);
            if !matches!(*pit, 2 | 3) {
                break;
            }
            captures.push((pos, std::mem::take(pit)));
            if pos == 0 {
                break;
            }
            pos -= 1;
        }
    }

    Undo {
        mv: Move::new(player, cell),
        picked,
        captures,
    }
}

/// Reverse a move.
///
/// `board` must be exactly the board `apply` produced `record` on; moves
/// are undone in the reverse order they were applied.
pub fn undo(board: &mut Board, record: &Undo) {
    let Move { player, cell } = record.mv;
    let opponent = player.opponent();
    for &(pos, seeds) in &record.captures {
        *board.pit_mut(opponent, pos) = seeds;
    }

    let pits = board.pits();
    let (mut side, mut pos) = (player, cell);
    for _ in 0..record.picked {
        (side, pos) = next_pit(side, pos, pits);
        *board.pit_mut(side, pos) -= 1;
    }
    *board.pit_mut(player, cell) = record.picked;
}

#[inline]
fn next_pit(side: PlayerId, pos: usize, pits: usize) -> (PlayerId, usize) {
    if pos + 1 == pits {
        (side.opponent(), 0)
    } else {
        (side, pos + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::FIRST;
    const P1: PlayerId = PlayerId::SECOND;

    #[test]
    fn test_sow_within_own_row() {
        let mut board = Board::new([3, 0, 0, 0], [1, 1, 1, 1]).unwrap();
        let captured = play(&mut board, P0, 0).unwrap();

        assert_eq!(captured, 0);
        assert_eq!(board.row(P0), &[0, 1, 1, 1]);
        assert_eq!(board.row(P1), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_sow_wraps_into_opponent_row() {
        let mut board = Board::new([0, 0, 0, 0, 0, 4], [4, 0, 0, 0, 0, 0]).unwrap();
        let captured = play(&mut board, P0, 5).unwrap();

        assert_eq!(captured, 0);
        assert_eq!(board.row(P0), &[0, 0, 0, 0, 0, 0]);
        assert_eq!(board.row(P1), &[5, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_player_one_wraps_back_to_player_zero() {
        let mut board = Board::new([0, 0, 0], [0, 0, 3]).unwrap();
        let captured = play(&mut board, P1, 2).unwrap();

        assert_eq!(captured, 0);
        assert_eq!(board.row(P0), &[1, 1, 1]);
        assert_eq!(board.row(P1), &[0, 0, 0]);
    }

    #[test]
    fn test_capture_chain_runs_backward() {
        let mut board = Board::new([0, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 0]).unwrap();
        let undo = apply(&mut board, P0, 5).unwrap();

        assert_eq!(undo.captured(), 4);
        assert_eq!(undo.captured_cells().collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(board.row(P1), &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_capture_chain_stops_at_non_capturable_pit() {
        // Lands on cell 2 (3 seeds), cell 1 becomes 4 and breaks the chain.
        let mut board = Board::new([0, 0, 3], [5, 3, 2]).unwrap();
        let captured = play(&mut board, P0, 2).unwrap();

        assert_eq!(captured, 3);
        assert_eq!(board.row(P1), &[6, 4, 0]);
    }

    #[test]
    fn test_no_capture_in_own_row() {
        let mut board = Board::new([1, 1, 0], [0, 0, 0]).unwrap();
        let captured = play(&mut board, P0, 0).unwrap();

        assert_eq!(captured, 0);
        assert_eq!(board.row(P0), &[0, 2, 0]);
    }

    #[test]
    fn test_laps_refill_source_pit() {
        // 7 seeds on a 3-pit board: one full lap of 6 pits plus the source again.
        let mut board = Board::new([7, 0, 0], [0, 0, 0]).unwrap();
        let captured = play(&mut board, P0, 0).unwrap();

        assert_eq!(captured, 0);
        assert_eq!(board.row(P0), &[1, 2, 1]);
        assert_eq!(board.row(P1), &[1, 1, 1]);
    }

    #[test]
    fn test_invalid_moves_leave_board_untouched() {
        let mut board = Board::new([0, 2], [1, 1]).unwrap();
        let before = board.clone();

        assert_eq!(
            play(&mut board, P0, 0),
            Err(MoveError::EmptyCell { player: P0, cell: 0 })
        );
        assert_eq!(
            play(&mut board, P0, 2),
            Err(MoveError::CellOutOfRange { cell: 2, pits: 2 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_restores_board() {
        let mut board = Board::new([0, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 0]).unwrap();
        let before = board.clone();

        let record = apply(&mut board, P0, 5).unwrap();
        assert_ne!(board, before);

        undo(&mut board, &record);
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_after_laps() {
        let mut board = Board::new([13, 1, 2], [2, 1, 0]).unwrap();
        let before = board.clone();

        let record = apply(&mut board, P0, 0).unwrap();
        assert_eq!(record.sown(), 13);
        undo(&mut board, &record);

        assert_eq!(board, before);
    }
}
