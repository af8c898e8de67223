//! Board representation: two rows of pits, one per player.
//!
//! Sowing runs left to right along a row (increasing cell index) and
//! continues at cell 0 of the other row, so the two rows form one loop.
//!
//! ```text
//!   Player 0: [ 0 ][ 1 ][ 2 ] ... [N-1] --+
//!      +----------------------------------+
//!      +-> Player 1: [ 0 ][ 1 ] ... [N-1] --> back to Player 0, cell 0
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::BoardError;

use super::player::{PlayerId, PlayerPair};

/// One player's pits. Boards with up to 8 pits per row stay inline.
pub type Row = SmallVec<[u32; 8]>;

/// Pits in the standard setup.
pub const STANDARD_PITS: usize = 6;

/// Seeds per pit in the standard setup.
pub const STANDARD_SEEDS: u32 = 4;

/// Most seeds a board may hold in total.
pub const MAX_SEEDS: u32 = u32::MAX;

/// The playing surface: two rows of equal length `N >= 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PlayerPair<Row>", into = "PlayerPair<Row>")]
pub struct Board {
    rows: PlayerPair<Row>,
}

impl Board {
    /// Create a board from player 0's and player 1's rows.
    ///
    /// ```
    /// use rust_awale::core::{Board, PlayerId};
    ///
    /// let board = Board::new([0, 0, 4], [1, 2, 0]).unwrap();
    /// assert_eq!(board.pits(), 3);
    /// assert_eq!(board.seeds(PlayerId::SECOND, 1), 2);
    /// ```
    pub fn new(
        first: impl IntoIterator<Item = u32>,
        second: impl IntoIterator<Item = u32>,
    ) -> Result<Self, BoardError> {
        Self::try_from(PlayerPair::new(
            first.into_iter().collect::<Row>(),
            second.into_iter().collect::<Row>(),
        ))
    }

    /// Create a board with `pits` pits per row, each holding `seeds` seeds.
    ///
    /// # Panics
    ///
    /// Panics if `pits` is zero or the board would hold more than
    /// [`MAX_SEEDS`] seeds. [`Board::try_filled`] reports these as errors.
    #[must_use]
    pub fn filled(pits: usize, seeds: u32) -> Self {
        assert!(pits > 0, "Board must have at least 1 pit per row");
        match Self::try_filled(pits, seeds) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a board with `pits` pits per row, each holding `seeds` seeds.
    pub fn try_filled(pits: usize, seeds: u32) -> Result<Self, BoardError> {
        let row = || std::iter::repeat(seeds).take(pits);
        Self::new(row(), row())
    }

    /// The standard opening position: 6 pits of 4 seeds per side.
    #[must_use]
    pub fn standard() -> Self {
        Self::filled(STANDARD_PITS, STANDARD_SEEDS)
    }

    /// Number of pits in each row.
    #[must_use]
    pub fn pits(&self) -> usize {
        self.rows[PlayerId::FIRST].len()
    }

    /// A player's row.
    #[must_use]
    pub fn row(&self, player: PlayerId) -> &[u32] {
        &self.rows[player]
    }

    /// Seeds in one pit.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[must_use]
    pub fn seeds(&self, player: PlayerId, cell: usize) -> u32 {
        self.rows[player][cell]
    }

    pub(crate) fn pit_mut(&mut self, player: PlayerId, cell: usize) -> &mut u32 {
        &mut self.rows[player][cell]
    }

    /// Seeds left on one side.
    #[must_use]
    pub fn row_total(&self, player: PlayerId) -> u32 {
        self.rows[player].iter().sum()
    }

    /// Seeds left on the whole board.
    #[must_use]
    pub fn total(&self) -> u32 {
        PlayerId::all().map(|p| self.row_total(p)).sum()
    }

    /// Cells of `player` that hold at least one seed, in ascending order.
    pub fn non_empty_cells(&self, player: PlayerId) -> impl Iterator<Item = usize> + '_ {
        self.rows[player]
            .iter()
            .enumerate()
            .filter(|&(_, &seeds)| seeds > 0)
            .map(|(cell, _)| cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<PlayerPair<Row>> for Board {
    type Error = BoardError;

    fn try_from(rows: PlayerPair<Row>) -> Result<Self, Self::Error> {
        let first = rows[PlayerId::FIRST].len();
        let second = rows[PlayerId::SECOND].len();
        if first != second {
            return Err(BoardError::UnequalRows { first, second });
        }
        if first == 0 {
            return Err(BoardError::NoPits);
        }
        rows.iter()
            .flat_map(|(_, row)| row.iter())
            .try_fold(0u32, |total, &seeds| total.checked_add(seeds))
            .ok_or(BoardError::TooManySeeds { max: MAX_SEEDS })?;
        Ok(Self { rows })
    }
}

impl From<Board> for PlayerPair<Row> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (player, row) in self.rows.iter() {
            writeln!(f, "{}: {:?}", player, row.as_slice())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board() {
        let board = Board::standard();
        assert_eq!(board.pits(), 6);
        assert_eq!(board.total(), 48);
        assert_eq!(board.row(PlayerId::FIRST), &[4, 4, 4, 4, 4, 4]);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_new_rejects_unequal_rows() {
        let err = Board::new([1, 2, 3], [1, 2]).unwrap_err();
        assert_eq!(err, BoardError::UnequalRows { first: 3, second: 2 });
    }

    #[test]
    fn test_new_rejects_empty_rows() {
        let err = Board::new(Vec::<u32>::new(), Vec::<u32>::new()).unwrap_err();
        assert_eq!(err, BoardError::NoPits);
    }

    #[test]
    fn test_single_pit_board() {
        let board = Board::new([3], [0]).unwrap();
        assert_eq!(board.pits(), 1);
        assert_eq!(board.row_total(PlayerId::FIRST), 3);
        assert_eq!(board.row_total(PlayerId::SECOND), 0);
    }

    #[test]
    fn test_new_rejects_seed_overflow() {
        let err = Board::new([u32::MAX, 1], [1, 1]).unwrap_err();
        assert_eq!(err, BoardError::TooManySeeds { max: MAX_SEEDS });

        let board = Board::new([u32::MAX - 3, 1], [1, 1]).unwrap();
        assert_eq!(board.total(), u32::MAX);

        assert!(serde_json::from_str::<Board>("[[4294967295,1],[1,1]]").is_err());
    }

    #[test]
    fn test_try_filled() {
        assert_eq!(Board::try_filled(6, 4).unwrap(), Board::standard());
        assert_eq!(Board::try_filled(0, 4).unwrap_err(), BoardError::NoPits);
        assert_eq!(
            Board::try_filled(2, u32::MAX).unwrap_err(),
            BoardError::TooManySeeds { max: MAX_SEEDS }
        );
    }

    #[test]
    #[should_panic(expected = "more than")]
    fn test_filled_seed_overflow() {
        let _ = Board::filled(3, u32::MAX / 2);
    }

    #[test]
    #[should_panic(expected = "at least 1 pit")]
    fn test_filled_zero_pits() {
        let _ = Board::filled(0, 4);
    }

    #[test]
    fn test_non_empty_cells() {
        let board = Board::new([0, 3, 0, 1], [2, 0, 0, 0]).unwrap();
        let cells: Vec<_> = board.non_empty_cells(PlayerId::FIRST).collect();
        assert_eq!(cells, vec![1, 3]);
        let cells: Vec<_> = board.non_empty_cells(PlayerId::SECOND).collect();
        assert_eq!(cells, vec![0]);
    }

    #[test]
    fn test_display() {
        let board = Board::new([1, 2], [3, 4]).unwrap();
        assert_eq!(board.to_string(), "Player 0: [1, 2]\nPlayer 1: [3, 4]\n");
    }

    #[test]
    fn test_serialization() {
        let board = Board::new([0, 0, 4], [1, 2, 0]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[0,0,4],[1,2,0]]");

        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);

        assert!(serde_json::from_str::<Board>("[[1,2],[3]]").is_err());
    }
}
