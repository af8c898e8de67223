//! A match in progress: board, captured seeds, turn order, history.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Move, MoveRecord, PlayerId, PlayerPair, STANDARD_PITS, STANDARD_SEEDS};
use crate::error::{BoardError, MoveError};
use crate::rules::{self, LogObserver, RuleEvent, RuleObserver};
use crate::search::{SearchConfig, Searcher};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The player who captured more seeds.
    Winner(PlayerId),
    /// Both players captured the same number of seeds.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What happened to a requested move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The move was played and captured `captured` seeds.
    Played { cell: usize, captured: u32 },

    /// The move would starve the opponent while another move exists. The
    /// game is unchanged and the same player is still to move.
    Rejected { cell: usize },
}

/// A game between two players.
///
/// ## Example
///
/// ```
/// use rust_awale::core::PlayerId;
/// use rust_awale::game::{GameBuilder, PlayOutcome};
///
/// let mut game = GameBuilder::new().build().unwrap();
/// assert_eq!(game.play(2).unwrap(), PlayOutcome::Played { cell: 2, captured: 0 });
/// assert_eq!(game.to_move(), PlayerId::SECOND);
/// ```
#[derive(Clone)]
pub struct Game {
    board: Board,
    scores: PlayerPair<u32>,
    to_move: PlayerId,
    ply: u32,
    history: Vec<MoveRecord>,
    observer: Arc<dyn RuleObserver>,
}

impl Game {
    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seeds captured so far by each player.
    #[must_use]
    pub fn scores(&self) -> &PlayerPair<u32> {
        &self.scores
    }

    /// Player 0's captures minus player 1's.
    #[must_use]
    pub fn net_score(&self) -> i64 {
        i64::from(self.scores[PlayerId::FIRST]) - i64::from(self.scores[PlayerId::SECOND])
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Number of moves played.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Every move played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The game ends when the player to move has no seeds.
    #[must_use]
    pub fn is_over(&self) -> bool {
        rules::is_end(&self.board, self.to_move)
    }

    /// Moves the player to move may choose.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[usize; 8]> {
        rules::legal_moves(&self.board, self.to_move)
    }

    /// `None` while the game is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let (first, second) = (self.scores[PlayerId::FIRST], self.scores[PlayerId::SECOND]);
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// Play `cell` for the player to move.
    pub fn play(&mut self, cell: usize) -> Result<PlayOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let player = self.to_move;

        if rules::is_starving(&self.board, player, cell)?
            && rules::has_valid_move(&self.board, player)
        {
            self.observer
                .on_event(&RuleEvent::StarvingMoveRejected { player, cell });
            return Ok(PlayOutcome::Rejected { cell });
        }

        let captured = rules::play(&mut self.board, player, cell)?;
        self.scores[player] += captured;
        self.history
            .push(MoveRecord::new(Move::new(player, cell), captured, self.ply));
        self.ply += 1;
        self.to_move = player.opponent();

        if self.is_over() {
            log::info!(
                "game over after {} plies: {} to {}",
                self.ply,
                self.scores[PlayerId::FIRST],
                self.scores[PlayerId::SECOND]
            );
        }
        Ok(PlayOutcome::Played { cell, captured })
    }

    /// Best move for the player to move at the given depth.
    #[must_use]
    pub fn suggest(&self, depth: u32) -> Option<usize> {
        Searcher::new(SearchConfig::new(depth))
            .with_observer(Arc::clone(&self.observer))
            .search_from(&self.board, self.to_move, self.totals())
            .best_move
    }

    /// Captured totals as search scores.
    pub(crate) fn totals(&self) -> PlayerPair<i64> {
        PlayerPair::new(
            i64::from(self.scores[PlayerId::FIRST]),
            i64::from(self.scores[PlayerId::SECOND]),
        )
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("scores", &self.scores)
            .field("to_move", &self.to_move)
            .field("ply", &self.ply)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a [`Game`].
pub struct GameBuilder {
    pits: usize,
    seeds_per_pit: u32,
    first_player: PlayerId,
    board: Option<Board>,
    observer: Arc<dyn RuleObserver>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            pits: STANDARD_PITS,
            seeds_per_pit: STANDARD_SEEDS,
            first_player: PlayerId::FIRST,
            board: None,
            observer: Arc::new(LogObserver),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pits(mut self, pits: usize) -> Self {
        self.pits = pits;
        self
    }

    pub fn seeds_per_pit(mut self, seeds: u32) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Start from a given position; `pits` and `seeds_per_pit` are ignored.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn observer<O: RuleObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Build the game.
    pub fn build(self) -> Result<Game, BoardError> {
        let board = match self.board {
            Some(board) => board,
            None => Board::try_filled(self.pits, self.seeds_per_pit)?,
        };

        Ok(Game {
            board,
            scores: PlayerPair::with_default(),
            to_move: self.first_player,
            ply: 0,
            history: Vec::new(),
            observer: self.observer,
        })
    }
}
