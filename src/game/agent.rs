//! Move choosers and a driver that plays a game to the end.

use crate::core::{GameRng, PlayerPair};
use crate::search::{SearchConfig, Searcher};

use super::state::{Game, GameResult, PlayOutcome};

/// Something that picks moves.
pub trait Agent {
    /// Pick a cell for the player to move, `None` to resign the turn.
    fn choose(&mut self, game: &Game) -> Option<usize>;
}

/// Plays the minimax move.
pub struct MinimaxAgent {
    searcher: Searcher,
}

impl MinimaxAgent {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    #[must_use]
    pub fn from_searcher(searcher: Searcher) -> Self {
        Self { searcher }
    }

    /// The underlying searcher (stats of the last move).
    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Agent for MinimaxAgent {
    fn choose(&mut self, game: &Game) -> Option<usize> {
        self.searcher
            .search_from(game.board(), game.to_move(), game.totals())
            .best_move
    }
}

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose(&mut self, game: &Game) -> Option<usize> {
        self.rng.choose(&game.legal_moves()).copied()
    }
}

/// Let `agents` play `game` until it ends or `max_plies` more moves were
/// played. Returns the result if the game ended.
pub fn play_out(
    game: &mut Game,
    mut agents: PlayerPair<&mut dyn Agent>,
    max_plies: u32,
) -> Option<GameResult> {
    let mut played = 0;
    while !game.is_over() && played < max_plies {
        let player = game.to_move();
        let Some(cell) = agents[player].choose(game) else {
            log::debug!("{player} has no move to offer");
            break;
        };

        match game.play(cell) {
            Ok(PlayOutcome::Played { .. }) => played += 1,
            Ok(PlayOutcome::Rejected { .. }) => {
                log::warn!("{player} insisted on a starving move, stopping");
                break;
            }
            Err(err) => {
                log::warn!("{player} chose an invalid move: {err}");
                break;
            }
        }
    }
    game.result()
}
