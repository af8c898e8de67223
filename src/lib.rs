//! # rust-awale
//!
//! Rules engine and look-ahead search for Awale (Oware), the two-row
//! sowing game.
//!
//! ## Rules in brief
//!
//! Each player owns one row of pits. A move lifts every seed from one of
//! the mover's pits and sows them one by one into the following pits,
//! wrapping into the opponent's row. If the last seed makes an opponent
//! pit hold 2 or 3 seeds, those seeds are captured, and so on backward
//! along the opponent's row. A move that would leave the opponent with no
//! seeds at all is refused unless every move does so. A player with an
//! empty row cannot move and the game is over.
//!
//! ## Design
//!
//! - **Reversible moves**: search applies a move in place and undoes it,
//!   so a whole tree is explored on one board per thread.
//!
//! - **Deterministic search**: ties go to the lowest cell, with or without
//!   alpha-beta and parallel root search.
//!
//! - **Observers, not printing**: rule decisions are reported as
//!   [`RuleEvent`]s to a [`RuleObserver`]; the default forwards to `log`.
//!
//! ## Modules
//!
//! - `core`: players, the board, moves, RNG
//! - `rules`: sowing, captures, end of game, anti-starvation
//! - `search`: line enumeration and minimax
//! - `game`: a full match with agents
//! - `error`: error types

pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;

pub use crate::core::{Board, GameRng, Move, MoveRecord, PlayerId, PlayerPair, Row};

pub use crate::error::{BoardError, MoveError};

pub use crate::rules::{
    apply, has_valid_move, is_end, is_starving, legal_moves, play, undo, EventLog, LogObserver,
    NullObserver, RuleEvent, RuleObserver, Undo,
};

pub use crate::search::{
    enumerate, min_max, suggest, Algorithm, Line, SearchConfig, SearchResult, SearchStats,
    Searcher,
};

pub use crate::game::{
    play_out, Agent, Game, GameBuilder, GameResult, MinimaxAgent, PlayOutcome, RandomAgent,
};
