//! Playing whole games.
//!
//! [`Game`] tracks turn order and captured seeds around a [`Board`](crate::core::Board)
//! and enforces the anti-starvation rule on requested moves. [`Agent`]s pick
//! moves and [`play_out`] lets two of them finish a game.

pub mod agent;
pub mod state;

pub use agent::{play_out, Agent, MinimaxAgent, RandomAgent};
pub use state::{Game, GameBuilder, GameResult, PlayOutcome};
