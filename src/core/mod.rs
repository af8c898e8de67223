//! Core types: players, the board, moves, RNG.
//!
//! This module holds plain data with invariants and no game rules. The
//! rules that act on a board live in [`crate::rules`].

pub mod action;
pub mod board;
pub mod player;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use board::{Board, Row, MAX_SEEDS, STANDARD_PITS, STANDARD_SEEDS};
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
