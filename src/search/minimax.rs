//! Depth-limited minimax over net captured seeds.
//!
//! The value of a position is the seeds captured by player 0 minus those
//! captured by player 1 along the line. Player 0 maximizes, player 1
//! minimizes. There is no static evaluation: a depth cutoff scores the
//! captures accumulated so far.
//!
//! Ties go to the first move in cell order (strict comparison), for every
//! algorithm and for parallel search.
//!
//! The search runs in place on one board per worker: each move is applied,
//! searched, and undone before its sibling is tried.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Board, PlayerId, PlayerPair};
use crate::rules::{admissible_moves, apply_unchecked, is_end, undo, LogObserver, RuleObserver};

use super::config::{Algorithm, SearchConfig};
use super::stats::SearchStats;

/// Score and chosen move of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Net captures (player 0 minus player 1) under best play.
    pub score: i64,

    /// Best cell for the side to move, `None` when it has no move.
    pub best_move: Option<usize>,
}

impl SearchResult {
    /// The value of a position that is not expanded.
    #[must_use]
    pub fn leaf(totals: &PlayerPair<i64>) -> Self {
        Self {
            score: totals[PlayerId::FIRST] - totals[PlayerId::SECOND],
            best_move: None,
        }
    }

    /// The best cell as a signed index, `-1` when there is no move.
    #[must_use]
    pub fn cell_or_sentinel(&self) -> i64 {
        self.best_move.map_or(-1, |cell| cell as i64)
    }
}

/// Configured search context.
///
/// ## Example
///
/// ```
/// use rust_awale::core::{Board, PlayerId};
/// use rust_awale::search::{Algorithm, SearchConfig, Searcher};
///
/// let board = Board::new([0, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 0]).unwrap();
/// let mut searcher = Searcher::new(SearchConfig::new(3).with_algorithm(Algorithm::AlphaBeta));
///
/// let result = searcher.search(&board, PlayerId::FIRST);
/// assert_eq!(result.best_move, Some(5));
/// assert!(searcher.stats().nodes > 0);
/// ```
pub struct Searcher {
    config: SearchConfig,
    observer: Box<dyn RuleObserver>,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that logs rule events.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            observer: Box::new(LogObserver),
            stats: SearchStats::default(),
        }
    }

    /// Send rule events to a custom observer.
    #[must_use]
    pub fn with_observer<O: RuleObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Search from `board` with `player` to move and nothing captured yet.
    pub fn search(&mut self, board: &Board, player: PlayerId) -> SearchResult {
        self.search_from(board, player, PlayerPair::with_default())
    }

    /// Search from `board` with `player` to move, starting from the given
    /// capture totals.
    pub fn search_from(
        &mut self,
        board: &Board,
        player: PlayerId,
        totals: PlayerPair<i64>,
    ) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        // A limit too large to represent as an instant is no limit at all.
        let deadline = self
            .config
            .time_limit
            .and_then(|limit| start.checked_add(limit));

        let result = match deadline {
            Some(deadline) if self.config.depth > 0 => self.deepen(board, player, &totals, deadline),
            _ => {
                let (result, stats) = self.run(board, player, self.config.depth, &totals, None);
                self.stats.merge(&stats);
                self.stats.depth_reached = self.config.depth;
                result
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "searched {} to depth {}: score {}, move {:?}, {} nodes",
            player,
            self.stats.depth_reached,
            result.score,
            result.best_move,
            self.stats.nodes
        );
        result
    }

    /// Iterative deepening under a deadline. Keeps the deepest result that
    /// finished. Depth 1 always finishes: the root is never cut and its
    /// children are depth-0 leaves.
    fn deepen(
        &mut self,
        board: &Board,
        player: PlayerId,
        totals: &PlayerPair<i64>,
        deadline: Instant,
    ) -> SearchResult {
        let mut best = SearchResult::leaf(totals);
        for depth in 1..=self.config.depth {
            let (result, stats) = self.run(board, player, depth, totals, Some(deadline));
            self.stats.merge(&stats);

            if stats.timed_out {
                log::info!("deadline reached during depth {depth}, keeping depth {}", self.stats.depth_reached);
                break;
            }

            best = result;
            self.stats.depth_reached = depth;
            log::debug!("depth {depth} complete: score {}, move {:?}", best.score, best.best_move);
        }
        best
    }

    fn run(
        &self,
        board: &Board,
        player: PlayerId,
        depth: u32,
        totals: &PlayerPair<i64>,
        deadline: Option<Instant>,
    ) -> (SearchResult, SearchStats) {
        let mut worker = Worker {
            observer: self.observer.as_ref(),
            algorithm: self.config.algorithm,
            deadline,
            stats: SearchStats::default(),
        };
        let mut scratch = board.clone();

        let result = if self.config.parallel {
            worker.root_parallel(&mut scratch, player, depth, totals)
        } else {
            worker.node(&mut scratch, player, depth, 0, totals, i64::MIN, i64::MAX)
        };
        (result, worker.stats)
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Minimax from `board` with `player` to move and the given running totals.
///
/// At depth 0, or when `player` has no seeds, returns
/// `(total_0 - total_1, None)` without expanding anything.
#[must_use]
pub fn min_max(
    board: &Board,
    player: PlayerId,
    depth: u32,
    totals: PlayerPair<i64>,
) -> SearchResult {
    Searcher::new(SearchConfig::new(depth)).search_from(board, player, totals)
}

/// Best move for `player` at the given depth, `None` when there is none.
///
/// ```
/// use rust_awale::core::{Board, PlayerId};
/// use rust_awale::search::suggest;
///
/// let board = Board::new([1, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 1]).unwrap();
/// assert_eq!(suggest(&board, PlayerId::FIRST, 1), Some(5));
/// ```
#[must_use]
pub fn suggest(board: &Board, player: PlayerId, depth: u32) -> Option<usize> {
    min_max(board, player, depth, PlayerPair::with_default()).best_move
}

/// One thread's view of a search: borrowed settings plus its own counters.
struct Worker<'a> {
    observer: &'a dyn RuleObserver,
    algorithm: Algorithm,
    deadline: Option<Instant>,
    stats: SearchStats,
}

impl Worker<'_> {
    #[allow(clippy::too_many_arguments)]
    fn node(
        &mut self,
        board: &mut Board,
        player: PlayerId,
        depth: u32,
        ply: u32,
        totals: &PlayerPair<i64>,
        mut alpha: i64,
        mut beta: i64,
    ) -> SearchResult {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 || is_end(board, player) {
            self.stats.leaves += 1;
            return SearchResult::leaf(totals);
        }
        // The root always expands so that a move is available.
        if ply > 0 && self.expired() {
            self.stats.timed_out = true;
            self.stats.leaves += 1;
            return SearchResult::leaf(totals);
        }

        let (moves, skipped) = admissible_moves(board, player, self.observer);
        self.stats.starving_skipped += u64::from(skipped);

        let maximizing = player == PlayerId::FIRST;
        let mut best = SearchResult {
            score: if maximizing { i64::MIN } else { i64::MAX },
            best_move: None,
        };

        for cell in moves {
            let record = apply_unchecked(board, player, cell);
            let mut child_totals = totals.clone();
            child_totals[player] += i64::from(record.captured());

            let child = self.node(
                board,
                player.opponent(),
                depth - 1,
                ply + 1,
                &child_totals,
                alpha,
                beta,
            );
            undo(board, &record);

            if improves(maximizing, child.score, best.score) {
                best = SearchResult {
                    score: child.score,
                    best_move: Some(cell),
                };
            }

            if self.algorithm == Algorithm::AlphaBeta {
                if maximizing {
                    alpha = alpha.max(best.score);
                } else {
                    beta = beta.min(best.score);
                }
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        if best.best_move.is_none() {
            return SearchResult::leaf(totals);
        }
        best
    }

    /// Fan root moves out to the rayon pool, then reduce in cell order.
    fn root_parallel(
        &mut self,
        board: &mut Board,
        player: PlayerId,
        depth: u32,
        totals: &PlayerPair<i64>,
    ) -> SearchResult {
        self.stats.nodes += 1;
        if depth == 0 || is_end(board, player) {
            self.stats.leaves += 1;
            return SearchResult::leaf(totals);
        }

        let (moves, skipped) = admissible_moves(board, player, self.observer);
        self.stats.starving_skipped += u64::from(skipped);

        let root: &Board = board;
        let observer = self.observer;
        let algorithm = self.algorithm;
        let deadline = self.deadline;

        let branches: Vec<(usize, i64, SearchStats)> = moves
            .as_slice()
            .par_iter()
            .map(|&cell| {
                let mut branch = root.clone();
                let record = apply_unchecked(&mut branch, player, cell);
                let mut child_totals = totals.clone();
                child_totals[player] += i64::from(record.captured());

                let mut worker = Worker {
                    observer,
                    algorithm,
                    deadline,
                    stats: SearchStats::default(),
                };
                let child = worker.node(
                    &mut branch,
                    player.opponent(),
                    depth - 1,
                    1,
                    &child_totals,
                    i64::MIN,
                    i64::MAX,
                );
                (cell, child.score, worker.stats)
            })
            .collect();

        let maximizing = player == PlayerId::FIRST;
        let mut best: Option<SearchResult> = None;
        for (cell, score, stats) in branches {
            self.stats.merge(&stats);
            if best.map_or(true, |b| improves(maximizing, score, b.score)) {
                best = Some(SearchResult {
                    score,
                    best_move: Some(cell),
                });
            }
        }
        best.unwrap_or_else(|| SearchResult::leaf(totals))
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[inline]
fn improves(maximizing: bool, candidate: i64, incumbent: i64) -> bool {
    if maximizing {
        candidate > incumbent
    } else {
        candidate < incumbent
    }
}
