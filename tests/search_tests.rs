//! Search integration tests: enumeration, minimax, alpha-beta, parallel root.

use std::sync::Arc;
use std::time::Duration;

use rust_awale::core::{Board, PlayerId, PlayerPair};
use rust_awale::rules::{EventLog, NullObserver, RuleEvent};
use rust_awale::search::{
    enumerate, enumerate_with, min_max, suggest, Algorithm, SearchConfig, SearchResult, Searcher,
};

const P0: PlayerId = PlayerId::FIRST;
const P1: PlayerId = PlayerId::SECOND;

// =============================================================================
// Minimax
// =============================================================================

#[test]
fn test_depth_zero_scores_totals_only() {
    for board in [Board::standard(), Board::new([0, 0], [0, 1]).unwrap()] {
        for player in PlayerId::all() {
            let result = min_max(&board, player, 0, PlayerPair::new(10, 4));
            assert_eq!(result, SearchResult { score: 6, best_move: None });
            assert_eq!(result.cell_or_sentinel(), -1);
        }
    }
}

#[test]
fn test_forced_capture_at_depth_one() {
    let board = Board::new([0, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 0]).unwrap();
    let result = min_max(&board, P0, 1, PlayerPair::default());
    assert_eq!(result, SearchResult { score: 4, best_move: Some(5) });
}

#[test]
fn test_totals_shift_the_score() {
    let board = Board::new([0, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 0]).unwrap();
    let result = min_max(&board, P0, 3, PlayerPair::new(1, 9));
    // 1 + 4 captured by P0, 9 by P1; P1 is then out of seeds.
    assert_eq!(result, SearchResult { score: -4, best_move: Some(5) });
}

#[test]
fn test_opponent_reply_is_considered() {
    // Neither P0 move captures. After cell 1, P1's only reply lands on
    // P0 cell 2 holding 2 seeds and captures them; after cell 0 it does not.
    let board = Board::new([1, 1, 0], [0, 0, 3]).unwrap();

    let lines = enumerate(&board, P0, 2);
    let scores: Vec<_> = lines
        .iter()
        .map(|line| (line.moves.as_slice().to_vec(), line.score))
        .collect();
    assert_eq!(scores, vec![(vec![0, 2], 0), (vec![1, 2], -2)]);

    let deep = min_max(&board, P0, 2, PlayerPair::default());
    assert_eq!(deep, SearchResult { score: 0, best_move: Some(0) });

    // At depth 1 both moves look equal.
    let shallow = min_max(&board, P0, 1, PlayerPair::default());
    assert_eq!(shallow.score, 0);
}

#[test]
fn test_suggest_matches_min_max() {
    let board = Board::new([3, 1, 2, 0, 4, 1], [2, 0, 1, 3, 1, 2]).unwrap();
    for player in PlayerId::all() {
        for depth in 0..4 {
            assert_eq!(
                suggest(&board, player, depth),
                min_max(&board, player, depth, PlayerPair::default()).best_move
            );
        }
    }
}

#[test]
fn test_suggest_without_seeds() {
    let board = Board::new([0, 0, 0], [1, 2, 3]).unwrap();
    assert_eq!(suggest(&board, P0, 4), None);
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn test_enumeration_covers_every_first_move() {
    let board = Board::standard();
    let lines = enumerate(&board, P0, 2);

    assert_eq!(lines.len(), 36);
    assert!(lines.iter().all(|line| line.moves.len() == 2));
    assert!(lines.windows(2).all(|w| w[0].moves <= w[1].moves));
}

#[test]
fn test_depth_one_score_is_best_line() {
    let board = Board::new([1, 0, 0, 0, 0, 2], [1, 1, 0, 0, 0, 1]).unwrap();
    for player in PlayerId::all() {
        let lines = enumerate(&board, player, 1);
        let scores = lines.iter().map(|line| line.score);
        let expected = if player == P0 { scores.max() } else { scores.min() };
        assert_eq!(
            Some(min_max(&board, player, 1, PlayerPair::default()).score),
            expected
        );
    }
}

#[test]
fn test_enumeration_reports_skipped_moves() {
    let board = Board::new([1, 0, 1], [1, 0, 0]).unwrap();
    let log = EventLog::new();

    let lines = enumerate_with(&board, P0, 1, &log);

    assert_eq!(lines.len(), 1);
    assert_eq!(
        log.events(),
        vec![RuleEvent::StarvingMoveSkipped { player: P0, cell: 2 }]
    );
}

// =============================================================================
// Searcher
// =============================================================================

#[test]
fn test_algorithms_agree_on_opening() {
    let board = Board::standard();
    for depth in 1..=5 {
        let plain = Searcher::new(SearchConfig::new(depth)).search(&board, P0);
        let pruned = Searcher::new(SearchConfig::new(depth).with_algorithm(Algorithm::AlphaBeta))
            .search(&board, P0);
        let parallel = Searcher::new(
            SearchConfig::new(depth)
                .with_algorithm(Algorithm::AlphaBeta)
                .with_parallel(true),
        )
        .search(&board, P0);

        assert_eq!(plain, pruned, "depth {depth}");
        assert_eq!(plain, parallel, "depth {depth}");
    }
}

#[test]
fn test_searcher_reuse_resets_stats() {
    let board = Board::standard();
    let mut searcher = Searcher::new(SearchConfig::new(2)).with_observer(NullObserver);

    searcher.search(&board, P0);
    let first = searcher.stats().nodes;
    searcher.search(&board, P1);

    assert_eq!(searcher.stats().nodes, first);
    assert_eq!(searcher.config().depth, 2);
}

#[test]
fn test_searcher_reports_skips_to_observer() {
    let log = Arc::new(EventLog::new());
    let board = Board::new([1, 0, 1], [1, 0, 0]).unwrap();
    let mut searcher = Searcher::new(SearchConfig::new(1)).with_observer(log.clone());

    let result = searcher.search(&board, P0);

    assert_eq!(result.best_move, Some(0));
    assert_eq!(searcher.stats().starving_skipped, 1);
    assert_eq!(log.len(), 1);
}

#[test]
fn test_time_limited_search_returns_move() {
    let board = Board::standard();
    let mut searcher = Searcher::new(
        SearchConfig::new(6).with_time_limit(Duration::from_millis(1)),
    );

    let result = searcher.search(&board, P1);

    assert!(result.best_move.is_some());
    assert!(searcher.stats().depth_reached >= 1);
    assert!(searcher.stats().depth_reached <= 6);
}
