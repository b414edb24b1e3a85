//! Search behavior: mates, captures, budgets, and progress reporting.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::search::{search, SearchConfig, SearchIterationInfo, DEFAULT_TIME_LIMIT_MS};
use crate::board::{Board, Color, Square};

#[test]
fn test_config_defaults_to_the_standard_budget() {
    assert_eq!(SearchConfig::default().time_limit_ms, DEFAULT_TIME_LIMIT_MS);
    assert_eq!(SearchConfig::time(250).time_limit_ms, 250);
}

#[test]
fn test_finds_back_rank_mate_in_one() {
    let mut board = Board::from_layout("6k1/5ppp/8/8/8/8/8/4Q2K").unwrap();
    let outcome = search(&mut board, Color::White, &SearchConfig::time(500));
    let best = outcome.best_move.unwrap();
    assert_eq!(best.from, Square(0, 4));
    assert_eq!(best.to, Square(7, 4));
}

#[test]
fn test_finds_mate_in_one_for_black() {
    let mut board = Board::from_layout("k3q3/8/8/8/8/8/5PPP/6K1").unwrap();
    let outcome = search(&mut board, Color::Black, &SearchConfig::time(500));
    let best = outcome.best_move.unwrap();
    assert_eq!(best.from, Square(7, 4));
    assert_eq!(best.to, Square(0, 4));
}

#[test]
fn test_immediate_mate_reports_the_sentinel_and_stops() {
    let reports: Arc<Mutex<Vec<SearchIterationInfo>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reports);
    let config = SearchConfig::time(500)
        .with_info_callback(Arc::new(move |info| sink.lock().push(*info)));

    let mut board = Board::from_layout("6k1/5ppp/8/8/8/8/8/4Q2K").unwrap();
    let outcome = search(&mut board, Color::White, &config);

    // a mating move ends the deepening immediately; one report, score 10000
    let reports = reports.lock();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].depth, 1);
    assert_eq!(reports[0].score, 10_000);
    assert_eq!(outcome.depth, 1);
}

#[test]
fn test_takes_the_hanging_queen() {
    let reports: Arc<Mutex<Vec<SearchIterationInfo>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reports);
    let config = SearchConfig::time(300)
        .with_info_callback(Arc::new(move |info| sink.lock().push(*info)));

    let mut board = Board::from_layout("7k/8/8/8/3q4/8/8/3Q3K").unwrap();
    let outcome = search(&mut board, Color::White, &config);
    let best = outcome.best_move.unwrap();
    assert_eq!(best.from, Square(0, 3));
    assert_eq!(best.to, Square(3, 3));
    assert!(outcome.nodes > 0);

    // the queen stays won at every completed depth; deepening never
    // trades the capture away for something worse
    let reports = reports.lock();
    assert!(!reports.is_empty());
    for info in reports.iter() {
        assert!(info.score > 800, "depth {} scored {}", info.depth, info.score);
    }
}

#[test]
fn test_no_legal_moves_yields_no_move() {
    // stalemate
    let mut board = Board::from_layout("7k/5Q2/6K1/8/8/8/8/8").unwrap();
    let outcome = search(&mut board, Color::Black, &SearchConfig::time(100));
    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.depth, 0);
    assert_eq!(outcome.nodes, 0);

    // checkmate
    let mut board = Board::from_layout("R5k1/5ppp/8/8/8/8/8/6K1").unwrap();
    let outcome = search(&mut board, Color::Black, &SearchConfig::time(100));
    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.depth, 0);
}

#[test]
fn test_exhausted_budget_still_returns_a_depth_one_move() {
    // depth 1 ignores the deadline, so even a zero budget yields a move
    let mut board = Board::new();
    let outcome = search(&mut board, Color::White, &SearchConfig::time(0));
    assert!(outcome.best_move.is_some());
    assert_eq!(outcome.depth, 1);
}

#[test]
fn test_iteration_reports_deepen_one_at_a_time() {
    let reports: Arc<Mutex<Vec<SearchIterationInfo>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reports);
    let config = SearchConfig::time(300)
        .with_info_callback(Arc::new(move |info| sink.lock().push(*info)));

    let mut board = Board::new();
    let outcome = search(&mut board, Color::White, &config);

    let reports = reports.lock();
    assert!(!reports.is_empty());
    assert_eq!(reports[0].depth, 1);
    for pair in reports.windows(2) {
        assert_eq!(pair[1].depth, pair[0].depth + 1);
        assert!(pair[1].nodes >= pair[0].nodes);
    }

    // the outcome mirrors the deepest completed iteration
    let last = reports.last().unwrap();
    assert_eq!(outcome.depth, last.depth);
    assert_eq!(outcome.best_move, Some(last.best));
    assert!(outcome.nodes >= last.nodes);
}

#[test]
fn test_deeper_search_refuses_a_poisoned_pawn() {
    // the d5 pawn hangs to the queen but c6 recaptures; depth 1 sees
    // only the gain, depth 2 sees the queen come off
    let mut board = Board::from_layout("7k/8/2p5/3p4/8/8/8/3Q3K").unwrap();
    let outcome = search(&mut board, Color::White, &SearchConfig::time(400));
    let best = outcome.best_move.unwrap();
    assert!(outcome.depth >= 2);
    assert_ne!(best.to, Square(4, 3), "took the defended pawn");
}
