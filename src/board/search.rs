//! Iterative-deepening minimax search with alpha-beta pruning.
//!
//! The driver searches depth 1, then 2, and so on until the wall-clock
//! budget runs out. A depth's result is committed only if that depth ran
//! to completion; an aborted depth changes nothing, so the answer is
//! always the best move of the deepest *finished* search. Depth 1 is
//! never cut off, which guarantees a move whenever one exists.
//!
//! Time is carried as a deadline by value and consulted at two points:
//! once on entry to every node, and once per root sibling. A frame that
//! sees the deadline passed unwinds with its best-so-far value; the root
//! then discards the aborted iteration.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::state::Board;
use super::types::{Color, Move};

/// Wall-clock budget used when the caller does not pick one.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 5000;

/// Sentinel for a decided game: +10000 when the searching side mates,
/// -10000 when it is mated. Stalemate scores 0.
pub(crate) const MATE_SCORE: i32 = 10_000;

/// Per-iteration progress report passed to the info callback.
#[derive(Clone, Copy, Debug)]
pub struct SearchIterationInfo {
    /// Depth that just completed
    pub depth: u32,
    /// Score of the best move at that depth
    pub score: i32,
    /// Best move at that depth
    pub best: Move,
    /// Leaf evaluations so far, across all iterations
    pub nodes: u64,
    /// Elapsed wall-clock time since the search began
    pub time_ms: u64,
}

/// Callback invoked after each completed depth.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Search parameters.
#[derive(Clone)]
pub struct SearchConfig {
    /// Wall-clock budget in milliseconds
    pub time_limit_ms: u64,
    /// Optional per-iteration progress callback
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            info_callback: None,
        }
    }
}

impl SearchConfig {
    /// Config with a specific time budget
    #[must_use]
    pub fn time(ms: u64) -> Self {
        SearchConfig {
            time_limit_ms: ms,
            ..SearchConfig::default()
        }
    }

    /// Attach a per-iteration info callback
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// What a finished search hands back.
#[derive(Clone, Copy, Debug)]
pub struct SearchOutcome {
    /// Best move of the deepest completed iteration; `None` only when the
    /// side to move has no legal moves
    pub best_move: Option<Move>,
    /// Deepest completed iteration
    pub depth: u32,
    /// Leaf evaluations performed
    pub nodes: u64,
}

enum RootOutcome {
    /// Every root sibling was searched in time
    Complete { best: Move, score: i32 },
    /// A candidate checkmates immediately; siblings were skipped
    Mate(Move),
    /// The deadline passed mid-iteration
    Aborted,
}

struct SearchContext<'a> {
    board: &'a mut Board,
    side: Color,
    nodes: u64,
}

/// Pick the best move for `side` within `config`'s time budget.
///
/// Returns a move whenever `side` has one: depth 1 always completes. A
/// checkmate or stalemate position yields `best_move: None` at depth 0.
pub fn search(board: &mut Board, side: Color, config: &SearchConfig) -> SearchOutcome {
    let start = Instant::now();
    let deadline = start + Duration::from_millis(config.time_limit_ms);

    let mut ctx = SearchContext {
        board,
        side,
        nodes: 0,
    };
    if ctx.board.legal_moves(side).is_empty() {
        return SearchOutcome {
            best_move: None,
            depth: 0,
            nodes: 0,
        };
    }

    let mut best_move = None;
    let mut depth_reached = 0;
    let mut depth = 1;
    loop {
        // depth 1 runs without the deadline so a move is guaranteed
        let enforced = if depth == 1 { None } else { Some(deadline) };
        match ctx.search_root(depth, enforced) {
            RootOutcome::Complete { best, score } => {
                best_move = Some(best);
                depth_reached = depth;
                ctx.report(config, depth, score, best, start);
            }
            RootOutcome::Mate(best) => {
                best_move = Some(best);
                depth_reached = depth;
                ctx.report(config, depth, MATE_SCORE, best, start);
                break;
            }
            RootOutcome::Aborted => break,
        }
        if Instant::now() >= deadline {
            break;
        }
        depth += 1;
    }

    SearchOutcome {
        best_move,
        depth: depth_reached,
        nodes: ctx.nodes,
    }
}

impl SearchContext<'_> {
    /// One full-width iteration at `depth` plies.
    fn search_root(&mut self, depth: u32, deadline: Option<Instant>) -> RootOutcome {
        let moves = self.board.legal_moves(self.side);
        let mut best: Option<Move> = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for m in moves.iter() {
            if past(deadline) {
                return RootOutcome::Aborted;
            }
            let undo = self.board.make_move(m);
            if self.board.is_checkmate(self.side.opponent()) {
                self.board.unmake_move(m, undo);
                return RootOutcome::Mate(*m);
            }
            let score = self.minimax(depth - 1, false, alpha, beta, deadline);
            self.board.unmake_move(m, undo);
            // a value computed across the deadline may be cut short; drop
            // the whole iteration rather than commit it
            if past(deadline) {
                return RootOutcome::Aborted;
            }
            if score > best_score || best.is_none() {
                best_score = score;
                best = Some(*m);
            }
            alpha = alpha.max(best_score);
        }

        match best {
            Some(best) => RootOutcome::Complete {
                best,
                score: best_score,
            },
            None => RootOutcome::Aborted,
        }
    }

    /// Fail-hard alpha-beta minimax. `maximizing` is true on the
    /// searching side's turns.
    fn minimax(
        &mut self,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        deadline: Option<Instant>,
    ) -> i32 {
        if past(deadline) {
            return self.board.evaluate(self.side);
        }
        if depth == 0 {
            self.nodes += 1;
            return self.board.evaluate(self.side);
        }

        let to_move = if maximizing {
            self.side
        } else {
            self.side.opponent()
        };
        let moves = self.board.legal_moves(to_move);
        if moves.is_empty() {
            if self.board.is_in_check(to_move) {
                return if maximizing { -MATE_SCORE } else { MATE_SCORE };
            }
            return 0;
        }

        if maximizing {
            let mut best = i32::MIN;
            for m in moves.iter() {
                if past(deadline) {
                    return best;
                }
                let undo = self.board.make_move(m);
                let score = self.minimax(depth - 1, false, alpha, beta, deadline);
                self.board.unmake_move(m, undo);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for m in moves.iter() {
                if past(deadline) {
                    return best;
                }
                let undo = self.board.make_move(m);
                let score = self.minimax(depth - 1, true, alpha, beta, deadline);
                self.board.unmake_move(m, undo);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    fn report(
        &self,
        config: &SearchConfig,
        depth: u32,
        score: i32,
        best: Move,
        start: Instant,
    ) {
        let time_ms = start.elapsed().as_millis() as u64;
        #[cfg(feature = "logging")]
        log::debug!(
            "depth {depth} done: best {best} score {score} nodes {nodes} in {time_ms}ms",
            nodes = self.nodes
        );
        if let Some(callback) = &config.info_callback {
            callback(&SearchIterationInfo {
                depth,
                score,
                best,
                nodes: self.nodes,
                time_ms,
            });
        }
    }
}

/// True once the deadline (when one is enforced) has passed.
fn past(deadline: Option<Instant>) -> bool {
    deadline.map_or(false, |d| Instant::now() >= d)
}
