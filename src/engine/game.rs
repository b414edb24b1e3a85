//! Game flow: turn order, move commitment, and player callbacks.

use crate::board::{
    search, Board, Color, Move, MoveList, Piece, SearchConfig, Square,
};

/// Chooses the piece a pawn becomes. Called with the promoting color and
/// the destination square; expected to return one of queen, rook, bishop,
/// or knight (anything else falls back to queen).
pub type PromotionCallback = Box<dyn FnMut(Color, Square) -> Piece>;

/// Receives the spoken form of every committed move, e.g. `"e2 to e4"`.
pub type MoveCallback = Box<dyn FnMut(&str)>;

/// A game in progress: a board plus whose turn it is.
///
/// All move entry points go through the same commitment path, so the turn
/// flips and the move callback fires exactly once per committed move
/// regardless of who (human or computer) produced it.
pub struct Game {
    board: Board,
    turn: Color,
    promotion: PromotionCallback,
    on_move: Option<MoveCallback>,
}

impl Game {
    /// A new game from the starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            promotion: Box::new(|_, _| Piece::Queen),
            on_move: None,
        }
    }

    /// A game resumed from an arbitrary position.
    #[must_use]
    pub fn with_position(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            ..Game::new()
        }
    }

    /// Throw the position away and start over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Color::White;
    }

    /// The current position
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Replace the promotion chooser (defaults to always-queen)
    pub fn set_promotion_callback(&mut self, callback: PromotionCallback) {
        self.promotion = callback;
    }

    /// Attach a listener for committed-move notation
    pub fn set_move_callback(&mut self, callback: MoveCallback) {
        self.on_move = Some(callback);
    }

    /// Legal moves for the piece on `from`.
    ///
    /// Empty when the square is empty or holds the waiting side's piece;
    /// only the side to move has selectable pieces.
    #[must_use]
    pub fn legal_moves(&mut self, from: Square) -> MoveList {
        match self.board.piece_at(from) {
            Some((color, _)) if color == self.turn => self.board.moves_from(from),
            _ => MoveList::default(),
        }
    }

    /// Try to play the side to move's piece from `from` to `to`.
    ///
    /// Returns the committed move, or `None` when no legal move matches.
    /// A promotion consults the promotion callback to pick the new piece.
    pub fn play(&mut self, from: Square, to: Square) -> Option<Move> {
        let candidates = self.legal_moves(from);
        let matching: Vec<Move> = candidates.iter().filter(|m| m.to == to).copied().collect();

        let chosen = match matching.first() {
            None => return None,
            Some(first) if first.promotion.is_none() => *first,
            _ => {
                let kind = (self.promotion)(self.turn, to);
                *matching
                    .iter()
                    .find(|m| m.promotion == Some(kind))
                    .or_else(|| matching.iter().find(|m| m.promotion == Some(Piece::Queen)))?
            }
        };

        self.commit(chosen);
        Some(chosen)
    }

    /// Commit a move already known to be legal for the side to move.
    pub fn play_move(&mut self, mv: Move) {
        self.commit(mv);
    }

    /// Let the engine pick and play a move within `budget_ms` of wall
    /// clock. Returns the move and the search depth it came from, or
    /// `None` when the side to move has no legal moves.
    pub fn play_computer(&mut self, budget_ms: u64) -> Option<(Move, u32)> {
        let config = SearchConfig::time(budget_ms);
        let outcome = search(&mut self.board, self.turn, &config);
        let mv = outcome.best_move?;
        self.commit(mv);
        Some((mv, outcome.depth))
    }

    /// True when the side to move is in check
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.board.is_in_check(self.turn)
    }

    /// True when the side to move is checkmated
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.board.is_checkmate(self.turn)
    }

    /// True when the side to move is stalemated
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        self.board.is_stalemate(self.turn)
    }

    /// True when the game has ended, by checkmate or stalemate
    #[must_use]
    pub fn is_over(&mut self) -> bool {
        self.board.legal_moves(self.turn).is_empty()
    }

    /// The single path every move takes onto the board.
    fn commit(&mut self, mv: Move) {
        self.board.make_move(&mv);
        self.turn = self.turn.opponent();
        #[cfg(feature = "logging")]
        log::debug!("committed {mv}, {turn} to move", turn = self.turn);
        if let Some(callback) = &mut self.on_move {
            callback(&notation(&mv));
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Spoken form of a move: `"e2 to e4"`.
fn notation(mv: &Move) -> String {
    format!("{} to {}", mv.from, mv.to)
}
