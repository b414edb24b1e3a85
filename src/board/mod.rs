//! Chess board representation and rules.
//!
//! An 8x8 mailbox board with full rules support: castling, en passant,
//! promotions, check, checkmate, and stalemate. The board itself is
//! turn-agnostic; every query names the acting color, and the game layer
//! in [`crate::engine`] owns turn order.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod eval;
mod layout;
mod make_unmake;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{LayoutError, SquareParseError};
pub use layout::START_LAYOUT;
pub use state::{Board, UndoState};
pub use types::{CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square};

// Public API - search entry point and configuration
pub use search::{
    search, SearchConfig, SearchInfoCallback, SearchIterationInfo, SearchOutcome,
    DEFAULT_TIME_LIMIT_MS,
};
