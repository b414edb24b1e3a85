//! Board state: the 8x8 piece grid plus castling rights and the
//! en-passant window.

use once_cell::sync::Lazy;

use super::layout::START_LAYOUT;
use super::types::{CastlingRights, Color, Piece, Square};

static START_POSITION: Lazy<Board> = Lazy::new(|| {
    Board::from_layout(START_LAYOUT).expect("start layout is well formed")
});

/// Everything `make_move` clobbers that cannot be recomputed, captured so
/// `unmake_move` can restore the position exactly.
#[derive(Clone, Copy, Debug)]
pub struct UndoState {
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_castling: CastlingRights,
    pub(crate) previous_en_passant: Option<Square>,
}

/// A chess position: piece placement, castling rights, and the square (if
/// any) currently open to en-passant capture.
///
/// The board does not track whose turn it is; callers name the acting color
/// on every query. The game layer owns turn order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

impl Board {
    /// Board set up for a new game
    #[must_use]
    pub fn new() -> Self {
        START_POSITION.clone()
    }

    /// Board with no pieces on it
    #[must_use]
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            castling: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// The piece standing on `sq`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    /// True when nothing stands on `sq`
    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.rank()][sq.file()].is_none()
    }

    /// Put a piece on `sq`, replacing whatever was there
    #[inline]
    pub(crate) fn place(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    /// Clear `sq`
    #[inline]
    pub(crate) fn remove(&mut self, sq: Square) {
        self.squares[sq.rank()][sq.file()] = None;
    }

    /// Castling rights still held in this position
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The square a pawn may capture onto en passant, open for one ply
    /// after a double push
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Locate `color`'s king.
    ///
    /// Panics if the king is missing: no legal sequence of moves removes a
    /// king, so a board without one is corrupt and unanswerable.
    #[must_use]
    pub(crate) fn king_square(&self, color: Color) -> Square {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return sq;
                }
            }
        }
        panic!("no {color} king on the board");
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
