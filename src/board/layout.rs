//! Parsing and serializing piece layouts.
//!
//! A layout is the placement field of a FEN string: eight ranks from rank 8
//! down to rank 1, separated by '/', with digits 1-8 for runs of empty
//! squares and piece letters whose case gives the color. Layouts carry no
//! turn, rights, or move counters; a freshly parsed board holds full
//! castling rights (pared down by the rook and king preconditions at
//! generation time) and no en-passant window.

use super::error::LayoutError;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Square};

/// Placement for a new game
pub const START_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a layout string into a board.
    pub fn from_layout(layout: &str) -> Result<Board, LayoutError> {
        let ranks: Vec<&str> = layout.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::BadRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // layouts list rank 8 first
            let rank = 7 - rank_idx;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(LayoutError::UnknownSymbol { symbol: c });
                    }
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c)
                        .ok_or(LayoutError::UnknownSymbol { symbol: c })?;
                    if file >= 8 {
                        return Err(LayoutError::BadRankWidth {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    board.place(Square(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(LayoutError::BadRankWidth {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        board.castling = CastlingRights::all();
        Ok(board)
    }

    /// Serialize the placement back into layout form.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut ranks: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_layout_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            ranks.push(row);
        }
        ranks.join("/")
    }
}
