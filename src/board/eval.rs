//! Static position evaluation: material plus fixed placement bonuses.

use super::state::Board;
use super::types::{Color, Piece, Square};

impl Board {
    /// Score the position from `perspective`'s point of view, in
    /// centipawns. Own pieces add their value, the opponent's subtract;
    /// the start position scores 0 for both sides.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        let mut total = 0;
        for rank in 0..8 {
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    let value = piece.value() + positional_bonus(piece, color, rank, file);
                    if color == perspective {
                        total += value;
                    } else {
                        total -= value;
                    }
                }
            }
        }
        total
    }
}

/// Placement term for one piece. Ranks are normalized to the piece's own
/// frame, so `rel_rank` 0 is always that color's back rank.
fn positional_bonus(piece: Piece, color: Color, rank: usize, file: usize) -> i32 {
    let rel_rank = match color {
        Color::White => rank,
        Color::Black => 7 - rank,
    };
    match piece {
        // pawns gain as they advance
        Piece::Pawn => 10 * rel_rank as i32,
        Piece::Knight => -5 * center_distance(rank, file),
        Piece::Bishop => -3 * center_distance(rank, file),
        // rooks like the central files
        Piece::Rook => {
            if file == 3 || file == 4 {
                10
            } else {
                0
            }
        }
        Piece::Queen => -2 * center_distance(rank, file),
        // the king belongs on its own two back ranks
        Piece::King => {
            if rel_rank < 2 {
                20
            } else {
                0
            }
        }
    }
}

/// Manhattan distance from the board center. The center falls between
/// squares, so distances are computed on doubled coordinates and halved;
/// the two odd terms always sum to an even number.
fn center_distance(rank: usize, file: usize) -> i32 {
    ((2 * rank as i32 - 7).abs() + (2 * file as i32 - 7).abs()) / 2
}
