//! Sliding piece move generation: bishops, rooks, and queens share one
//! ray walk over their direction sets.

use crate::board::state::Board;
use crate::board::types::{Color, Move, MoveList, Piece, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Walk each ray until the edge, a blocker, or a capture.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut rank = from.rank() as isize + dr;
            let mut file = from.file() as isize + df;
            while (0..8).contains(&rank) && (0..8).contains(&file) {
                let to = Square(rank as usize, file as usize);
                match self.piece_at(to) {
                    Some((occupant, _)) => {
                        if occupant != color {
                            moves.push(Move::new(from, to, piece));
                        }
                        break;
                    }
                    None => moves.push(Move::new(from, to, piece)),
                }
                rank += dr;
                file += df;
            }
        }
    }
}
