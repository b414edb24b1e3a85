//! King move generation, including castling candidates.

use crate::board::state::Board;
use crate::board::types::{Color, Move, MoveList, Piece, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// One-step king moves, plus castling candidates when
    /// `include_castling` is set.
    ///
    /// Castling here checks only the static preconditions: the right is
    /// still held, the lane between king and rook is clear, and the rook
    /// actually stands on its corner. Attack constraints on the king's
    /// path are the legality filter's job.
    pub(crate) fn king_moves(
        &self,
        from: Square,
        color: Color,
        include_castling: bool,
        moves: &mut MoveList,
    ) {
        for (dr, df) in KING_OFFSETS {
            let rank = from.rank() as isize + dr;
            let file = from.file() as isize + df;
            if !(0..8).contains(&rank) || !(0..8).contains(&file) {
                continue;
            }
            let to = Square(rank as usize, file as usize);
            match self.piece_at(to) {
                Some((occupant, _)) if occupant == color => {}
                _ => moves.push(Move::new(from, to, Piece::King)),
            }
        }

        if !include_castling {
            return;
        }
        let back = color.back_rank();
        if from != Square(back, 4) {
            return;
        }

        if self.castling.has(color, true)
            && self.is_empty(Square(back, 5))
            && self.is_empty(Square(back, 6))
            && self.piece_at(Square(back, 7)) == Some((color, Piece::Rook))
        {
            moves.push(Move::castle(from, Square(back, 6)));
        }

        if self.castling.has(color, false)
            && self.is_empty(Square(back, 1))
            && self.is_empty(Square(back, 2))
            && self.is_empty(Square(back, 3))
            && self.piece_at(Square(back, 0)) == Some((color, Piece::Rook))
        {
            moves.push(Move::castle(from, Square(back, 2)));
        }
    }
}
