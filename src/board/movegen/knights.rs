//! Knight move generation.

use crate::board::state::Board;
use crate::board::types::{Color, Move, MoveList, Piece, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (dr, df) in KNIGHT_OFFSETS {
            let rank = from.rank() as isize + dr;
            let file = from.file() as isize + df;
            if !(0..8).contains(&rank) || !(0..8).contains(&file) {
                continue;
            }
            let to = Square(rank as usize, file as usize);
            match self.piece_at(to) {
                Some((occupant, _)) if occupant == color => {}
                _ => moves.push(Move::new(from, to, Piece::Knight)),
            }
        }
    }
}
