//! Pawn move generation.

use crate::board::state::Board;
use crate::board::types::{Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// Pushes, double pushes, captures, en-passant captures, and
    /// promotions for the pawn on `from`.
    pub(crate) fn pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();
        let forward_rank = from.rank() as isize + dir;
        if !(0..8).contains(&forward_rank) {
            return;
        }

        let forward = Square(forward_rank as usize, from.file());
        if self.is_empty(forward) {
            if forward.rank() == promotion_rank {
                for kind in PROMOTION_PIECES {
                    moves.push(Move::promotion(from, forward, kind));
                }
            } else {
                moves.push(Move::new(from, forward, Piece::Pawn));
                if from.rank() == color.pawn_start_rank() {
                    let double = Square((from.rank() as isize + 2 * dir) as usize, from.file());
                    if self.is_empty(double) {
                        moves.push(Move::double_push(from, double));
                    }
                }
            }
        }

        for side in [-1isize, 1] {
            let capture_file = from.file() as isize + side;
            if !(0..8).contains(&capture_file) {
                continue;
            }
            let target = Square(forward_rank as usize, capture_file as usize);
            match self.piece_at(target) {
                Some((occupant, _)) => {
                    if occupant != color {
                        if target.rank() == promotion_rank {
                            for kind in PROMOTION_PIECES {
                                moves.push(Move::promotion(from, target, kind));
                            }
                        } else {
                            moves.push(Move::new(from, target, Piece::Pawn));
                        }
                    }
                }
                None => {
                    if self.en_passant_target == Some(target) {
                        moves.push(Move::en_passant(from, target));
                    }
                }
            }
        }
    }
}
