//! Attack and check detection.

use crate::board::state::Board;
use crate::board::types::{Color, MoveList, Square};

impl Board {
    /// True when some piece of `by` has `target` in its raw move set.
    ///
    /// "Raw" means generation with castling suppressed; castling is itself
    /// conditioned on attacks and may not recurse into this test. The
    /// membership test mirrors generation exactly, so a square a pawn
    /// could push to counts as attacked while it is empty.
    #[must_use]
    pub(crate) fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                match self.piece_at(from) {
                    Some((color, piece)) if color == by => {
                        let mut moves = MoveList::new();
                        self.collect_pseudo_moves(from, color, piece, false, &mut moves);
                        if moves.iter().any(|m| m.to == target) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// True when `color`'s king is attacked.
    ///
    /// Panics if `color` has no king; see [`Board::king_square`].
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}
