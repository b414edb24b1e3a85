//! Applying and reverting moves.
//!
//! `make_move` hands back an [`UndoState`] holding exactly what it
//! destroyed: the captured piece, the prior castling rights, and the prior
//! en-passant window. `unmake_move` consumes it to restore the position
//! bit for bit, so search can walk the tree on a single board instead of
//! snapshotting.

use super::state::{Board, UndoState};
use super::types::{Color, Move, Piece, Square};

impl Board {
    /// Apply `m` and return what is needed to take it back.
    pub fn make_move(&mut self, m: &Move) -> UndoState {
        let (color, piece) = self
            .piece_at(m.from)
            .expect("make_move from an empty square");
        let previous_castling = self.castling;
        let previous_en_passant = self.en_passant_target;

        // the en-passant victim stands beside the destination, not on it
        let captured = if m.is_en_passant {
            let victim = Square(en_passant_victim_rank(color, m.to), m.to.file());
            let taken = self.piece_at(victim);
            self.remove(victim);
            taken
        } else {
            let taken = self.piece_at(m.to);
            if taken.is_some() {
                self.remove(m.to);
            }
            taken
        };

        self.remove(m.from);
        self.place(m.to, color, m.promotion.unwrap_or(piece));

        // castling also relocates the rook: h-file to f, or a-file to d
        if m.is_castling {
            let (rook_from, rook_to) = if m.to.file() == 6 { (7, 5) } else { (0, 3) };
            let corner = Square(m.to.rank(), rook_from);
            let (rook_color, rook) = self
                .piece_at(corner)
                .expect("castling with no rook on the corner");
            self.remove(corner);
            self.place(Square(m.to.rank(), rook_to), rook_color, rook);
        }

        // rights fall when the king moves or a rook leaves its corner
        if piece == Piece::King {
            self.castling.remove(color, true);
            self.castling.remove(color, false);
        } else if piece == Piece::Rook {
            let back = color.back_rank();
            if m.from == Square(back, 0) {
                self.castling.remove(color, false);
            } else if m.from == Square(back, 7) {
                self.castling.remove(color, true);
            }
        }

        // a capture on a home corner takes the victim's right with it
        if let Some((victim_color, Piece::Rook)) = captured {
            let back = victim_color.back_rank();
            if m.to == Square(back, 0) {
                self.castling.remove(victim_color, false);
            } else if m.to == Square(back, 7) {
                self.castling.remove(victim_color, true);
            }
        }

        // a double push opens the skipped square for exactly one ply
        self.en_passant_target = if m.is_double_push {
            Some(Square((m.from.rank() + m.to.rank()) / 2, m.from.file()))
        } else {
            None
        };

        UndoState {
            captured,
            previous_castling,
            previous_en_passant,
        }
    }

    /// Revert `m`, restoring the position `make_move` started from.
    pub fn unmake_move(&mut self, m: &Move, undo: UndoState) {
        let (color, placed) = self
            .piece_at(m.to)
            .expect("unmake_move with an empty destination");
        self.remove(m.to);

        // a promoted piece goes back to being a pawn
        let piece = if m.promotion.is_some() {
            Piece::Pawn
        } else {
            placed
        };
        self.place(m.from, color, piece);

        if m.is_castling {
            let (rook_home, rook_hop) = if m.to.file() == 6 { (7, 5) } else { (0, 3) };
            let hop = Square(m.to.rank(), rook_hop);
            let (rook_color, rook) = self
                .piece_at(hop)
                .expect("unmake castling with no rook beside the king");
            self.remove(hop);
            self.place(Square(m.to.rank(), rook_home), rook_color, rook);
        } else if m.is_en_passant {
            if let Some((victim_color, victim)) = undo.captured {
                let victim_sq = Square(en_passant_victim_rank(color, m.to), m.to.file());
                self.place(victim_sq, victim_color, victim);
            }
        } else if let Some((victim_color, victim)) = undo.captured {
            self.place(m.to, victim_color, victim);
        }

        self.castling = undo.previous_castling;
        self.en_passant_target = undo.previous_en_passant;
    }
}

/// Rank of the pawn removed by an en-passant capture landing on `to`.
fn en_passant_victim_rank(capturing: Color, to: Square) -> usize {
    match capturing {
        Color::White => to.rank() - 1,
        Color::Black => to.rank() + 1,
    }
}
