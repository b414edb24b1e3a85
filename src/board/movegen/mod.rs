//! Move generation: per-piece pseudo-legal generators, the legality
//! filter, and the perft node counter.

mod attacks;
mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

use super::state::Board;
use super::types::{Color, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves for whatever stands on `from`; empty when the
    /// square is empty.
    #[must_use]
    pub(crate) fn pseudo_moves_from(&self, from: Square, include_castling: bool) -> MoveList {
        let mut moves = MoveList::new();
        if let Some((color, piece)) = self.piece_at(from) {
            self.collect_pseudo_moves(from, color, piece, include_castling, &mut moves);
        }
        moves
    }

    pub(crate) fn collect_pseudo_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        include_castling: bool,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, moves),
            Piece::Knight => self.knight_moves(from, color, moves),
            Piece::Bishop => self.slider_moves(from, color, piece, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.slider_moves(from, color, piece, &ROOK_DIRECTIONS, moves),
            Piece::Queen => self.slider_moves(from, color, piece, &QUEEN_DIRECTIONS, moves),
            Piece::King => self.king_moves(from, color, include_castling, moves),
        }
    }

    /// Legal moves for the piece on `from`; empty when the square is
    /// empty.
    #[must_use]
    pub fn moves_from(&mut self, from: Square) -> MoveList {
        let mut legal = MoveList::new();
        let Some((color, _)) = self.piece_at(from) else {
            return legal;
        };
        let pseudo = self.pseudo_moves_from(from, true);
        self.keep_legal(color, &pseudo, &mut legal);
        legal
    }

    /// All legal moves for `color`, scanned in board order.
    #[must_use]
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let mut pseudo = MoveList::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if let Some((occupant, piece)) = self.piece_at(from) {
                    if occupant == color {
                        self.collect_pseudo_moves(from, color, piece, true, &mut pseudo);
                    }
                }
            }
        }
        let mut legal = MoveList::new();
        self.keep_legal(color, &pseudo, &mut legal);
        legal
    }

    /// Drop pseudo-legal moves that leave `color`'s own king in check.
    ///
    /// Every candidate is simulated with make/unmake. Castling is vetted
    /// first against its attack constraints: the king may not castle out
    /// of, through, or into an attacked square.
    fn keep_legal(&mut self, color: Color, pseudo: &MoveList, legal: &mut MoveList) {
        let opponent = color.opponent();
        for m in pseudo.iter() {
            if m.is_castling {
                let transit = Square(m.from.rank(), (m.from.file() + m.to.file()) / 2);
                if self.is_square_attacked(m.from, opponent)
                    || self.is_square_attacked(transit, opponent)
                    || self.is_square_attacked(m.to, opponent)
                {
                    continue;
                }
            }
            let undo = self.make_move(m);
            if !self.is_in_check(color) {
                legal.push(*m);
            }
            self.unmake_move(m, undo);
        }
    }

    /// True when `color` is in check with no legal reply.
    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// True when `color` has no legal move but is not in check.
    #[must_use]
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Count leaf nodes of the legal move tree, `side` to act first.
    #[must_use]
    pub fn perft(&mut self, depth: u32, side: Color) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(side);
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for m in moves.iter() {
            let undo = self.make_move(m);
            nodes += self.perft(depth - 1, side.opponent());
            self.unmake_move(m, undo);
        }
        nodes
    }
}
