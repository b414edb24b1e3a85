//! Move representation and the fixed-capacity move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// A single move: origin, destination, the moving piece's kind, and the
/// flags generation resolved for it. Captures are not marked here; the
/// board derives them when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub promotion: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub is_double_push: bool,
}

impl Move {
    /// A plain move or capture by `piece`
    #[inline]
    #[must_use]
    pub(crate) const fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            promotion: None,
            is_castling: false,
            is_en_passant: false,
            is_double_push: false,
        }
    }

    /// A pawn advancing two ranks from its starting square
    #[inline]
    #[must_use]
    pub(crate) const fn double_push(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            promotion: None,
            is_castling: false,
            is_en_passant: false,
            is_double_push: true,
        }
    }

    /// A pawn capturing en passant onto the skipped square
    #[inline]
    #[must_use]
    pub(crate) const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            promotion: None,
            is_castling: false,
            is_en_passant: true,
            is_double_push: false,
        }
    }

    /// A king castling move; `to` is the king's destination file (g or c)
    #[inline]
    #[must_use]
    pub(crate) const fn castle(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            piece: Piece::King,
            promotion: None,
            is_castling: true,
            is_en_passant: false,
            is_double_push: false,
        }
    }

    /// A pawn reaching the last rank and becoming `kind`
    #[inline]
    #[must_use]
    pub(crate) const fn promotion(from: Square, to: Square, kind: Piece) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            promotion: Some(kind),
            is_castling: false,
            is_en_passant: false,
            is_double_push: false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::new(Square(0, 0), Square(0, 0), Piece::Pawn);

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
