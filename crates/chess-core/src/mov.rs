//! Candidate move representation.
//!
//! A [`Move`] is an offer produced by the generators (or assembled by the
//! caller, for promotion), not yet committed to the board. Special moves
//! carry their side-effect payloads in [`MoveKind`] so the applicator can
//! execute them without re-deriving anything.

use crate::{Piece, Pos};

/// The kind of a candidate move, with special-move payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Plain move or capture.
    Normal,
    /// En passant capture; `captured_at` is the square of the captured
    /// pawn (horizontally adjacent to the mover, not the destination).
    EnPassant { captured_at: Pos },
    /// Castling; the rook co-moves from `rook_from` to `rook_to`.
    Castle { rook_from: Pos, rook_to: Pos },
    /// Pawn promotion to the given piece kind, chosen by the caller.
    Promotion { promote_to: Piece },
}

impl MoveKind {
    /// Returns the promotion piece if this is a promotion.
    #[inline]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match self {
            MoveKind::Promotion { promote_to } => Some(promote_to),
            _ => None,
        }
    }

    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::Castle { .. })
    }

    /// Returns true if this is an en passant capture.
    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self, MoveKind::EnPassant { .. })
    }
}

/// A candidate chess move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub kind: MoveKind,
}

impl Move {
    /// Creates a move with an explicit kind.
    #[inline]
    pub const fn new(from: Pos, to: Pos, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Creates a plain move or capture.
    #[inline]
    pub const fn normal(from: Pos, to: Pos) -> Self {
        Self::new(from, to, MoveKind::Normal)
    }

    /// Creates an en passant capture.
    #[inline]
    pub const fn en_passant(from: Pos, to: Pos, captured_at: Pos) -> Self {
        Self::new(from, to, MoveKind::EnPassant { captured_at })
    }

    /// Creates a castling move with the rook's co-move.
    #[inline]
    pub const fn castle(from: Pos, to: Pos, rook_from: Pos, rook_to: Pos) -> Self {
        Self::new(from, to, MoveKind::Castle { rook_from, rook_to })
    }

    /// Creates a promotion move.
    #[inline]
    pub const fn promotion(from: Pos, to: Pos, promote_to: Piece) -> Self {
        Self::new(from, to, MoveKind::Promotion { promote_to })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates() {
        let e2 = Pos::at(6, 4);
        let e4 = Pos::at(4, 4);
        assert_eq!(Move::normal(e2, e4).kind, MoveKind::Normal);
        assert!(!MoveKind::Normal.is_castle());
        assert!(!MoveKind::Normal.is_en_passant());

        let castle = Move::castle(Pos::at(7, 4), Pos::at(7, 6), Pos::at(7, 7), Pos::at(7, 5));
        assert!(castle.kind.is_castle());

        let ep = Move::en_passant(Pos::at(3, 2), Pos::at(2, 3), Pos::at(3, 3));
        assert!(ep.kind.is_en_passant());
    }

    #[test]
    fn promotion_piece() {
        assert_eq!(MoveKind::Normal.promotion_piece(), None);
        assert_eq!(
            MoveKind::Promotion {
                promote_to: Piece::Knight
            }
            .promotion_piece(),
            Some(Piece::Knight)
        );
    }

    #[test]
    fn display() {
        let m = Move::normal(Pos::at(6, 4), Pos::at(4, 4));
        assert_eq!(m.to_string(), "e2e4");
    }
}
