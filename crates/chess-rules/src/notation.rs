//! Algebraic notation encoding.
//!
//! Converts a committed move into its algebraic string ("Nf3", "exd5",
//! "O-O"). The encoder is one-way and takes the board as it stood *before*
//! the move was applied, so the disambiguation scan still sees the mover's
//! rivals in place.

use crate::movegen::{bishop_moves, knight_moves, queen_moves, rook_moves};
use chess_core::{Board, ColoredPiece, Piece, Pos};

/// Renders the move as algebraic notation.
///
/// `captured` is the occupant of the destination before the move (an en
/// passant capture passes `None`, matching its empty destination). A king
/// displaced by more than one column is rendered as castling. Pieces other
/// than pawns and kings are disambiguated against same-color same-kind
/// rivals that could also reach the destination: origin file if no rival
/// shares it, else origin rank, else both.
pub fn notate(
    board: &Board,
    from: Pos,
    to: Pos,
    piece: ColoredPiece,
    captured: Option<ColoredPiece>,
) -> String {
    if piece.kind == Piece::King && from.col().abs_diff(to.col()) > 1 {
        return if to.col() > from.col() {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let mut notation = String::new();

    if piece.kind != Piece::Pawn {
        notation.push(piece.kind.san_char());
    }

    if piece.kind != Piece::Pawn && piece.kind != Piece::King {
        notation.push_str(&disambiguation(board, from, to, piece));
    }

    if captured.is_some() {
        if piece.kind == Piece::Pawn {
            notation.push(from.file_char());
        }
        notation.push('x');
    }

    notation.push(to.file_char());
    notation.push(to.rank_char());

    notation
}

/// Returns the qualifier needed to distinguish the mover from rivals that
/// could also reach `to`: file, then rank, then both.
fn disambiguation(board: &Board, from: Pos, to: Pos, piece: ColoredPiece) -> String {
    let rivals: Vec<Pos> = board
        .pieces()
        .filter(|&(pos, other)| pos != from && other == piece)
        .filter(|&(pos, _)| reaches(board, pos, piece, to))
        .map(|(pos, _)| pos)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|r| r.col() == from.col());
    let shares_rank = rivals.iter().any(|r| r.row() == from.row());

    if !shares_file {
        from.file_char().to_string()
    } else if !shares_rank {
        from.rank_char().to_string()
    } else {
        format!("{}{}", from.file_char(), from.rank_char())
    }
}

/// Returns true if the rival piece at `at` has a generated move onto `to`.
fn reaches(board: &Board, at: Pos, piece: ColoredPiece, to: Pos) -> bool {
    let moves = match piece.kind {
        Piece::Knight => knight_moves(board, at, piece.color),
        Piece::Bishop => bishop_moves(board, at, piece.color),
        Piece::Rook => rook_moves(board, at, piece.color),
        Piece::Queen => queen_moves(board, at, piece.color),
        // Pawns and kings are never disambiguated.
        Piece::Pawn | Piece::King => return false,
    };
    moves.iter().any(|m| m.to == to)
}
