//! Attack detection.
//!
//! Determines whether a square is attacked by the opposing side, by
//! ray-casting outward from the square rather than enumerating every enemy
//! move: rays for sliders (and an adjacent enemy king on the first step),
//! fixed offsets for knights, and the two facing-dependent pawn squares.

use chess_core::{Board, Color, Piece, Pos};

/// The 8 unit directions, orthogonal then diagonal.
pub(crate) const RAY_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The 8 knight move offsets.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Returns true if the square is attacked by the color opposite `defender`.
///
/// A ray stops at the first occupied cell it meets, own or enemy; it never
/// sees past blockers.
pub fn is_square_attacked(board: &Board, pos: Pos, defender: Color) -> bool {
    let attacker = defender.opposite();

    for &(d_row, d_col) in &RAY_DIRECTIONS {
        let orthogonal = d_row == 0 || d_col == 0;
        let mut steps = 1u8;
        let mut cursor = pos.offset(d_row, d_col);
        while let Some(sq) = cursor {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == attacker {
                    let line_match = if orthogonal {
                        matches!(piece.kind, Piece::Rook | Piece::Queen)
                    } else {
                        matches!(piece.kind, Piece::Bishop | Piece::Queen)
                    };
                    // Kings only threaten the first square of a ray.
                    if line_match || (steps == 1 && piece.kind == Piece::King) {
                        return true;
                    }
                }
                break;
            }
            cursor = sq.offset(d_row, d_col);
            steps += 1;
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(sq) = pos.offset(d_row, d_col) {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == attacker && piece.kind == Piece::Knight {
                    return true;
                }
            }
        }
    }

    // The squares from which an enemy pawn would capture onto this square
    // lie in the defender's pawn direction.
    let pawn_row = defender.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(sq) = pos.offset(pawn_row, d_col) {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == attacker && piece.kind == Piece::Pawn {
                    return true;
                }
            }
        }
    }

    false
}

/// Returns true if the given color's king is attacked.
///
/// Scans the board once in row-major order for the king; a board with no
/// king of that color degrades to `false` rather than failing.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .find(|(_, piece)| piece.color == color && piece.kind == Piece::King)
        .map(|(pos, _)| is_square_attacked(board, pos, color))
        .unwrap_or(false)
}
