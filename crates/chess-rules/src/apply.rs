//! Move application.
//!
//! [`apply_move`] is the sole mutator in the engine: it moves the piece,
//! executes special-move side effects (rook co-move, en passant removal,
//! promotion), and updates the castling and en-passant state. The caller
//! must pass a `to` obtained from the generators for `from`; no
//! re-validation is done here. Contract violations degrade rather than
//! panic: an empty `from` yields `None` with nothing changed, and a `to`
//! that was never offered leaves the board in an unspecified (but not
//! corrupted) state.

use crate::state::GameState;
use chess_core::{Board, ColoredPiece, MoveKind, Piece, Pos};

/// The rook's half of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookMove {
    pub piece: ColoredPiece,
    pub from: Pos,
    pub to: Pos,
}

/// Record of an applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedMove {
    /// The piece that moved, as it stood before any promotion.
    pub piece: ColoredPiece,
    pub from: Pos,
    pub to: Pos,
    /// The occupant of `to` before the move, if any. An en passant capture
    /// leaves this `None` (the destination was empty) and sets
    /// `captured_en_passant` instead.
    pub captured: Option<ColoredPiece>,
    /// True if a pawn was removed by en passant.
    pub captured_en_passant: bool,
    /// The rook's co-move when this was a castle.
    pub rook_move: Option<RookMove>,
    /// The piece the pawn became, when this move promoted.
    pub promoted_to: Option<ColoredPiece>,
}

impl CommittedMove {
    /// Returns true if this move promoted a pawn.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promoted_to.is_some()
    }
}

/// Applies a move to the board and game state, returning the move record.
///
/// `kind` carries the special-move proposal: the generator's en passant or
/// castling payload, or a caller-chosen [`MoveKind::Promotion`] (e.g. after
/// prompting the player). A pawn reaching the far rank without an explicit
/// promotion kind is promoted to a queen.
///
/// Returns `None`, with the board and state untouched, when `from` is
/// empty.
pub fn apply_move(
    board: &mut Board,
    state: &mut GameState,
    from: Pos,
    to: Pos,
    kind: MoveKind,
) -> Option<CommittedMove> {
    let piece = board.piece_at(from)?;
    let captured = board.piece_at(to);

    // A target never survives past the single move it was created for,
    // regardless of which piece kind moved; only a fresh two-square pawn
    // advance below reassigns it.
    state.clear_en_passant();

    let mut record = CommittedMove {
        piece,
        from,
        to,
        captured,
        captured_en_passant: false,
        rook_move: None,
        promoted_to: None,
    };

    match piece.kind {
        Piece::King => {
            state.mark_king_moved(piece.color);

            if let MoveKind::Castle { rook_from, rook_to } = kind {
                if let Some(rook) = board.clear(rook_from) {
                    board.set(rook_to, rook);
                    record.rook_move = Some(RookMove {
                        piece: rook,
                        from: rook_from,
                        to: rook_to,
                    });
                }
            }
        }
        Piece::Rook => {
            // Flagged by origin square, so a rook returning to its corner
            // cannot restore the right.
            if from.row() == piece.color.back_rank_row() {
                match from.col() {
                    0 => state.mark_left_rook_moved(piece.color),
                    7 => state.mark_right_rook_moved(piece.color),
                    _ => {}
                }
            }
        }
        Piece::Pawn => {
            let two_square = from.row() == piece.color.pawn_start_row()
                && from.row().abs_diff(to.row()) == 2;
            if two_square {
                let behind = from.row() as i8 + piece.color.pawn_direction();
                state.set_en_passant(Pos::at(behind as u8, from.col()));
            }

            if let MoveKind::EnPassant { captured_at } = kind {
                board.clear(captured_at);
                record.captured_en_passant = true;
            }

            if let MoveKind::Promotion { promote_to } = kind {
                record.promoted_to = Some(ColoredPiece::new(piece.color, promote_to));
            } else if to.row() == piece.color.promotion_row() {
                record.promoted_to = Some(ColoredPiece::new(piece.color, Piece::Queen));
            }
        }
        _ => {}
    }

    board.set(to, record.promoted_to.unwrap_or(piece));
    board.clear(from);

    Some(record)
}
