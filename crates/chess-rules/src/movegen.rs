//! Per-piece candidate move generation.
//!
//! Each generator returns the squares its piece could move to under the
//! occupancy and special-move rules, without mutating the board. Generated
//! moves are candidates, not fully legal moves: no generator filters out
//! moves that would leave the mover's own king in check. Callers that need
//! strict legality must re-simulate each candidate and discard the ones
//! that expose their king.

use crate::attacks::{is_square_attacked, KNIGHT_OFFSETS};
use crate::state::GameState;
use chess_core::{Board, Color, Move, Piece, Pos};

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the candidate moves for the piece at `at`.
///
/// Dispatches on the occupant's kind; an empty cell yields no moves.
/// See the module docs for the self-check caveat.
pub fn valid_moves(board: &Board, state: &GameState, at: Pos) -> Vec<Move> {
    let Some(piece) = board.piece_at(at) else {
        return Vec::new();
    };
    match piece.kind {
        Piece::Pawn => pawn_moves(board, state, at, piece.color),
        Piece::Knight => knight_moves(board, at, piece.color),
        Piece::Bishop => bishop_moves(board, at, piece.color),
        Piece::Rook => rook_moves(board, at, piece.color),
        Piece::Queen => queen_moves(board, at, piece.color),
        Piece::King => king_moves(board, state, at, piece.color),
    }
}

/// Pawn moves: single and double pushes, diagonal captures, en passant.
///
/// Promotion is not proposed here; the applicator promotes any pawn that
/// reaches the far rank, using the caller's choice or defaulting to queen.
pub fn pawn_moves(board: &Board, state: &GameState, at: Pos, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    let dir = color.pawn_direction();

    if let Some(one) = at.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            moves.push(Move::normal(at, one));

            if at.row() == color.pawn_start_row() {
                if let Some(two) = at.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::normal(at, two));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diag) = at.offset(dir, d_col) else {
            continue;
        };
        match board.color_at(diag) {
            Some(c) if c != color => moves.push(Move::normal(at, diag)),
            Some(_) => {}
            None => {
                // The target square of an en passant capture is empty; the
                // captured pawn sits beside the mover, not on the diagonal.
                if state.en_passant() == Some(diag) {
                    let captured_at = Pos::at(at.row(), diag.col());
                    moves.push(Move::en_passant(at, diag, captured_at));
                }
            }
        }
    }

    moves
}

/// Knight moves: the 8 fixed offsets onto empty or enemy squares.
pub fn knight_moves(board: &Board, at: Pos, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(to) = at.offset(d_row, d_col) {
            if board.color_at(to) != Some(color) {
                moves.push(Move::normal(at, to));
            }
        }
    }
    moves
}

/// Rook moves: rays along the 4 orthogonal directions.
pub fn rook_moves(board: &Board, at: Pos, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for &dir in &ORTHOGONAL {
        ray_moves(board, at, color, dir, &mut moves);
    }
    moves
}

/// Bishop moves: rays along the 4 diagonal directions.
pub fn bishop_moves(board: &Board, at: Pos, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for &dir in &DIAGONAL {
        ray_moves(board, at, color, dir, &mut moves);
    }
    moves
}

/// Queen moves: the union of rook and bishop rays.
pub fn queen_moves(board: &Board, at: Pos, color: Color) -> Vec<Move> {
    let mut moves = rook_moves(board, at, color);
    moves.extend(bishop_moves(board, at, color));
    moves
}

/// Walks one ray, collecting empty squares and at most one enemy capture.
fn ray_moves(board: &Board, at: Pos, color: Color, (d_row, d_col): (i8, i8), moves: &mut Vec<Move>) {
    let mut cursor = at.offset(d_row, d_col);
    while let Some(to) = cursor {
        match board.color_at(to) {
            None => {
                moves.push(Move::normal(at, to));
                cursor = to.offset(d_row, d_col);
            }
            Some(occupant) => {
                if occupant != color {
                    moves.push(Move::normal(at, to));
                }
                break;
            }
        }
    }
}

/// King moves: the 8 adjacent squares, plus castling when available.
///
/// Castling requires: king unmoved per the rights, king on its original
/// square (column 4 of its back rank), the relevant rook unmoved with a
/// rook still on the corner, the squares strictly between them empty, and
/// the king's transit and destination squares unattacked. The king's
/// *current* square is not checked, so castling out of check is not
/// blocked here; callers needing strict legality must check separately.
pub fn king_moves(board: &Board, state: &GameState, at: Pos, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Some(to) = at.offset(d_row, d_col) {
                if board.color_at(to) != Some(color) {
                    moves.push(Move::normal(at, to));
                }
            }
        }
    }

    let rights = state.castling(color);
    let back = color.back_rank_row();
    if !rights.king_moved && at == Pos::at(back, 4) {
        // Kingside: f and g empty, rook on h, transit f and destination g safe.
        let f = Pos::at(back, 5);
        let g = Pos::at(back, 6);
        let h = Pos::at(back, 7);
        if !rights.right_rook_moved
            && board.piece_at(f).is_none()
            && board.piece_at(g).is_none()
            && board.kind_at(h) == Some(Piece::Rook)
            && !is_square_attacked(board, f, color)
            && !is_square_attacked(board, g, color)
        {
            moves.push(Move::castle(at, g, h, f));
        }

        // Queenside: b, c, d empty, rook on a, transit d and destination c safe.
        let a = Pos::at(back, 0);
        let b = Pos::at(back, 1);
        let c = Pos::at(back, 2);
        let d = Pos::at(back, 3);
        if !rights.left_rook_moved
            && board.piece_at(b).is_none()
            && board.piece_at(c).is_none()
            && board.piece_at(d).is_none()
            && board.kind_at(a) == Some(Piece::Rook)
            && !is_square_attacked(board, c, color)
            && !is_square_attacked(board, d, color)
        {
            moves.push(Move::castle(at, c, a, d));
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{ColoredPiece, MoveKind};
    use proptest::prelude::*;

    fn place(board: &mut Board, row: u8, col: u8, color: Color, kind: Piece) {
        board.set(Pos::at(row, col), ColoredPiece::new(color, kind));
    }

    fn destinations(moves: &[Move]) -> Vec<Pos> {
        moves.iter().map(|m| m.to).collect()
    }

    #[test]
    fn empty_cell_has_no_moves() {
        let board = Board::standard();
        let state = GameState::new();
        assert!(valid_moves(&board, &state, Pos::at(4, 4)).is_empty());
    }

    #[test]
    fn starting_pawn_has_two_pushes() {
        let board = Board::standard();
        let state = GameState::new();
        let moves = valid_moves(&board, &state, Pos::at(6, 4));
        assert_eq!(destinations(&moves), vec![Pos::at(5, 4), Pos::at(4, 4)]);
        assert!(moves.iter().all(|m| m.kind == MoveKind::Normal));
    }

    #[test]
    fn advanced_pawn_has_one_push() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Color::White, Piece::Pawn);
        let state = GameState::new();
        let moves = valid_moves(&board, &state, Pos::at(4, 4));
        assert_eq!(destinations(&moves), vec![Pos::at(3, 4)]);
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let mut board = Board::empty();
        place(&mut board, 6, 4, Color::White, Piece::Pawn);
        place(&mut board, 5, 4, Color::Black, Piece::Knight);
        let state = GameState::new();
        assert!(valid_moves(&board, &state, Pos::at(6, 4)).is_empty());
    }

    #[test]
    fn double_push_blocked_on_second_square() {
        let mut board = Board::empty();
        place(&mut board, 6, 4, Color::White, Piece::Pawn);
        place(&mut board, 4, 4, Color::Black, Piece::Knight);
        let state = GameState::new();
        let moves = valid_moves(&board, &state, Pos::at(6, 4));
        assert_eq!(destinations(&moves), vec![Pos::at(5, 4)]);
    }

    #[test]
    fn pawn_captures_diagonally() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Color::White, Piece::Pawn);
        place(&mut board, 3, 3, Color::Black, Piece::Pawn);
        place(&mut board, 3, 5, Color::White, Piece::Pawn);
        let state = GameState::new();
        let moves = pawn_moves(&board, &state, Pos::at(4, 4), Color::White);
        // Forward push plus the enemy capture; the own piece is not a target.
        assert_eq!(
            destinations(&moves),
            vec![Pos::at(3, 4), Pos::at(3, 3)]
        );
    }

    #[test]
    fn black_pawn_moves_downward() {
        let board = Board::standard();
        let state = GameState::new();
        let moves = valid_moves(&board, &state, Pos::at(1, 3));
        assert_eq!(destinations(&moves), vec![Pos::at(2, 3), Pos::at(3, 3)]);
    }

    #[test]
    fn en_passant_offer_carries_captured_square() {
        let mut board = Board::empty();
        place(&mut board, 3, 2, Color::White, Piece::Pawn);
        place(&mut board, 3, 3, Color::Black, Piece::Pawn);
        let mut state = GameState::new();
        state.set_en_passant(Pos::at(2, 3));

        let moves = pawn_moves(&board, &state, Pos::at(3, 2), Color::White);
        let ep = moves
            .iter()
            .find(|m| m.kind.is_en_passant())
            .expect("en passant offer");
        assert_eq!(ep.to, Pos::at(2, 3));
        assert_eq!(
            ep.kind,
            MoveKind::EnPassant {
                captured_at: Pos::at(3, 3)
            }
        );
    }

    #[test]
    fn no_en_passant_without_target() {
        let mut board = Board::empty();
        place(&mut board, 3, 2, Color::White, Piece::Pawn);
        place(&mut board, 3, 3, Color::Black, Piece::Pawn);
        let state = GameState::new();
        let moves = pawn_moves(&board, &state, Pos::at(3, 2), Color::White);
        assert!(moves.iter().all(|m| !m.kind.is_en_passant()));
    }

    #[test]
    fn knight_in_corner_has_two_moves() {
        let mut board = Board::empty();
        place(&mut board, 7, 0, Color::White, Piece::Knight);
        let moves = knight_moves(&board, Pos::at(7, 0), Color::White);
        let mut dests = destinations(&moves);
        dests.sort_by_key(|p| (p.row(), p.col()));
        assert_eq!(dests, vec![Pos::at(5, 1), Pos::at(6, 2)]);
    }

    #[test]
    fn knight_skips_own_pieces() {
        let board = Board::standard();
        let state = GameState::new();
        let moves = valid_moves(&board, &state, Pos::at(7, 1));
        assert_eq!(destinations(&moves), vec![Pos::at(5, 0), Pos::at(5, 2)]);
    }

    #[test]
    fn rook_rays_stop_at_blockers() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Color::White, Piece::Rook);
        place(&mut board, 4, 6, Color::Black, Piece::Pawn);
        place(&mut board, 6, 4, Color::White, Piece::Pawn);
        let moves = rook_moves(&board, Pos::at(4, 4), Color::White);
        let dests = destinations(&moves);
        // Enemy blocker is a capture, the square beyond it is not reachable.
        assert!(dests.contains(&Pos::at(4, 6)));
        assert!(!dests.contains(&Pos::at(4, 7)));
        // Own blocker stops the ray short.
        assert!(dests.contains(&Pos::at(5, 4)));
        assert!(!dests.contains(&Pos::at(6, 4)));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Color::White, Piece::Queen);
        let queen = queen_moves(&board, Pos::at(4, 4), Color::White);
        let rook = rook_moves(&board, Pos::at(4, 4), Color::White);
        let bishop = bishop_moves(&board, Pos::at(4, 4), Color::White);
        assert_eq!(queen.len(), rook.len() + bishop.len());
    }

    #[test]
    fn king_has_eight_neighbors_when_open() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Color::White, Piece::King);
        let state = GameState::new();
        let moves = king_moves(&board, &state, Pos::at(4, 4), Color::White);
        assert_eq!(moves.len(), 8);
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        place(&mut board, 7, 4, Color::White, Piece::King);
        place(&mut board, 7, 0, Color::White, Piece::Rook);
        place(&mut board, 7, 7, Color::White, Piece::Rook);
        place(&mut board, 0, 4, Color::Black, Piece::King);
        board
    }

    #[test]
    fn both_castles_offered_when_clear() {
        let board = castling_board();
        let state = GameState::new();
        let moves = king_moves(&board, &state, Pos::at(7, 4), Color::White);

        let kingside = moves.iter().find(|m| m.to == Pos::at(7, 6)).unwrap();
        assert_eq!(
            kingside.kind,
            MoveKind::Castle {
                rook_from: Pos::at(7, 7),
                rook_to: Pos::at(7, 5)
            }
        );
        let queenside = moves.iter().find(|m| m.to == Pos::at(7, 2)).unwrap();
        assert_eq!(
            queenside.kind,
            MoveKind::Castle {
                rook_from: Pos::at(7, 0),
                rook_to: Pos::at(7, 3)
            }
        );
    }

    #[test]
    fn no_castle_after_king_moved() {
        let board = castling_board();
        let mut state = GameState::new();
        state.mark_king_moved(Color::White);
        let moves = king_moves(&board, &state, Pos::at(7, 4), Color::White);
        assert!(moves.iter().all(|m| !m.kind.is_castle()));
    }

    #[test]
    fn rook_flags_block_their_side_only() {
        let board = castling_board();
        let mut state = GameState::new();
        state.mark_right_rook_moved(Color::White);
        let moves = king_moves(&board, &state, Pos::at(7, 4), Color::White);
        assert!(!moves.iter().any(|m| m.to == Pos::at(7, 6)));
        assert!(moves.iter().any(|m| m.to == Pos::at(7, 2)));
    }

    #[test]
    fn no_castle_through_occupied_squares() {
        let mut board = castling_board();
        place(&mut board, 7, 5, Color::White, Piece::Bishop);
        let state = GameState::new();
        let moves = king_moves(&board, &state, Pos::at(7, 4), Color::White);
        assert!(!moves.iter().any(|m| m.to == Pos::at(7, 6)));
    }

    #[test]
    fn no_castle_through_attacked_transit() {
        let mut board = castling_board();
        // Black rook eyes f1, the kingside transit square.
        place(&mut board, 0, 5, Color::Black, Piece::Rook);
        let state = GameState::new();
        let moves = king_moves(&board, &state, Pos::at(7, 4), Color::White);
        assert!(!moves.iter().any(|m| m.to == Pos::at(7, 6)));
        // Queenside transit (c1, d1) is unaffected.
        assert!(moves.iter().any(|m| m.to == Pos::at(7, 2)));
    }

    #[test]
    fn no_castle_with_non_rook_on_corner() {
        let mut board = castling_board();
        place(&mut board, 7, 7, Color::White, Piece::Knight);
        let state = GameState::new();
        let moves = king_moves(&board, &state, Pos::at(7, 4), Color::White);
        assert!(!moves.iter().any(|m| m.to == Pos::at(7, 6)));
        // The queenside corner is checked independently.
        assert!(moves.iter().any(|m| m.to == Pos::at(7, 2)));

        place(&mut board, 7, 0, Color::White, Piece::Knight);
        let moves = king_moves(&board, &state, Pos::at(7, 4), Color::White);
        assert!(!moves.iter().any(|m| m.to == Pos::at(7, 2)));
    }

    #[test]
    fn no_castle_off_original_square() {
        let mut board = Board::empty();
        place(&mut board, 7, 3, Color::White, Piece::King);
        place(&mut board, 7, 0, Color::White, Piece::Rook);
        let state = GameState::new();
        let moves = king_moves(&board, &state, Pos::at(7, 3), Color::White);
        assert!(moves.iter().all(|m| !m.kind.is_castle()));
    }

    #[test]
    fn black_castles_on_row_zero() {
        let mut board = Board::empty();
        place(&mut board, 0, 4, Color::Black, Piece::King);
        place(&mut board, 0, 0, Color::Black, Piece::Rook);
        place(&mut board, 0, 7, Color::Black, Piece::Rook);
        let state = GameState::new();
        let moves = king_moves(&board, &state, Pos::at(0, 4), Color::Black);
        assert!(moves.iter().any(|m| m.to == Pos::at(0, 6)));
        assert!(moves.iter().any(|m| m.to == Pos::at(0, 2)));
    }

    #[test]
    fn generation_does_not_filter_self_check() {
        // A pinned rook still offers its full ray: self-check filtering is
        // the caller's responsibility.
        let mut board = Board::empty();
        place(&mut board, 7, 4, Color::White, Piece::King);
        place(&mut board, 5, 4, Color::White, Piece::Rook);
        place(&mut board, 0, 4, Color::Black, Piece::Rook);
        let state = GameState::new();
        let moves = valid_moves(&board, &state, Pos::at(5, 4));
        assert!(moves.iter().any(|m| m.to == Pos::at(5, 0)));
    }

    proptest! {
        #[test]
        fn generated_moves_stay_on_board_and_off_own_pieces(
            row in 0u8..8, col in 0u8..8,
            kind_idx in 0usize..6,
            white in proptest::bool::ANY,
        ) {
            let color = if white { Color::White } else { Color::Black };
            let kind = Piece::ALL[kind_idx];
            let at = Pos::at(row, col);

            let mut board = Board::standard();
            board.clear(at);
            board.set(at, ColoredPiece::new(color, kind));

            let state = GameState::new();
            for m in valid_moves(&board, &state, at) {
                prop_assert_eq!(m.from, at);
                prop_assert_ne!(m.to, at);
                prop_assert_ne!(board.color_at(m.to), Some(color));
            }
        }

        #[test]
        fn dispatch_matches_piece_generator(row in 0u8..8, col in 0u8..8) {
            let at = Pos::at(row, col);
            let mut board = Board::empty();
            board.set(at, ColoredPiece::new(Color::White, Piece::Knight));
            let state = GameState::new();
            prop_assert_eq!(
                valid_moves(&board, &state, at),
                knight_moves(&board, at, Color::White)
            );
        }
    }
}
