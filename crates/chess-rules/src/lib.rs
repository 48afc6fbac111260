//! Chess rules engine.
//!
//! This crate provides:
//! - [`GameState`] - castling rights and the en-passant target square
//! - [`valid_moves`] - per-piece candidate move generation
//! - [`is_square_attacked`] / [`is_king_in_check`] - attack detection
//! - [`apply_move`] - the sole mutator, returning a [`CommittedMove`]
//!   record (or `None` when the origin square is empty)
//! - [`notate`] - algebraic notation for move-history display
//!
//! # Architecture
//!
//! The engine works on a plain 8x8 grid ([`Board`] from `chess-core`)
//! paired with an explicit [`GameState`]. Each game owns its own pair;
//! read-only queries borrow them shared, and `apply_move` takes them
//! `&mut`, so the borrow checker rules out interleaved mutation.
//!
//! Generated moves are candidates: the generators never filter out moves
//! that would leave the mover's own king in check. A caller that needs
//! strict legality re-simulates each candidate and discards the ones that
//! expose its king.
//!
//! # Example
//!
//! ```
//! use chess_core::Pos;
//! use chess_rules::{apply_move, new_game, notate, valid_moves};
//!
//! let (mut board, mut state) = new_game();
//!
//! // The e2 pawn may advance one or two squares.
//! let moves = valid_moves(&board, &state, Pos::at(6, 4));
//! assert_eq!(moves.len(), 2);
//!
//! let m = moves[1];
//! let piece = board.piece_at(m.from).unwrap();
//! let san = notate(&board, m.from, m.to, piece, board.piece_at(m.to));
//! let record = apply_move(&mut board, &mut state, m.from, m.to, m.kind).unwrap();
//! assert_eq!(san, "e4");
//! assert_eq!(record.captured, None);
//! ```

mod apply;
mod attacks;
mod movegen;
mod notation;
mod state;

pub use apply::{apply_move, CommittedMove, RookMove};
pub use attacks::{is_king_in_check, is_square_attacked};
pub use movegen::{
    bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves, valid_moves,
};
pub use notation::notate;
pub use state::{CastlingRights, GameState};

use chess_core::Board;

/// Creates the standard starting position and a fresh [`GameState`].
///
/// Each call produces an independent pair; concurrent games must not share
/// a pair.
pub fn new_game() -> (Board, GameState) {
    (Board::standard(), GameState::new())
}
