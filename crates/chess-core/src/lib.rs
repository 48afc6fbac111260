//! Core types for chess.
//!
//! This crate provides the fundamental types used by the rules engine:
//! - [`Piece`] and [`Color`] for piece representation, paired as
//!   [`ColoredPiece`] on board cells
//! - [`Pos`] for board coordinates (row/col over an 8x8 grid)
//! - [`Move`] and [`MoveKind`] for candidate moves
//! - [`Board`] for the board grid itself

mod board;
mod color;
mod mov;
mod piece;
mod position;

pub use board::Board;
pub use color::Color;
pub use mov::{Move, MoveKind};
pub use piece::{ColoredPiece, Piece, TokenError};
pub use position::Pos;
