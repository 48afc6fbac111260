//! Per-game castling and en-passant state.
//!
//! [`GameState`] is an explicit value owned alongside a [`Board`]: one pair
//! per game, never shared between games. Only the move applicator mutates
//! it, so all mutators are crate-private.
//!
//! [`Board`]: chess_core::Board

use chess_core::{Color, Pos};

/// Castling eligibility for one side.
///
/// The three flags are monotonic: once a flag is set it is never cleared
/// for the rest of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    /// The king has moved at least once.
    pub king_moved: bool,
    /// The queenside (column 0) rook has moved from its corner.
    pub left_rook_moved: bool,
    /// The kingside (column 7) rook has moved from its corner.
    pub right_rook_moved: bool,
}

/// Auxiliary game state: castling rights for both sides plus the
/// en-passant target square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    castling: [CastlingRights; 2],
    en_passant: Option<Pos>,
}

impl GameState {
    /// Creates a fresh state: full castling rights, no en-passant target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to the fresh-game state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the castling rights for the given color.
    #[inline]
    pub fn castling(&self, color: Color) -> CastlingRights {
        self.castling[color.index()]
    }

    /// Returns the current en-passant target square, if any.
    ///
    /// The target is the square a capturing pawn would land on, set by a
    /// two-square pawn advance and valid for exactly one subsequent move.
    #[inline]
    pub fn en_passant(&self) -> Option<Pos> {
        self.en_passant
    }

    pub(crate) fn mark_king_moved(&mut self, color: Color) {
        self.castling[color.index()].king_moved = true;
    }

    pub(crate) fn mark_left_rook_moved(&mut self, color: Color) {
        self.castling[color.index()].left_rook_moved = true;
    }

    pub(crate) fn mark_right_rook_moved(&mut self, color: Color) {
        self.castling[color.index()].right_rook_moved = true;
    }

    pub(crate) fn set_en_passant(&mut self, target: Pos) {
        self.en_passant = Some(target);
    }

    pub(crate) fn clear_en_passant(&mut self) {
        self.en_passant = None;
    }
}
