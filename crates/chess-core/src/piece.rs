//! Chess piece representation.
//!
//! [`Piece`] is the bare piece kind; [`ColoredPiece`] pairs it with a
//! [`Color`] and is what actually sits on a board cell. At the API
//! boundary a colored piece is exchanged as a composite token such as
//! `"white-pawn"`, rendered by `Display` and parsed by `FromStr`.

use crate::Color;
use std::str::FromStr;
use thiserror::Error;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// All piece kinds in order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Returns the index of this piece kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the algebraic-notation letter for this piece kind.
    ///
    /// Pawns have no letter in notation; 'P' is returned for completeness
    /// but never emitted by the encoder.
    #[inline]
    pub const fn san_char(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    /// Returns true if this piece slides along rays (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }

    /// Returns the lowercase token name used at the API boundary.
    #[inline]
    pub const fn token(self) -> &'static str {
        match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Errors that can occur when parsing a piece token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid piece token: expected 'color-kind', got '{0}'")]
    MissingSeparator(String),

    #[error("invalid color: expected 'white' or 'black', got '{0}'")]
    InvalidColor(String),

    #[error("invalid piece kind: '{0}'")]
    InvalidKind(String),
}

/// A piece together with its color, as placed on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub color: Color,
    pub kind: Piece,
}

impl ColoredPiece {
    /// Creates a colored piece.
    #[inline]
    pub const fn new(color: Color, kind: Piece) -> Self {
        ColoredPiece { color, kind }
    }
}

impl std::fmt::Display for ColoredPiece {
    /// Renders the boundary token, e.g. `"black-knight"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.color, self.kind)
    }
}

impl FromStr for ColoredPiece {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (color, kind) = s
            .split_once('-')
            .ok_or_else(|| TokenError::MissingSeparator(s.to_string()))?;
        let color = match color {
            "white" => Color::White,
            "black" => Color::Black,
            other => return Err(TokenError::InvalidColor(other.to_string())),
        };
        let kind = match kind {
            "pawn" => Piece::Pawn,
            "knight" => Piece::Knight,
            "bishop" => Piece::Bishop,
            "rook" => Piece::Rook,
            "queen" => Piece::Queen,
            "king" => Piece::King,
            other => return Err(TokenError::InvalidKind(other.to_string())),
        };
        Ok(ColoredPiece::new(color, kind))
    }
}
