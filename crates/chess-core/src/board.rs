//! The 8x8 board grid.

use crate::{Color, ColoredPiece, Piece, Pos};
use std::fmt;

/// An 8x8 board; each cell holds at most one piece.
///
/// Row 0 is the far (black) side, row 7 the near (white) side. The board
/// is pure data: it knows nothing about move legality or game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    ///
    /// Black's back rank (R-N-B-Q-K-B-N-R) on row 0 with pawns on row 1;
    /// white mirrored on rows 7 and 6.
    pub fn standard() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set(Pos::at(0, col), ColoredPiece::new(Color::Black, kind));
            board.set(Pos::at(7, col), ColoredPiece::new(Color::White, kind));
            board.set(
                Pos::at(1, col),
                ColoredPiece::new(Color::Black, Piece::Pawn),
            );
            board.set(
                Pos::at(6, col),
                ColoredPiece::new(Color::White, Piece::Pawn),
            );
        }
        board
    }

    /// Returns the piece at the given position, if any.
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<ColoredPiece> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Returns the color of the piece at the given position, or `None` for
    /// an empty cell. Probing empty cells is routine, not an error.
    #[inline]
    pub fn color_at(&self, pos: Pos) -> Option<Color> {
        self.piece_at(pos).map(|p| p.color)
    }

    /// Returns the kind of the piece at the given position, or `None` for
    /// an empty cell.
    #[inline]
    pub fn kind_at(&self, pos: Pos) -> Option<Piece> {
        self.piece_at(pos).map(|p| p.kind)
    }

    /// Places a piece at the given position, replacing any occupant.
    #[inline]
    pub fn set(&mut self, pos: Pos, piece: ColoredPiece) {
        self.cells[pos.row() as usize][pos.col() as usize] = Some(piece);
    }

    /// Removes and returns the piece at the given position.
    #[inline]
    pub fn clear(&mut self, pos: Pos) -> Option<ColoredPiece> {
        self.cells[pos.row() as usize][pos.col() as usize].take()
    }

    /// Iterates over all occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, ColoredPiece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| {
                let pos = Pos::at(row, col);
                self.piece_at(pos).map(|piece| (pos, piece))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    /// Renders an ASCII diagram with rank 8 (row 0) at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = match self.piece_at(Pos::at(row, col)) {
                    Some(p) => {
                        let c = match p.kind {
                            Piece::Pawn => 'p',
                            Piece::Knight => 'n',
                            Piece::Bishop => 'b',
                            Piece::Rook => 'r',
                            Piece::Queen => 'q',
                            Piece::King => 'k',
                        };
                        match p.color {
                            Color::White => c.to_ascii_uppercase(),
                            Color::Black => c,
                        }
                    }
                    None => '.',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.piece_at(Pos::at(4, 4)), None);
        assert_eq!(board.color_at(Pos::at(4, 4)), None);
        assert_eq!(board.kind_at(Pos::at(4, 4)), None);
    }

    #[test]
    fn standard_census() {
        let board = Board::standard();
        let count = |kind: Piece| board.pieces().filter(|(_, p)| p.kind == kind).count();
        assert_eq!(count(Piece::Pawn), 16);
        assert_eq!(count(Piece::Rook), 4);
        assert_eq!(count(Piece::Knight), 4);
        assert_eq!(count(Piece::Bishop), 4);
        assert_eq!(count(Piece::Queen), 2);
        assert_eq!(count(Piece::King), 2);
    }

    #[test]
    fn standard_sides() {
        let board = Board::standard();
        for (pos, piece) in board.pieces() {
            match piece.color {
                Color::White => assert!(pos.row() >= 6, "white piece at {:?}", pos),
                Color::Black => assert!(pos.row() <= 1, "black piece at {:?}", pos),
            }
        }
    }

    #[test]
    fn standard_back_ranks() {
        let board = Board::standard();
        assert_eq!(board.kind_at(Pos::at(0, 4)), Some(Piece::King));
        assert_eq!(board.kind_at(Pos::at(7, 4)), Some(Piece::King));
        assert_eq!(board.kind_at(Pos::at(0, 3)), Some(Piece::Queen));
        assert_eq!(board.kind_at(Pos::at(7, 0)), Some(Piece::Rook));
        assert_eq!(board.kind_at(Pos::at(7, 7)), Some(Piece::Rook));
        assert_eq!(board.color_at(Pos::at(0, 4)), Some(Color::Black));
        assert_eq!(board.color_at(Pos::at(7, 4)), Some(Color::White));
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        let e4 = Pos::at(4, 4);
        let pawn = ColoredPiece::new(Color::White, Piece::Pawn);
        board.set(e4, pawn);
        assert_eq!(board.piece_at(e4), Some(pawn));
        assert_eq!(board.clear(e4), Some(pawn));
        assert_eq!(board.piece_at(e4), None);
        assert_eq!(board.clear(e4), None);
    }

    #[test]
    fn display_renders_startpos() {
        let s = Board::standard().to_string();
        assert!(s.starts_with("8 r n b q k b n r"));
        assert!(s.contains("1 R N B Q K B N R"));
        assert!(s.ends_with("a b c d e f g h"));
    }
}
