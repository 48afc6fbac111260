//! Board coordinate representation.
//!
//! Positions are row/col pairs over an 8x8 grid. Row 0 is the far (black)
//! side of the board and row 7 the near (white) side; column 0 is file "a"
//! and column 7 file "h".

use std::fmt;

/// A position on the board, with row and column each in 0-7.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Returns true if the given coordinates lie on the board.
    ///
    /// This is the single validity predicate used throughout the engine;
    /// generators step with signed deltas and reject off-board squares here.
    #[inline]
    pub const fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    /// Creates a position, returning `None` if the coordinates are off-board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Pos {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a position from coordinates known to be in bounds.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the coordinates are off-board.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Pos { row, col }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position displaced by the given deltas, or `None` if it
    /// would leave the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Returns the file letter for this position's column ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit for this position's row ('1'-'8').
    ///
    /// Row 0 is rank 8 and row 7 is rank 1.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
