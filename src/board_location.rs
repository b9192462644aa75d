//! Board coordinates.
//!
//! A `Square` is stored as a zero-based `(row, column)` grid position with row 0
//! at the top of the board (rank 8, Black's back rank). The algebraic view is
//! `(File, rank)` where `file = 'a' + column` and `rank = 8 - row`. Both views are
//! derived from the same two bytes, so they cannot disagree.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::algebraic_to_square;

/// Board files `a` through `h`, left to right from White's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Zero-based column index of this file.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_char(c: char) -> Result<File, ChessErrors> {
        match c.to_ascii_lowercase() {
            f @ 'a'..='h' => Ok(File::ALL[(f as u8 - b'a') as usize]),
            _ => Err(ChessErrors::InvalidFile(c)),
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single cell of the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Builds a square from zero-based grid coordinates.
    ///
    /// Signed inputs let callers hand over raw offsets; anything outside `0..=7`
    /// is rejected rather than clamped.
    pub fn new(row: i8, column: i8) -> Result<Square, ChessErrors> {
        if (row < 0) | (row > 7) | (column < 0) | (column > 7) {
            return Err(ChessErrors::OutOfBounds { row, column });
        }
        Ok(Square {
            row: row as u8,
            column: column as u8,
        })
    }

    /// Builds a square from its algebraic file and rank (`1..=8`).
    pub fn from_algebraic(file: File, rank: i8) -> Result<Square, ChessErrors> {
        if !(1..=8).contains(&rank) {
            return Err(ChessErrors::InvalidRank(rank));
        }
        Square::new(8 - rank, file.index() as i8)
    }

    /// Same as `from_algebraic` but with the file given as a character.
    pub fn from_file_rank(file: char, rank: i8) -> Result<Square, ChessErrors> {
        Square::from_algebraic(File::from_char(file)?, rank)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    pub fn file(self) -> File {
        File::ALL[self.column as usize]
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    pub fn to_algebraic(self) -> (File, u8) {
        (self.file(), self.rank())
    }

    /// Shifts this square by a row and column offset.
    ///
    /// Sums saturate, so an offset of any size lands off the board instead of
    /// wrapping back onto it.
    pub fn offset(self, d_row: i8, d_column: i8) -> Result<Square, ChessErrors> {
        Square::new(
            (self.row as i8).saturating_add(d_row),
            (self.column as i8).saturating_add(d_column),
        )
    }

    /// Signed `(d_row, d_column)` displacement from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.column as i8 - self.column as i8,
        )
    }

    /// All 64 squares in row-major order starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |column| Square { row, column }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}
