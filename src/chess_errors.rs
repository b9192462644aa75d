//! Errors used throughout the rules core.
//!
//! `ChessErrors` covers contract violations only: coordinates that do not name a
//! square, malformed algebraic text, and placing two pieces on one square during
//! setup. An illegal move attempted during play is not an error; it is reported as
//! `MoveOutcome::Rejected` so the caller can show the reason and let the player
//! try again.

use thiserror::Error;

use crate::board_location::Square;

/// Unified error type for the rules core.
///
/// Coordinate variants carry the offending input so callers can log precise
/// diagnostics. `OccupiedSquare` can only be produced while setting up a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A zero-based `(row, column)` pair outside `0..=7`.
    #[error("coordinates off the board: row {row}, column {column}")]
    OutOfBounds { row: i8, column: i8 },

    /// A file character outside `a..=h`.
    #[error("invalid file '{0}' (expected a-h)")]
    InvalidFile(char),

    /// A rank number outside `1..=8`.
    #[error("invalid rank {0} (expected 1-8)")]
    InvalidRank(i8),

    /// Text that does not spell a square such as `e4`.
    #[error("invalid algebraic square \"{0}\"")]
    InvalidAlgebraicString(String),

    /// Setup tried to place a piece on a square that already holds one.
    #[error("square {0} is already occupied")]
    OccupiedSquare(Square),

    /// A move listed by candidate generation was refused when played. This means
    /// generation and application disagree, which is a bug.
    #[error("candidate move {from}-{to} was rejected when played")]
    CandidateRejected { from: Square, to: Square },
}
