//! Text conversions for squares and move pairs.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`, and
//! splits user input such as `e2e4` or `e2 e4` into a source/destination pair.

use crate::board_location::Square;
use crate::chess_errors::ChessErrors;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    };
    let rank = rank
        .to_digit(10)
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(text.to_owned()))?;
    Square::from_file_rank(file, rank as i8)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse a source/destination pair written as `e2e4`, `e2 e4` or `e2-e4`.
pub fn parse_move_pair(text: &str) -> Result<(Square, Square), ChessErrors> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }
    let from = algebraic_to_square(&compact[..2])?;
    let to = algebraic_to_square(&compact[2..])?;
    Ok((from, to))
}
