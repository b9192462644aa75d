//! Pawn movement shapes.
//!
//! Pawns are the only pieces whose legal shape depends on color and on the row
//! they start from. The board decides whether a diagonal step is a real capture
//! and whether a straight step lands on an empty square.

use crate::game_state::chess_types::Color;

/// How a pawn displacement should be treated by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnStep {
    /// One square straight ahead.
    Advance,
    /// Two squares straight ahead from the starting row.
    DoubleAdvance,
    /// One square diagonally forward. Legal only onto an enemy piece.
    Capture,
}

/// Classifies a pawn displacement, or returns `None` for an illegal shape.
pub fn pawn_step(color: Color, from_row: u8, d_row: i8, d_column: i8) -> Option<PawnStep> {
    let forward = color.forward();
    match (d_row, d_column.abs()) {
        (r, 0) if r == forward => Some(PawnStep::Advance),
        (r, 0) if r == 2 * forward && from_row == color.pawn_row() => Some(PawnStep::DoubleAdvance),
        (r, 1) if r == forward => Some(PawnStep::Capture),
        _ => None,
    }
}

#[inline]
pub fn is_pawn_shape(color: Color, from_row: u8, d_row: i8, d_column: i8) -> bool {
    pawn_step(color, from_row, d_row, d_column).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_pawn_moves_toward_row_zero() {
        assert_eq!(pawn_step(Color::White, 6, -1, 0), Some(PawnStep::Advance));
        assert_eq!(pawn_step(Color::White, 6, -2, 0), Some(PawnStep::DoubleAdvance));
        assert_eq!(pawn_step(Color::White, 6, -1, 1), Some(PawnStep::Capture));
        assert_eq!(pawn_step(Color::White, 6, -1, -1), Some(PawnStep::Capture));
        assert_eq!(pawn_step(Color::White, 6, 1, 0), None);
    }

    #[test]
    fn black_pawn_moves_toward_row_seven() {
        assert_eq!(pawn_step(Color::Black, 1, 1, 0), Some(PawnStep::Advance));
        assert_eq!(pawn_step(Color::Black, 1, 2, 0), Some(PawnStep::DoubleAdvance));
        assert_eq!(pawn_step(Color::Black, 1, 1, -1), Some(PawnStep::Capture));
        assert_eq!(pawn_step(Color::Black, 1, -1, 0), None);
    }

    #[test]
    fn double_advance_only_from_starting_row() {
        assert_eq!(pawn_step(Color::White, 5, -2, 0), None);
        assert_eq!(pawn_step(Color::Black, 2, 2, 0), None);
    }

    #[test]
    fn sideways_and_long_moves_are_illegal() {
        assert!(!is_pawn_shape(Color::White, 4, 0, 1));
        assert!(!is_pawn_shape(Color::White, 4, -2, 2));
        assert!(!is_pawn_shape(Color::White, 4, 0, 0));
        assert!(!is_pawn_shape(Color::Black, 1, 3, 0));
    }
}
