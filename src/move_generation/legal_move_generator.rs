//! Enumerates the moves the board would accept.
//!
//! The board is small enough that trying every destination through
//! `validate_move` is cheap, and it keeps a single source of truth for legality.

use crate::board_location::Square;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::validate_move;

/// Destinations `apply_move` would accept for the piece on `source`. Empty when
/// the square is empty.
pub fn candidate_destinations(board: &Board, source: Square) -> Vec<Square> {
    if !board.is_occupied(source) {
        return Vec::new();
    }
    Square::all()
        .filter(|destination| validate_move(board, source, *destination).is_ok())
        .collect()
}

/// Every accepted `(source, destination)` pair for pieces of `color`.
pub fn candidate_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    board
        .pieces()
        .filter(|piece| piece.color() == color)
        .flat_map(|piece| {
            let source = piece.location();
            candidate_destinations(board, source)
                .into_iter()
                .map(move |destination| (source, destination))
        })
        .collect()
}
