//! Occupancy checks that need the whole board.

use tracing::trace;

use crate::board_location::Square;
use crate::game_state::board::Board;

/// Squares strictly between `source` and `destination` when both lie on one
/// rank, file or diagonal. Any other pair, including adjacent squares and knight
/// jumps, has no intermediate squares.
pub fn squares_between(source: Square, destination: Square) -> Vec<Square> {
    let (d_row, d_column) = source.delta_to(destination);
    let on_line = d_row == 0 || d_column == 0 || d_row.abs() == d_column.abs();
    if !on_line || source == destination {
        return Vec::new();
    }

    let steps = d_row.abs().max(d_column.abs());
    let (row_step, column_step) = (d_row.signum(), d_column.signum());
    (1..steps)
        .filter_map(|i| source.offset(row_step * i, column_step * i).ok())
        .collect()
}

/// True iff every square strictly between `source` and `destination` is empty.
pub fn is_path_clear(board: &Board, source: Square, destination: Square) -> bool {
    let blocker = squares_between(source, destination)
        .into_iter()
        .find(|square| board.is_occupied(*square));
    if let Some(square) = blocker {
        trace!(%source, %destination, blocker = %square, "path obstructed");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece::Piece;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    fn names(squares: Vec<Square>) -> Vec<String> {
        squares.into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lists_intermediate_squares_on_lines() {
        assert_eq!(names(squares_between(sq("a1"), sq("a4"))), ["a2", "a3"]);
        assert_eq!(names(squares_between(sq("h8"), sq("e8"))), ["g8", "f8"]);
        assert_eq!(names(squares_between(sq("c1"), sq("f4"))), ["d2", "e3"]);
        assert_eq!(names(squares_between(sq("f4"), sq("c1"))), ["e3", "d2"]);
    }

    #[test]
    fn short_and_off_line_moves_have_no_intermediates() {
        assert!(squares_between(sq("d4"), sq("d5")).is_empty());
        assert!(squares_between(sq("d4"), sq("e5")).is_empty());
        assert!(squares_between(sq("d4"), sq("e6")).is_empty());
        assert!(squares_between(sq("d4"), sq("d4")).is_empty());
    }

    #[test]
    fn any_blocker_on_the_line_obstructs() {
        let mut board = Board::empty();
        let between = squares_between(sq("a1"), sq("h8"));
        assert!(is_path_clear(&board, sq("a1"), sq("h8")));
        for blocker in &between {
            let mut blocked = board.clone();
            blocked
                .place(Piece::new(PieceKind::Pawn, Color::Black, *blocker), *blocker)
                .unwrap();
            assert!(!is_path_clear(&blocked, sq("a1"), sq("h8")), "{blocker}");
        }
        board
            .place(Piece::new(PieceKind::Pawn, Color::Black, sq("h8")), sq("h8"))
            .unwrap();
        assert!(is_path_clear(&board, sq("a1"), sq("h8")));
    }

    #[test]
    fn knight_jumps_are_never_obstructed() {
        let board = Board::standard();
        assert!(is_path_clear(&board, sq("b1"), sq("c3")));
        assert!(!is_path_clear(&board, sq("a1"), sq("a3")));
    }
}
