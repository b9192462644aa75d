//! Canonical starting layout.
//!
//! The layout is hard-coded: back rank pieces on row 0 (Black) and row 7 (White),
//! pawns on rows 1 and 6. Every query about "starting positions" goes through
//! this table so setup and validation cannot drift apart.

use crate::board_location::Square;
use crate::game_state::chess_types::{Color, PieceKind};

/// Back rank pieces ordered by column, a-file first.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece kind a `color` piece occupies on `square` in the starting layout.
pub fn starting_kind_at(color: Color, square: Square) -> Option<PieceKind> {
    if square.row() == color.back_row() {
        Some(BACK_RANK[square.column() as usize])
    } else if square.row() == color.pawn_row() {
        Some(PieceKind::Pawn)
    } else {
        None
    }
}

/// True iff a `kind`/`color` piece standing on `square` is where the starting
/// layout puts such a piece.
pub fn is_starting_square(kind: PieceKind, color: Color, square: Square) -> bool {
    starting_kind_at(color, square) == Some(kind)
}

/// The 32 `(kind, color, square)` entries of the starting layout.
pub fn starting_layout() -> impl Iterator<Item = (PieceKind, Color, Square)> {
    Square::all().filter_map(|square| {
        [Color::White, Color::Black]
            .into_iter()
            .find_map(|color| starting_kind_at(color, square).map(|kind| (kind, color, square)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_sixteen_pieces_per_side() {
        let white = starting_layout().filter(|(_, c, _)| *c == Color::White).count();
        let black = starting_layout().filter(|(_, c, _)| *c == Color::Black).count();
        assert_eq!(white, 16);
        assert_eq!(black, 16);
    }

    #[test]
    fn kings_and_queens_sit_on_their_files() {
        assert!(is_starting_square(PieceKind::King, Color::White, "e1".parse().unwrap()));
        assert!(is_starting_square(PieceKind::Queen, Color::White, "d1".parse().unwrap()));
        assert!(is_starting_square(PieceKind::King, Color::Black, "e8".parse().unwrap()));
        assert!(is_starting_square(PieceKind::Queen, Color::Black, "d8".parse().unwrap()));
        assert!(!is_starting_square(PieceKind::King, Color::White, "e8".parse().unwrap()));
    }

    #[test]
    fn middle_rows_are_empty_at_start() {
        for square in Square::all().filter(|s| (2..=5).contains(&s.row())) {
            assert_eq!(starting_kind_at(Color::White, square), None);
            assert_eq!(starting_kind_at(Color::Black, square), None);
        }
    }
}
