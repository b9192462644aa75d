//! Per-variant geometric legality, dispatched by piece kind.

use crate::board_location::Square;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::bishop_moves::is_bishop_shape;
use crate::moves::king_moves::is_king_shape;
use crate::moves::knight_moves::is_knight_shape;
use crate::moves::pawn_moves::is_pawn_shape;
use crate::moves::queen_moves::is_queen_shape;
use crate::moves::rook_moves::is_rook_shape;

/// True iff moving a `kind`/`color` piece from `from` to `to` has a legal shape,
/// ignoring every other piece on the board. The zero move is never legal.
pub fn legal_shape(kind: PieceKind, color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_column) = from.delta_to(to);
    match kind {
        PieceKind::Pawn => is_pawn_shape(color, from.row(), d_row, d_column),
        PieceKind::Knight => is_knight_shape(d_row, d_column),
        PieceKind::Bishop => is_bishop_shape(d_row, d_column),
        PieceKind::Rook => is_rook_shape(d_row, d_column),
        PieceKind::Queen => is_queen_shape(d_row, d_column),
        PieceKind::King => is_king_shape(d_row, d_column),
    }
}

#[cfg(test)]
mod tests {
    use super::legal_shape;
    use crate::board_location::Square;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn zero_move_is_illegal_for_every_kind() {
        for square in Square::all() {
            for kind in PieceKind::ALL {
                assert!(!legal_shape(kind, Color::White, square, square));
                assert!(!legal_shape(kind, Color::Black, square, square));
            }
        }
    }

    #[test]
    fn dispatch_reaches_each_variant() {
        let d4: Square = "d4".parse().unwrap();
        let f6: Square = "f6".parse().unwrap();
        let d7: Square = "d7".parse().unwrap();
        let e6: Square = "e6".parse().unwrap();
        assert!(legal_shape(PieceKind::Bishop, Color::White, d4, f6));
        assert!(!legal_shape(PieceKind::Rook, Color::White, d4, f6));
        assert!(legal_shape(PieceKind::Rook, Color::White, d4, d7));
        assert!(legal_shape(PieceKind::Queen, Color::Black, d4, f6));
        assert!(legal_shape(PieceKind::Knight, Color::Black, d4, e6));
        assert!(!legal_shape(PieceKind::King, Color::Black, d4, f6));
        assert!(legal_shape(PieceKind::Pawn, Color::White, d4, "d5".parse().unwrap()));
        assert!(!legal_shape(PieceKind::Pawn, Color::Black, d4, "d5".parse().unwrap()));
    }
}
