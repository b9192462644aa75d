//! A chess piece: its variant, its side, and where it currently stands.

use crate::board_location::Square;
use crate::game_state::chess_rules::is_starting_square;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::move_shape::legal_shape;

/// A piece and its current location.
///
/// Identity is `kind` + `color`. The location is mutated by `move_to` for a
/// free-standing piece, and by the board when it applies a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    location: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, location: Square) -> Self {
        Piece {
            kind,
            color,
            location,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn location(&self) -> Square {
        self.location
    }

    /// True iff this piece stands where the starting layout puts a piece of its
    /// kind and color.
    pub fn is_valid_starting_position(&self) -> bool {
        is_starting_square(self.kind, self.color, self.location)
    }

    /// Geometric legality of moving to `destination`, ignoring other pieces.
    pub fn is_valid_move(&self, destination: Square) -> bool {
        legal_shape(self.kind, self.color, self.location, destination)
    }

    /// Like `is_valid_move` but takes raw grid coordinates, which may lie off the
    /// board. Off-board destinations are simply illegal.
    pub fn is_valid_move_to(&self, row: i8, column: i8) -> bool {
        Square::new(row, column)
            .map(|destination| self.is_valid_move(destination))
            .unwrap_or(false)
    }

    /// Moves the piece if the shape is legal. On `false` nothing changed.
    pub fn move_to(&mut self, destination: Square) -> bool {
        if !self.is_valid_move(destination) {
            return false;
        }
        self.location = destination;
        true
    }

    /// Relocation used by the board once it has validated a move.
    pub(crate) fn relocate(&mut self, destination: Square) {
        self.location = destination;
    }

    /// Unicode glyph for text rendering.
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_location::File;
    use crate::game_state::chess_rules::starting_layout;

    fn bishop(file: File, rank: i8, color: Color) -> Piece {
        Piece::new(
            PieceKind::Bishop,
            color,
            Square::from_algebraic(file, rank).unwrap(),
        )
    }

    #[test]
    fn bishops_on_their_home_squares_are_valid() {
        let white_left = bishop(File::C, 1, Color::White);
        assert!(white_left.is_valid_starting_position());
        assert_eq!((white_left.location().row(), white_left.location().column()), (7, 2));
        assert!(bishop(File::F, 1, Color::White).is_valid_starting_position());
        assert!(bishop(File::C, 8, Color::Black).is_valid_starting_position());
        assert!(bishop(File::F, 8, Color::Black).is_valid_starting_position());
    }

    #[test]
    fn bishops_of_the_wrong_color_or_column_are_invalid() {
        assert!(!bishop(File::C, 8, Color::White).is_valid_starting_position());
        assert!(!bishop(File::F, 8, Color::White).is_valid_starting_position());
        assert!(!bishop(File::C, 1, Color::Black).is_valid_starting_position());
        assert!(!bishop(File::F, 1, Color::Black).is_valid_starting_position());
        assert!(!bishop(File::A, 1, Color::White).is_valid_starting_position());
        assert!(!bishop(File::B, 1, Color::White).is_valid_starting_position());
        assert!(!bishop(File::G, 8, Color::Black).is_valid_starting_position());
        assert!(!bishop(File::H, 8, Color::Black).is_valid_starting_position());
        assert!(!bishop(File::H, 7, Color::Black).is_valid_starting_position());
        assert!(!bishop(File::A, 5, Color::White).is_valid_starting_position());
    }

    #[test]
    fn starting_layout_is_valid_and_any_single_step_breaks_it() {
        for (kind, color, square) in starting_layout() {
            let piece = Piece::new(kind, color, square);
            assert!(piece.is_valid_starting_position(), "{kind} {color} {square}");

            let inward = if square.row() < 4 { 1 } else { -1 };
            let mut shifts = vec![(inward, 0), (2 * inward, 0), (2 * inward, 1), (2 * inward, -1)];
            // A pawn shifted along its row lands on another pawn square.
            if kind != PieceKind::Pawn {
                shifts.extend([(0, 1), (0, -1)]);
            }
            for (r, c) in shifts {
                if let Ok(moved) = square.offset(r, c) {
                    let shifted = Piece::new(kind, color, moved);
                    assert!(!shifted.is_valid_starting_position(), "{kind} {color} {moved}");
                }
            }
        }
    }

    #[test]
    fn back_rank_pieces_shifted_sideways_are_invalid() {
        for (kind, from, to) in [
            (PieceKind::Rook, "a1", "b1"),
            (PieceKind::Knight, "g8", "h8"),
            (PieceKind::Bishop, "f1", "e1"),
            (PieceKind::Queen, "d1", "e1"),
            (PieceKind::King, "e8", "d8"),
        ] {
            let color = if from.ends_with('1') { Color::White } else { Color::Black };
            let home = Piece::new(kind, color, from.parse().unwrap());
            let shifted = Piece::new(kind, color, to.parse().unwrap());
            assert!(home.is_valid_starting_position(), "{kind} {from}");
            assert!(!shifted.is_valid_starting_position(), "{kind} {to}");
        }
    }

    #[test]
    fn pieces_swapped_along_the_back_rank_are_invalid() {
        let white_queen_on_king_square = Piece::new(PieceKind::Queen, Color::White, "e1".parse().unwrap());
        let black_knight_on_bishop_square = Piece::new(PieceKind::Knight, Color::Black, "c8".parse().unwrap());
        let white_pawn_on_black_row = Piece::new(PieceKind::Pawn, Color::White, "a7".parse().unwrap());
        assert!(!white_queen_on_king_square.is_valid_starting_position());
        assert!(!black_knight_on_bishop_square.is_valid_starting_position());
        assert!(!white_pawn_on_black_row.is_valid_starting_position());
    }

    #[test]
    fn bishop_from_c1_checks_shape_and_bounds() {
        let b = bishop(File::C, 1, Color::White);
        assert!(!b.is_valid_move(b.location()));
        assert!(b.is_valid_move("d2".parse().unwrap()));
        assert!(b.is_valid_move("f4".parse().unwrap()));
        assert!(b.is_valid_move("h6".parse().unwrap()));
        assert!(b.is_valid_move("b2".parse().unwrap()));
        assert!(b.is_valid_move("a3".parse().unwrap()));
        // down-right would leave the board
        assert!(!b.is_valid_move_to(8, 3));
        assert!(!b.is_valid_move_to(-1, 5));
    }

    #[test]
    fn bishop_from_the_middle_reaches_every_corner_diagonal() {
        let b = bishop(File::D, 5, Color::Black);
        assert!(b.is_valid_move("a8".parse().unwrap()));
        assert!(b.is_valid_move("g8".parse().unwrap()));
        assert!(b.is_valid_move("a2".parse().unwrap()));
        assert!(b.is_valid_move("h1".parse().unwrap()));
        assert!(!b.is_valid_move_to(-1, 7));
    }

    #[test]
    fn bishop_rejects_non_diagonal_moves() {
        let b = bishop(File::C, 3, Color::Black);
        for target in ["f3", "c6", "c2", "h4", "a8", "e4", "a2", "h1", "f1"] {
            assert!(!b.is_valid_move(target.parse().unwrap()), "{target}");
        }
    }

    #[test]
    fn failed_move_leaves_location_unchanged() {
        let mut rook = Piece::new(PieceKind::Rook, Color::White, "a1".parse().unwrap());
        assert!(!rook.move_to("b2".parse().unwrap()));
        assert_eq!(rook.location().to_string(), "a1");
        assert!(rook.move_to("a7".parse().unwrap()));
        assert_eq!(rook.location().to_string(), "a7");
    }
}
