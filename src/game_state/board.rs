//! The 8x8 board and the canonical record of where every piece stands.
//!
//! The board is an owned value mutated in place for the length of a game.
//! `Clone` is the only way to snapshot it.

use crate::board_location::Square;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::starting_layout;
use crate::game_state::chess_types::Color;
use crate::game_state::piece::Piece;
use crate::move_description::MoveOutcome;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_path_clear, squares_between};
use crate::move_generation::legal_move_generator::candidate_destinations;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Board holding the standard starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (kind, color, square) in starting_layout() {
            *board.slot_mut(square) = Some(Piece::new(kind, color, square));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row() as usize][square.column() as usize].as_ref()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(Piece::color)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Puts `piece` on `square` during setup. The piece's stored location is set
    /// to `square`.
    pub fn place(&mut self, mut piece: Piece, square: Square) -> Result<(), ChessErrors> {
        if self.is_occupied(square) {
            return Err(ChessErrors::OccupiedSquare(square));
        }
        piece.relocate(square);
        *self.slot_mut(square) = Some(piece);
        Ok(())
    }

    /// Takes the piece off `square`, if there is one.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.slot_mut(square).take()
    }

    /// Every piece on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Squares strictly between `source` and `destination` on a shared line.
    pub fn squares_between(&self, source: Square, destination: Square) -> Vec<Square> {
        squares_between(source, destination)
    }

    /// True iff no piece stands strictly between `source` and `destination`.
    pub fn is_path_clear(&self, source: Square, destination: Square) -> bool {
        is_path_clear(self, source, destination)
    }

    /// Validates and applies a move. All-or-nothing: a rejection leaves the board
    /// untouched.
    pub fn apply_move(&mut self, source: Square, destination: Square) -> MoveOutcome {
        apply_move(self, source, destination)
    }

    /// Destinations `apply_move` would accept for the piece on `source`.
    pub fn candidate_destinations(&self, source: Square) -> Vec<Square> {
        candidate_destinations(self, source)
    }

    /// Drops `piece` at its own location, replacing whatever stood there.
    pub(crate) fn put(&mut self, piece: Piece) -> Option<Piece> {
        self.slot_mut(piece.location()).replace(piece)
    }

    #[inline]
    fn slot_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.squares[square.row() as usize][square.column() as usize]
    }
}
