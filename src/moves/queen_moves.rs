use crate::moves::bishop_moves::is_bishop_shape;
use crate::moves::rook_moves::is_rook_shape;

/// A queen moves like a bishop or like a rook.
#[inline]
pub fn is_queen_shape(d_row: i8, d_column: i8) -> bool {
    is_bishop_shape(d_row, d_column) || is_rook_shape(d_row, d_column)
}
