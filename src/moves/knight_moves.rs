//! Knight movement shape.

/// True iff `(|d_row|, |d_column|)` is `(1, 2)` or `(2, 1)`.
#[inline]
pub fn is_knight_shape(d_row: i8, d_column: i8) -> bool {
    matches!((d_row.abs(), d_column.abs()), (1, 2) | (2, 1))
}
