//! Bishop movement shape.
//!
//! A bishop travels any non-zero distance along a diagonal. Obstruction by other
//! pieces is a board concern and is not checked here.

/// True iff `|d_row| == |d_column| > 0`.
#[inline]
pub fn is_bishop_shape(d_row: i8, d_column: i8) -> bool {
    d_row != 0 && d_row.abs() == d_column.abs()
}
