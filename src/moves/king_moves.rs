/// True iff the destination is one of the eight adjacent squares.
#[inline]
pub fn is_king_shape(d_row: i8, d_column: i8) -> bool {
    d_row.abs().max(d_column.abs()) == 1
}
