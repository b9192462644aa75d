/// True iff exactly one of the two deltas is zero.
#[inline]
pub fn is_rook_shape(d_row: i8, d_column: i8) -> bool {
    (d_row == 0) != (d_column == 0)
}

#[cfg(test)]
mod tests {
    use super::is_rook_shape;

    #[test]
    fn straight_lines_are_legal() {
        assert!(is_rook_shape(0, 7));
        assert!(is_rook_shape(-7, 0));
        assert!(is_rook_shape(1, 0));
        assert!(is_rook_shape(0, -1));
    }

    #[test]
    fn zero_move_and_diagonals_are_illegal() {
        assert!(!is_rook_shape(0, 0));
        assert!(!is_rook_shape(1, 1));
        assert!(!is_rook_shape(2, 1));
    }
}
