//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the text front end, tests and
//! diagnostics. White is drawn at the bottom.

use crate::board_location::Square;
use crate::game_state::board::Board;

/// Render the board to a Unicode string. Squares in `highlights` are drawn as `*`
/// when empty and bracketed when occupied.
pub fn render_board(board: &Board, highlights: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..8i8 {
        let rank = 8 - row;
        out.push(char::from(b'0' + rank as u8));
        out.push(' ');

        for column in 0..8i8 {
            let Ok(square) = Square::new(row, column) else {
                continue;
            };
            let highlighted = highlights.contains(&square);
            let glyph = board.piece_at(square).map(|p| p.symbol());
            match (glyph, highlighted) {
                (Some(ch), true) => {
                    out.push('[');
                    out.push(ch);
                    out.push(']');
                }
                (Some(ch), false) => {
                    out.push(' ');
                    out.push(ch);
                    out.push(' ');
                }
                (None, true) => out.push_str(" * "),
                (None, false) => out.push_str(" · "),
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank as u8));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}
