//! Crate root module declarations for the chess rules core.
//!
//! Exposes coordinates, pieces and the board, per-piece movement shapes, move
//! validation and application, the turn/selection controller, and text utilities
//! so binaries, tests and presentation layers can import stable module paths.

pub mod board_location;
pub mod chess_errors;
pub mod move_description;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_controller;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shape;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod utils {
    pub mod algebraic;
    pub mod logging;
    pub mod random_playout;
    pub mod render_game_state;
}
