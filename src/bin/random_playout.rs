//! Plays one seeded random game and prints the result.
//!
//! Configure with `CHESS_CORE_SEED`, `CHESS_CORE_MAX_PLIES`, `CHESS_CORE_VERBOSE`
//! and `RUST_LOG`.

use std::process::ExitCode;

use tracing::error;

use chess_core::utils::logging::init_logging;
use chess_core::utils::random_playout::{play_random_game, PlayoutConfig};
use chess_core::utils::render_game_state::render_board;

fn main() -> ExitCode {
    init_logging("warn");

    let config = PlayoutConfig::from_env();
    match play_random_game(&config) {
        Ok(report) => {
            println!("{}", render_board(report.final_game.board(), &[]));
            println!("moves: {}", report.moves.join(" "));
            println!("{}", report.report());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(seed = config.seed, "playout failed: {e}");
            ExitCode::FAILURE
        }
    }
}
