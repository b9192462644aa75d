//! Seeded random self-play through the game controller.
//!
//! Each ply picks a random candidate move for the side to move and plays it with
//! two `select_square` clicks, exactly as a presentation layer would. There is no
//! check detection, so a game ends when a king is captured, when the side to move
//! has no candidate move, or after `max_plies`.

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use tracing::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_controller::{GameController, SelectionEvent};
use crate::move_description::MoveOutcome;
use crate::move_generation::legal_move_generator::candidate_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
    pub verbose: bool,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 200,
            verbose: false,
        }
    }
}

impl PlayoutConfig {
    /// Defaults overridden by `CHESS_CORE_SEED`, `CHESS_CORE_MAX_PLIES` and
    /// `CHESS_CORE_VERBOSE` when they are set and parse.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: std::env::var("CHESS_CORE_SEED")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(defaults.seed),
            max_plies: std::env::var("CHESS_CORE_MAX_PLIES")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.max_plies),
            verbose: std::env::var("CHESS_CORE_VERBOSE")
                .ok()
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.verbose),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    KingCaptured { winner: Color },
    NoCandidateMoves { side: Color },
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub outcome: PlayoutOutcome,
    pub plies: u16,
    pub captures: u16,
    pub moves: Vec<String>,
    pub final_game: GameController,
}

impl PlayoutReport {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} captures={} pieces_left={}",
            self.outcome,
            self.plies,
            self.captures,
            self.final_game.board().piece_count()
        )
    }
}

/// Play one seeded random game from the starting layout.
pub fn play_random_game(config: &PlayoutConfig) -> Result<PlayoutReport, ChessErrors> {
    play_random_game_from(GameController::new(), config)
}

/// Play one seeded random game from a caller-provided position.
pub fn play_random_game_from(
    mut game: GameController,
    config: &PlayoutConfig,
) -> Result<PlayoutReport, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut moves = Vec::<String>::new();
    let mut captures = 0u16;
    let mut plies = 0u16;

    let outcome = loop {
        if plies >= config.max_plies {
            break PlayoutOutcome::MaxPlies;
        }

        let side = game.current_turn();
        let candidates = candidate_moves(game.board(), side);
        let Some(&(from, to)) = candidates.choose(&mut rng) else {
            break PlayoutOutcome::NoCandidateMoves { side };
        };

        game.select_square(from);
        let event = game.select_square(to);
        let SelectionEvent::MoveAttempted(outcome @ MoveOutcome::Moved { captured, .. }) = event
        else {
            return Err(ChessErrors::CandidateRejected { from, to });
        };

        plies += 1;
        moves.push(format!("{from}{to}"));
        if config.verbose {
            debug!(ply = plies, %side, %outcome, "playout move");
        }

        if let Some(victim) = captured {
            captures += 1;
            if victim.kind() == PieceKind::King {
                break PlayoutOutcome::KingCaptured { winner: side };
            }
        }
    };

    let report = PlayoutReport {
        outcome,
        plies,
        captures,
        moves,
        final_game: game,
    };
    info!(seed = config.seed, "{}", report.report());
    Ok(report)
}
