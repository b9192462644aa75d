//! Validating and applying a single move on the board.

use tracing::{debug, info};

use crate::board_location::Square;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::piece::Piece;
use crate::move_description::{MoveOutcome, RejectReason};
use crate::move_generation::legal_move_checks::is_path_clear;
use crate::moves::pawn_moves::{pawn_step, PawnStep};

/// Runs every check `apply_move` performs without touching the board.
///
/// Checks run in a fixed order: piece present, legal shape, clear path, not
/// landing on an own piece, then the pawn-specific occupancy rules. On success
/// returns the enemy piece that would be captured, if any.
pub fn validate_move(
    board: &Board,
    source: Square,
    destination: Square,
) -> Result<Option<Piece>, RejectReason> {
    let piece = *board
        .piece_at(source)
        .ok_or(RejectReason::NoPieceAtSource)?;

    if !piece.is_valid_move(destination) {
        return Err(RejectReason::IllegalShape);
    }

    // Also covers the square a pawn double step passes over. Knights, kings and
    // single steps have no intermediate squares.
    if !is_path_clear(board, source, destination) {
        return Err(RejectReason::PathObstructed);
    }

    let target = board.piece_at(destination).copied();
    if target.is_some_and(|t| t.color() == piece.color()) {
        return Err(RejectReason::BlockedBySameColor);
    }

    if piece.kind() == PieceKind::Pawn {
        let (d_row, d_column) = source.delta_to(destination);
        match pawn_step(piece.color(), source.row(), d_row, d_column) {
            Some(PawnStep::Capture) if target.is_none() => {
                return Err(RejectReason::PawnCaptureRequiresEnemy)
            }
            Some(PawnStep::Advance | PawnStep::DoubleAdvance) if target.is_some() => {
                return Err(RejectReason::PathObstructed)
            }
            _ => {}
        }
    }

    Ok(target)
}

/// Applies a move if it passes `validate_move`; otherwise leaves the board as it
/// was and reports the reason.
pub fn apply_move(board: &mut Board, source: Square, destination: Square) -> MoveOutcome {
    if let Err(reason) = validate_move(board, source, destination) {
        debug!(%source, %destination, %reason, "move rejected");
        return MoveOutcome::rejected(reason);
    }

    let Some(mut piece) = board.remove(source) else {
        return MoveOutcome::rejected(RejectReason::NoPieceAtSource);
    };
    let captured = board.remove(destination);
    piece.relocate(destination);
    board.put(piece);

    match captured {
        Some(victim) => info!(
            %source,
            %destination,
            mover = %piece.kind(),
            captured = %victim.kind(),
            "capture"
        ),
        None => info!(%source, %destination, mover = %piece.kind(), "move"),
    }

    MoveOutcome::Moved {
        from: source,
        to: destination,
        captured,
    }
}
