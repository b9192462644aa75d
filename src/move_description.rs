//! Results of a move attempt.
//!
//! A rejected move is an ordinary outcome of play, not an error: the board is left
//! exactly as it was and the reason is handed back for display.

use std::fmt;

use crate::board_location::Square;
use crate::game_state::piece::Piece;

/// Why a move attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The piece on the source square belongs to the side not on move.
    NotYourTurn,
    /// The source square is empty.
    NoPieceAtSource,
    /// The displacement is not a legal shape for the piece.
    IllegalShape,
    /// A piece stands between source and destination, or in front of a pawn.
    PathObstructed,
    /// The destination holds a piece of the mover's own color.
    BlockedBySameColor,
    /// A pawn stepped diagonally onto an empty square.
    PawnCaptureRequiresEnemy,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::NotYourTurn => "not your turn",
            RejectReason::NoPieceAtSource => "no piece on that square",
            RejectReason::IllegalShape => "that piece cannot move that way",
            RejectReason::PathObstructed => "the path is obstructed",
            RejectReason::BlockedBySameColor => "blocked by own piece",
            RejectReason::PawnCaptureRequiresEnemy => "pawns only move diagonally to capture",
        };
        f.write_str(text)
    }
}

/// What happened to a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied. `captured` is the removed enemy piece, if any, with
    /// its location as it was before the capture.
    Moved {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// The move was refused and nothing changed.
    Rejected { reason: RejectReason },
}

impl MoveOutcome {
    #[inline]
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    #[inline]
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Rejected { reason } => Some(*reason),
            MoveOutcome::Moved { .. } => None,
        }
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        match self {
            MoveOutcome::Moved { captured, .. } => *captured,
            MoveOutcome::Rejected { .. } => None,
        }
    }

    pub(crate) fn rejected(reason: RejectReason) -> Self {
        MoveOutcome::Rejected { reason }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Moved {
                from,
                to,
                captured: Some(piece),
            } => write!(f, "{from}-{to} captures {} {}", piece.color(), piece.kind()),
            MoveOutcome::Moved { from, to, captured: None } => write!(f, "{from}-{to}"),
            MoveOutcome::Rejected { reason } => write!(f, "rejected: {reason}"),
        }
    }
}
