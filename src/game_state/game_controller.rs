//! Turn order and square selection on top of a `Board`.
//!
//! A presentation layer drives the controller with `select_square` as squares are
//! clicked, reads `piece_at` and `current_turn` to render, and reads
//! `last_outcome` or `status_message` after each move attempt.

use tracing::debug;

use crate::board_location::Square;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_description::{MoveOutcome, RejectReason};

/// Where the controller is in the click-to-move cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingSelection,
    PieceSelected(Square),
}

/// What a single `select_square` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A piece of the side to move was picked up.
    Selected(Square),
    /// The selected square was clicked again.
    Deselected,
    /// Nothing happened (empty square or enemy piece with nothing selected).
    Ignored,
    /// A move from the selected square was attempted.
    MoveAttempted(MoveOutcome),
}

#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: Color,
    selection: SelectionState,
    last_outcome: Option<MoveOutcome>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Standard starting layout, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }

    /// Takes ownership of an already set-up board.
    pub fn with_board(board: Board, turn: Color) -> Self {
        GameController {
            board,
            turn,
            selection: SelectionState::AwaitingSelection,
            last_outcome: None,
        }
    }

    /// Throws away the current game and starts over from the starting layout.
    pub fn new_game(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcome of the latest move attempt, cleared when a piece is selected or
    /// deselected.
    #[inline]
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    /// Variant and color of whatever stands on `square`.
    pub fn piece_at(&self, square: Square) -> Option<(PieceKind, Color)> {
        self.board.piece_at(square).map(|p| (p.kind(), p.color()))
    }

    /// Advances the selection state machine with one clicked square.
    pub fn select_square(&mut self, square: Square) -> SelectionEvent {
        match self.selection {
            SelectionState::AwaitingSelection => {
                if self.board.color_at(square) == Some(self.turn) {
                    debug!(%square, "piece selected");
                    self.selection = SelectionState::PieceSelected(square);
                    self.last_outcome = None;
                    SelectionEvent::Selected(square)
                } else {
                    SelectionEvent::Ignored
                }
            }
            SelectionState::PieceSelected(selected) if selected == square => {
                debug!(%square, "piece deselected");
                self.selection = SelectionState::AwaitingSelection;
                self.last_outcome = None;
                SelectionEvent::Deselected
            }
            SelectionState::PieceSelected(selected) => {
                // A rejected attempt keeps the selection so the player can retry.
                SelectionEvent::MoveAttempted(self.attempt_move(selected, square))
            }
        }
    }

    /// Tries a move directly, bypassing selection. On success the turn passes to
    /// the other side and any selection is cleared.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let outcome = match self.board.color_at(from) {
            None => MoveOutcome::rejected(RejectReason::NoPieceAtSource),
            Some(color) if color != self.turn => MoveOutcome::rejected(RejectReason::NotYourTurn),
            Some(_) => self.board.apply_move(from, to),
        };

        if outcome.is_moved() {
            self.turn = self.turn.opposite();
            self.selection = SelectionState::AwaitingSelection;
        }
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Destinations to highlight for the current selection.
    pub fn candidate_squares(&self) -> Vec<Square> {
        match self.selection {
            SelectionState::PieceSelected(square) => self.board.candidate_destinations(square),
            SelectionState::AwaitingSelection => Vec::new(),
        }
    }

    /// One line of status text, e.g. `"White's turn."`.
    pub fn status_message(&self) -> String {
        match self.last_outcome {
            Some(MoveOutcome::Rejected { reason }) => {
                format!("Illegal move: {reason}. {}'s turn.", self.turn)
            }
            _ => format!("{}'s turn.", self.turn),
        }
    }
}
