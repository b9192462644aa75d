use std::io::{self, BufRead, Write};

use tracing::warn;

use chess_core::board_location::Square;
use chess_core::game_state::game_controller::{GameController, SelectionEvent};
use chess_core::utils::algebraic::{algebraic_to_square, parse_move_pair};
use chess_core::utils::logging::init_logging;
use chess_core::utils::render_game_state::render_board;

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Select(Square),
    Move(Square, Square),
    Board,
    New,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();
    match (head, rest.as_slice()) {
        ("select" | "s", [square]) => algebraic_to_square(square)
            .map(Command::Select)
            .map_err(|e| e.to_string()),
        ("move" | "m", args) if !args.is_empty() => parse_move_pair(&args.join(" "))
            .map(|(from, to)| Command::Move(from, to))
            .map_err(|e| e.to_string()),
        ("board" | "b", []) => Ok(Command::Board),
        ("new", []) => Ok(Command::New),
        ("quit" | "exit" | "q", []) => Ok(Command::Quit),
        ("help" | "?", []) => Ok(Command::Help),
        // A bare square behaves like a click.
        (square, []) => algebraic_to_square(square)
            .map(Command::Select)
            .map_err(|_| format!("unknown command: {line}")),
        _ => Err(format!("unknown command: {line}")),
    }
}

const HELP: &str = "commands: select <sq> | <sq> | move <from> <to> | board | new | quit";

fn main() {
    init_logging("info");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run(stdin.lock(), &mut stdout) {
        warn!(error = %e, "output closed");
    }
}

/// Reads commands from `input` until it ends or `quit`, writing the board and
/// status to `output`. A failed write ends the session.
fn run(input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let mut game = GameController::new();

    writeln!(output, "{}", render_board(game.board(), &[]))?;
    writeln!(output, "{}", game.status_message())?;
    output.flush()?;

    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_command(trimmed) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::New) => {
                game.new_game();
                writeln!(output, "{}", render_board(game.board(), &[]))?;
            }
            Ok(Command::Board) => {
                writeln!(output, "{}", render_board(game.board(), &game.candidate_squares()))?;
            }
            Ok(Command::Select(square)) => match game.select_square(square) {
                SelectionEvent::Selected(_) => {
                    writeln!(output, "{}", render_board(game.board(), &game.candidate_squares()))?;
                }
                SelectionEvent::Deselected => writeln!(output, "deselected {square}")?,
                SelectionEvent::Ignored => writeln!(output, "nothing to select on {square}")?,
                SelectionEvent::MoveAttempted(outcome) => {
                    writeln!(output, "{outcome}")?;
                    if outcome.is_moved() {
                        writeln!(output, "{}", render_board(game.board(), &[]))?;
                    }
                }
            },
            Ok(Command::Move(from, to)) => {
                let outcome = game.attempt_move(from, to);
                writeln!(output, "{outcome}")?;
                if outcome.is_moved() {
                    writeln!(output, "{}", render_board(game.board(), &[]))?;
                }
            }
            Err(message) => {
                warn!("{message}");
                writeln!(output, "{HELP}")?;
            }
        }

        writeln!(output, "{}", game.status_message())?;
        output.flush()?;
    }
    Ok(())
}
