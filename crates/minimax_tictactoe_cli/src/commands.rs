//! Command implementations.
//!
//! Each command renders its report to a `String` so `main` only prints.

use minimax_tictactoe::{Board, InvalidMove, Searcher, current_player, initial_state, outcome};
use std::fmt::Write;
use tracing::{info, instrument};

/// Describes the position and the optimal move for the player to move.
#[instrument(skip(searcher, board))]
pub fn solve(searcher: &Searcher, board: &Board, json: bool) -> anyhow::Result<String> {
    let evaluation = searcher.evaluate(board);
    if json {
        return Ok(serde_json::to_string_pretty(&evaluation)?);
    }

    let mut report = format!("{board}\n\n");
    writeln!(report, "Outcome: {}", outcome(board))?;
    match evaluation {
        Some(eval) => {
            info!(action = %eval.action(), value = *eval.value(), "Solved position");
            writeln!(report, "To move: {}", current_player(board))?;
            writeln!(report, "Best move: {}", eval.action())?;
            writeln!(report, "Value: {}", describe_value(*eval.value()))?;
            write!(report, "Nodes searched: {}", eval.nodes())?;
        }
        None => write!(report, "No move: the game is over")?,
    }
    Ok(report)
}

/// Plays the game out with optimal moves for both sides.
///
/// # Errors
///
/// Returns [`InvalidMove`] if the search proposes an illegal action.
#[instrument(skip_all)]
pub fn selfplay(searcher: &Searcher, from: Option<&Board>) -> Result<String, InvalidMove> {
    let start = from.copied().unwrap_or_else(initial_state);
    let boards = searcher.play_out(&start)?;

    let mut report = String::new();
    for (ply, board) in boards.iter().enumerate() {
        report.push_str(&format!("Ply {ply}:\n{board}\n\n"));
    }
    let last = boards.last().copied().unwrap_or(start);
    report.push_str(&format!("Result: {}", outcome(&last)));
    info!(plies = boards.len() - 1, result = %outcome(&last), "Self-play finished");
    Ok(report)
}

fn describe_value(value: i8) -> &'static str {
    match value {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}
