//! Command-line interface for minimax-tictactoe.

use clap::{Parser, Subcommand};
use minimax_tictactoe::{Board, TieBreak};
use std::path::PathBuf;

/// Minimax Tic-Tac-Toe - exhaustive optimal-play solver
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` for empty.
/// Spaces and `|` are ignored, so `"XO. .X. ..O"` is a valid board.
#[derive(Parser, Debug)]
#[command(name = "minimax-tictactoe")]
#[command(about = "Solve tic-tac-toe positions with exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured tie-break (first or last)
    #[arg(long, global = true)]
    pub tie_break: Option<TieBreak>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the optimal move for the player to move
    Solve {
        /// Board to solve
        board: Board,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play optimal moves for both sides until the game ends
    Selfplay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        from: Option<Board>,
    },
}
