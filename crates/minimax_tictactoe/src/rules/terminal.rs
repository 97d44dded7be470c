//! End-of-game detection and scoring.

use super::win::winner;
use crate::types::{Board, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Summary of a board's game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Mark),
    /// The board filled with no line.
    #[display("draw")]
    Draw,
}

/// Checks if the game is over: a player has a line or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a board from X's perspective.
///
/// `1` when X holds a line, `-1` when O does, `0` otherwise. Only
/// meaningful on terminal boards; a non-terminal board scores `0`.
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Classifies the board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(mark) => Outcome::Won(mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
