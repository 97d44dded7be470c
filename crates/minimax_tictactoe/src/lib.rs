//! Tic-tac-toe rules and exhaustive minimax search.
//!
//! This crate answers four questions about a 3x3 board: whose turn it is,
//! which moves are legal, what board results from a move, and which move is
//! optimal for the player to move.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Action, apply_action, best_move, initial_state, is_terminal, utility};
//!
//! let mut board = initial_state();
//! board = apply_action(&board, Action::new(1, 1))?;
//! while let Some(action) = best_move(&board) {
//!     board = apply_action(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), minimax_tictactoe::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod rules;
mod search;
mod transition;
mod types;

// Crate-level exports - Board types
pub use types::{Action, Board, BoardParseError, Cell, Mark, SIZE};

// Crate-level exports - Errors
pub use error::{InvalidMove, InvalidMoveReason};

// Crate-level exports - Rules
pub use rules::win::LINES;
pub use rules::{
    Outcome, current_player, initial_state, is_terminal, legal_actions, outcome, utility, winner,
};

// Crate-level exports - Transition
pub use transition::apply_action;

// Crate-level exports - Search
pub use config::{SearchConfig, TieBreak};
pub use search::{
    Evaluation, Searcher, best_move, max_value, min_value, minimax_value, play_optimal,
};
