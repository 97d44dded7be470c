//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values: turn order, legal actions, and
//! end-of-game evaluation. The search calls these at every node.

pub mod terminal;
pub mod win;

pub use terminal::{Outcome, is_terminal, outcome, utility};
pub use win::winner;

use crate::types::{Action, Board, Cell, Mark};
use std::collections::BTreeSet;

/// Returns the starting board: every cell empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next.
///
/// X moves whenever both players have placed the same number of marks.
/// The board must be reachable from [`initial_state`]; no validation is
/// performed.
pub fn current_player(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every empty cell as an action.
///
/// An empty set means the board is full.
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    Action::all()
        .filter(|&action| board.get(action) == Some(Cell::Empty))
        .collect()
}
