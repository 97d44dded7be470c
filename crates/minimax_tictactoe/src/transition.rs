//! State transition: placing the current player's mark.

use crate::error::{InvalidMove, InvalidMoveReason};
use crate::rules::{current_player, legal_actions};
use crate::types::{Action, Board, Cell};
use tracing::{instrument, warn};

/// Returns the board that results from the current player playing `action`.
///
/// The input board is left untouched; a fresh board is returned.
///
/// # Errors
///
/// Returns [`InvalidMove`] if `action` is off the board or targets an
/// occupied cell.
#[instrument(skip_all, fields(action = %action), err)]
pub fn apply_action(board: &Board, action: Action) -> Result<Board, InvalidMove> {
    match board.get(action) {
        None => {
            warn!("Rejected off-board action");
            Err(InvalidMove::new(action, InvalidMoveReason::OutOfBounds))
        }
        Some(Cell::Occupied(mark)) => {
            warn!(occupant = %mark, "Rejected action on occupied cell");
            Err(InvalidMove::new(action, InvalidMoveReason::Occupied(mark)))
        }
        Some(Cell::Empty) => Ok(board.with(action, Cell::Occupied(current_player(board)))),
    }
}

/// Yields every legal action paired with the board it produces.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let cell = Cell::Occupied(current_player(board));
    legal_actions(board)
        .into_iter()
        .map(move |action| (action, board.with(action, cell)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_state;
    use crate::types::Mark;

    #[test]
    fn test_first_move_places_x() {
        let board = initial_state();
        let next = apply_action(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(Action::new(1, 1)), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board, initial_state());
    }

    #[test]
    fn test_second_move_places_o() {
        let board = apply_action(&initial_state(), Action::new(0, 0)).unwrap();
        let next = apply_action(&board, Action::new(2, 2)).unwrap();
        assert_eq!(next.get(Action::new(2, 2)), Some(Cell::Occupied(Mark::O)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let board = apply_action(&initial_state(), Action::new(0, 0)).unwrap();
        let err = apply_action(&board, Action::new(0, 0)).unwrap_err();
        assert_eq!(err.action, Action::new(0, 0));
        assert_eq!(err.reason, InvalidMoveReason::Occupied(Mark::X));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = initial_state();
        for action in [Action::new(3, 0), Action::new(0, 3), Action::new(9, 9)] {
            let err = apply_action(&board, action).unwrap_err();
            assert_eq!(err.reason, InvalidMoveReason::OutOfBounds);
        }
    }

    #[test]
    fn test_successors_match_apply_action() {
        let board: Board = "X...O....".parse().unwrap();
        let children: Vec<_> = successors(&board).collect();
        assert_eq!(children.len(), 7);
        for (action, child) in children {
            assert_eq!(apply_action(&board, action), Ok(child));
        }
    }
}
