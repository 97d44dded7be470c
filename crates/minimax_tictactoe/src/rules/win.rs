//! Win detection logic for tic-tac-toe.

use crate::types::{Action, Board, Mark};

/// Every line of three: rows, then columns, then diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line found, scanning rows,
/// then columns, then diagonals. On a reachable board at most one player
/// can hold a line, so the scan order does not affect the result.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(Action::from(a))?.mark()?;
        let uniform = board.get(Action::from(b))?.mark() == Some(mark)
            && board.get(Action::from(c))?.mark() == Some(mark);
        uniform.then_some(mark)
    })
}
