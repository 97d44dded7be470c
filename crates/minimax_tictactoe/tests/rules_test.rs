//! Tests for board queries and the transition function.

use minimax_tictactoe::{
    Action, Board, Cell, InvalidMoveReason, LINES, Mark, Outcome, apply_action, current_player,
    initial_state, is_terminal, legal_actions, outcome, utility, winner,
};
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// Collects every board reachable from the empty board through legal moves.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            stack.push(apply_action(&board, action).unwrap());
        }
    }
    seen
}

/// Checks whether any line holds three identical marks, independently of `winner`.
fn has_uniform_line(board: &Board) -> bool {
    LINES.iter().any(|line| {
        let cells: Vec<Cell> = line
            .iter()
            .map(|&pos| board.get(Action::from(pos)).unwrap())
            .collect();
        cells[0] != Cell::Empty && cells.iter().all(|c| *c == cells[0])
    })
}

#[test]
fn test_reachable_state_count() {
    // Well-known count of distinct positions reachable in legal play.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_mark_counts_stay_balanced() {
    for board in reachable_boards() {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        assert!(x == o || x == o + 1, "unbalanced board:\n{board}");
    }
}

#[test]
fn test_current_player_alternates() {
    for board in reachable_boards().into_iter().filter(|b| !is_terminal(b)) {
        let mover = current_player(&board);
        for action in legal_actions(&board) {
            let next = apply_action(&board, action).unwrap();
            assert_eq!(next.get(action), Some(Cell::Occupied(mover)));
            assert_eq!(current_player(&next), mover.opponent());
        }
    }
}

#[test]
fn test_played_cell_no_longer_legal() {
    for board in reachable_boards().into_iter().filter(|b| !is_terminal(b)) {
        for action in legal_actions(&board) {
            let next = apply_action(&board, action).unwrap();
            let remaining = legal_actions(&next);
            assert!(!remaining.contains(&action));
            assert_eq!(remaining.len(), legal_actions(&board).len() - 1);
        }
    }
}

#[test]
fn test_winner_iff_uniform_line() {
    for board in reachable_boards() {
        assert_eq!(winner(&board).is_some(), has_uniform_line(&board), "{board}");
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for board in reachable_boards() {
        let expected = winner(&board).is_some() || legal_actions(&board).is_empty();
        assert_eq!(is_terminal(&board), expected, "{board}");
    }
}

#[test]
fn test_occupied_cells_rejected_everywhere() {
    let board: Board = "XO. .X. ..O".parse().unwrap();
    for action in Action::all().filter(|a| board.get(*a) != Some(Cell::Empty)) {
        let err = apply_action(&board, action).unwrap_err();
        assert!(matches!(err.reason, InvalidMoveReason::Occupied(_)));
    }
}

#[test]
fn test_out_of_range_rejected() {
    let board = initial_state();
    for action in [Action::new(0, 3), Action::new(3, 3), Action::new(usize::MAX, 1)] {
        let err = apply_action(&board, action).unwrap_err();
        assert_eq!(err.reason, InvalidMoveReason::OutOfBounds);
        assert_eq!(err.action, action);
    }
}

#[test]
fn test_invalid_move_message() {
    let board: Board = "X........".parse().unwrap();
    let err = apply_action(&board, Action::new(0, 0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid move (0, 0): cell is already occupied by X"
    );
}

#[test]
fn test_full_board_draw_scenario() {
    let board: Board = "XOX OXO OXO".parse().unwrap();
    assert_eq!(winner(&board), None);
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 0);
    assert_eq!(outcome(&board), Outcome::Draw);
}

#[test]
fn test_x_row_win_scenario() {
    let board: Board = "XXX OO. ...".parse().unwrap();
    assert_eq!(winner(&board), Some(Mark::X));
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 1);
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for mark in Mark::iter() {
        for line in LINES {
            let mut rows = [[Cell::Empty; 3]; 3];
            for (row, col) in line {
                rows[row][col] = Cell::Occupied(mark);
            }
            let board = Board::from_rows(rows);
            assert_eq!(winner(&board), Some(mark));
            assert!(is_terminal(&board));
        }
    }
}

#[test]
fn test_board_serializes_as_json() {
    let board: Board = "XO. .X. ..O".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
