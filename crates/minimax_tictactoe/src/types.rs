//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A player's symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Cell {
    /// Empty cell.
    #[default]
    #[display(".")]
    Empty,
    /// Cell occupied by a player.
    #[display("{_0}")]
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `(row, col)` coordinate identifying a cell.
///
/// Coordinates are not range-checked on construction so that out-of-range
/// input can reach the transition function and be rejected there. Actions
/// order row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row coordinate.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column coordinate.
    pub fn col(self) -> usize {
        self.col
    }

    /// Checks that both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// All nine on-board actions in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every move produces a new board, so earlier
/// snapshots stay valid while the search explores sibling branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Gets the cell at `action`, or `None` when it lies off the board.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells
            .get(action.row())
            .and_then(|row| row.get(action.col()))
            .copied()
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Returns a copy of this board with `cell` written at `action`.
    ///
    /// Callers guarantee `action` is in bounds.
    pub(crate) fn with(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row()][action.col()] = cell;
        self
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    Length {
        /// Number of cells found.
        found: usize,
    },
    /// The text contained a character that is not a cell.
    #[display("Unexpected character {character:?} at cell {index}")]
    Character {
        /// Offending character.
        character: char,
        /// Index of the cell being read.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (either case) are marks and `.`, `-`, `_` are empty cells.
    /// Whitespace, `|` and `/` are ignored.
    #[instrument(err)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for character in s.chars() {
            if character.is_ascii_whitespace() || character == '|' || character == '/' {
                continue;
            }
            let cell = match character {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                _ => {
                    return Err(BoardParseError::Character {
                        character,
                        index: cells.len(),
                    });
                }
            };
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(BoardParseError::Length { found: cells.len() });
        }

        let mut board = Board::new();
        for (action, cell) in Action::all().zip(cells) {
            board = board.with(action, cell);
        }
        Ok(board)
    }
}
