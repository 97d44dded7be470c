//! Exhaustive minimax search.
//!
//! Every legal line of play is explored to the end of the game. X maximizes
//! and O minimizes [`utility`] at every ply. There is no pruning, caching or
//! depth limit: the full tree from the empty board has fewer than 550,000
//! nodes.

use crate::config::{SearchConfig, TieBreak};
use crate::error::InvalidMove;
use crate::rules::{current_player, is_terminal, utility};
use crate::transition::{apply_action, successors};
use crate::types::{Action, Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of searching a non-terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Evaluation {
    /// Chosen action.
    action: Action,
    /// Minimax value of the position after `action`, from X's perspective.
    value: i8,
    /// Nodes visited, including the root.
    nodes: u64,
}

/// Minimax searcher with a configurable tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher from a configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds an optimal action for the player to move.
    ///
    /// Returns `None` when the board is terminal.
    #[instrument(skip_all, fields(tie_break = %self.config.tie_break()))]
    pub fn evaluate(&self, board: &Board) -> Option<Evaluation> {
        if is_terminal(board) {
            debug!("Board is terminal, no move to search");
            return None;
        }

        let mover = current_player(board);
        let mut nodes = 1;
        let best = successors(board)
            .map(|(action, child)| {
                nodes += 1;
                let value = match mover {
                    Mark::X => min_node(&child, &mut nodes),
                    Mark::O => max_node(&child, &mut nodes),
                };
                (action, value)
            })
            .reduce(|incumbent, candidate| self.prefer(mover, incumbent, candidate))?;

        let (action, value) = best;
        debug!(%mover, %action, value, nodes, "Search complete");
        Some(Evaluation {
            action,
            value,
            nodes,
        })
    }

    /// Plays this searcher's choice for both sides until the game ends.
    ///
    /// Returns every board from `board` through the terminal board.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the search ever proposes an illegal action.
    #[instrument(skip_all)]
    pub fn play_out(&self, board: &Board) -> Result<Vec<Board>, InvalidMove> {
        let mut boards = vec![*board];
        let mut current = *board;
        while let Some(eval) = self.evaluate(&current) {
            current = apply_action(&current, eval.action)?;
            boards.push(current);
        }
        debug!(plies = boards.len() - 1, "Optimal play finished");
        Ok(boards)
    }

    /// Picks between two root candidates, `candidate` following `incumbent`
    /// in row-major order.
    fn prefer(&self, mover: Mark, incumbent: (Action, i8), candidate: (Action, i8)) -> (Action, i8) {
        let better = match mover {
            Mark::X => candidate.1 > incumbent.1,
            Mark::O => candidate.1 < incumbent.1,
        };
        let tied = candidate.1 == incumbent.1 && *self.config.tie_break() == TieBreak::Last;
        if better || tied { candidate } else { incumbent }
    }
}

/// Returns an optimal action for the player to move, or `None` on a
/// terminal board.
///
/// Ties between equally optimal actions go to the lowest row, then column.
pub fn best_move(board: &Board) -> Option<Action> {
    Searcher::default().evaluate(board).map(|eval| eval.action)
}

/// Value of a position where X is to move: its utility if terminal,
/// otherwise the best value X can force.
pub fn max_value(board: &Board) -> i8 {
    max_node(board, &mut 0)
}

/// Value of a position where O is to move: its utility if terminal,
/// otherwise the best value O can force.
pub fn min_value(board: &Board) -> i8 {
    min_node(board, &mut 0)
}

/// Value of a position under optimal play by both sides.
pub fn minimax_value(board: &Board) -> i8 {
    match current_player(board) {
        Mark::X => max_value(board),
        Mark::O => min_value(board),
    }
}

/// Plays optimal moves for both sides until the game ends.
///
/// Returns every board from `board` through the terminal board.
///
/// # Errors
///
/// Returns [`InvalidMove`] if the search ever proposes an illegal action.
pub fn play_optimal(board: &Board) -> Result<Vec<Board>, InvalidMove> {
    Searcher::default().play_out(board)
}

fn max_node(board: &Board, nodes: &mut u64) -> i8 {
    if is_terminal(board) {
        return utility(board);
    }
    let mut value = i8::MIN;
    for (_, child) in successors(board) {
        *nodes += 1;
        value = value.max(min_node(&child, nodes));
    }
    value
}

fn min_node(board: &Board, nodes: &mut u64) -> i8 {
    if is_terminal(board) {
        return utility(board);
    }
    let mut value = i8::MAX;
    for (_, child) in successors(board) {
        *nodes += 1;
        value = value.min(max_node(&child, nodes));
    }
    value
}
