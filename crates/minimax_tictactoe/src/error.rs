//! Move validation errors.

use crate::types::{Action, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum InvalidMoveReason {
    /// A coordinate lies outside `0..3`.
    #[display("coordinates are off the board")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[display("cell is already occupied by {_0}")]
    Occupied(Mark),
}

/// The requested action is not in the board's legal-action set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid move {action}: {reason}")]
pub struct InvalidMove {
    /// The rejected action.
    pub action: Action,
    /// Why it was rejected.
    pub reason: InvalidMoveReason,
}

impl InvalidMove {
    /// Creates a new invalid-move error.
    pub fn new(action: Action, reason: InvalidMoveReason) -> Self {
        Self { action, reason }
    }
}
