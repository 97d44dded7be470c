//! Search configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Rule for choosing among equally optimal actions.
///
/// Legal actions are visited in row-major order, so the rule reduces to
/// keeping the first or the last optimal action seen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TieBreak {
    /// Lowest row, then lowest column.
    #[default]
    First,
    /// Highest row, then highest column.
    Last,
}

/// Configuration for [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Tie-break among equally optimal actions.
    tie_break: TieBreak,
}

impl SearchConfig {
    /// Creates a configuration with the given tie-break rule.
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}
