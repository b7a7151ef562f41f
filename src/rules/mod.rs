//! Game rules: line catalogs and terminal classification

pub mod lines;
pub mod win;

use serde::{Deserialize, Serialize};

use crate::board::Cell;

// Re-exports
pub use lines::{DROP_COVERAGE, DROP_LINES, GRID_COVERAGE, GRID_LINES};
pub use win::classify;

/// Terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The game continues; at least one legal move exists.
    Ongoing,
    /// A side completed a line.
    Win(Cell),
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`, false for `Ongoing`.
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}
