//! Terminal classification
//!
//! The one rule shared by both games: the first line uniformly occupied by a
//! side ends the game. Multiple simultaneous lines are not distinguished,
//! the first catalog match wins. A full board with no line is a draw.
//!
//! This runs at every search node of the drop game, so it works directly on
//! the precomputed catalog with no allocation.

use crate::board::Cell;
use crate::rules::Outcome;

/// Classify a board against a line catalog.
///
/// Returns `Win` for the side holding a complete line, `Draw` if no line is
/// complete and no cell is empty, `Ongoing` otherwise.
#[must_use]
pub fn classify<const L: usize>(cells: &[Cell], lines: &[[usize; L]]) -> Outcome {
    for line in lines {
        let first = cells[line[0]];
        if first == Cell::Empty {
            continue;
        }

        if line[1..].iter().all(|&cell| cells[cell] == first) {
            return Outcome::Win(first);
        }
    }

    if cells.iter().any(|cell| cell.is_empty()) {
        Outcome::Ongoing
    } else {
        Outcome::Draw
    }
}
