//! 3x3 grid board played by placing on any empty cell

use crate::rules::{classify, Outcome, GRID_COVERAGE, GRID_LINES};
use crate::search::Game;

use super::Cell;

/// Side length of the grid.
pub const GRID_SIDE: usize = 3;

/// Total cell count, row-major.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// The 3x3 board.
///
/// Cells are indexed row-major, 0 at the top-left through 8 at the
/// bottom-right. A move fills any empty cell, so the cell index itself is
/// the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    cells: [Cell; GRID_CELLS],
}

impl GridBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_CELLS],
        }
    }

    /// Build a board from decoded cells.
    #[must_use]
    pub fn from_cells(cells: [Cell; GRID_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Number of empty cells, which bounds the remaining game length.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Terminal classification against the eight grid lines.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        classify(&self.cells, &GRID_LINES)
    }
}

impl Default for GridBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for GridBoard {
    type Move = usize;

    fn outcome(&self) -> Outcome {
        GridBoard::outcome(self)
    }

    fn legal_moves(&self, moves: &mut Vec<usize>) {
        moves.extend(
            self.cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_empty())
                .map(|(index, _)| index),
        );
    }

    fn play(&mut self, mv: usize, side: Cell) {
        debug_assert!(self.cells[mv].is_empty(), "cell {mv} is occupied");
        self.cells[mv] = side;
    }

    fn take_back(&mut self, mv: usize) {
        self.cells[mv] = Cell::Empty;
    }

    fn horizon_score(&self, _side: Cell) -> i32 {
        // Nine cells are always searched to the end; the horizon is never
        // reached on a non-terminal position.
        0
    }

    fn line_coverage(&self, mv: usize) -> u32 {
        GRID_COVERAGE[mv]
    }
}
