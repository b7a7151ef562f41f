//! 7x6 drop board where pieces fall to the lowest open cell of a column

use crate::eval;
use crate::rules::{classify, Outcome, DROP_COVERAGE, DROP_LINES};
use crate::search::Game;

use super::Cell;

/// Number of columns.
pub const DROP_WIDTH: usize = 7;

/// Number of rows.
pub const DROP_HEIGHT: usize = 6;

/// Total cell count, row-major with row 0 at the top.
pub const DROP_CELLS: usize = DROP_WIDTH * DROP_HEIGHT;

/// The 7x6 board.
///
/// A move names a column; the piece lands on the lowest empty cell of that
/// column. `remaining` caches the empty-cell count per column so the landing
/// index is a single multiply away: a column with `r` empties left lands its
/// next piece at row `r - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropBoard {
    cells: [Cell; DROP_CELLS],
    remaining: [u8; DROP_WIDTH],
}

impl DropBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; DROP_CELLS],
            remaining: [DROP_HEIGHT as u8; DROP_WIDTH],
        }
    }

    /// Build a board from decoded cells, counting each column's empties.
    #[must_use]
    pub fn from_cells(cells: [Cell; DROP_CELLS]) -> Self {
        let mut remaining = [0u8; DROP_WIDTH];
        for (index, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                remaining[index % DROP_WIDTH] += 1;
            }
        }
        Self { cells, remaining }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// True when `column` still has room for a piece.
    #[inline]
    #[must_use]
    pub fn column_open(&self, column: usize) -> bool {
        self.remaining[column] > 0
    }

    /// Cell the next piece dropped into `column` would fill.
    ///
    /// The column must be open.
    #[inline]
    #[must_use]
    pub fn landing_index(&self, column: usize) -> usize {
        debug_assert!(self.column_open(column), "column {column} is full");
        (self.remaining[column] as usize - 1) * DROP_WIDTH + column
    }

    /// Number of empty cells across all columns.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.remaining.iter().map(|count| *count as usize).sum()
    }

    /// Terminal classification against the 69 drop lines.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        classify(&self.cells, &DROP_LINES)
    }

    /// Count `side` and opponent pieces on the line starting at `start`.
    pub(crate) fn line_tally(&self, line: &[usize; 4], side: Cell) -> (u32, u32) {
        let mut mine = 0;
        let mut theirs = 0;
        for &index in line {
            let cell = self.cells[index];
            if cell == side {
                mine += 1;
            } else if !cell.is_empty() {
                theirs += 1;
            }
        }
        (mine, theirs)
    }

    fn drop_piece(&mut self, column: usize, side: Cell) {
        let index = self.landing_index(column);
        self.cells[index] = side;
        self.remaining[column] -= 1;
    }

    fn lift_piece(&mut self, column: usize) {
        self.remaining[column] += 1;
        let index = self.landing_index(column);
        debug_assert!(!self.cells[index].is_empty(), "column {column} is empty");
        self.cells[index] = Cell::Empty;
    }
}

impl Default for DropBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for DropBoard {
    type Move = usize;

    fn outcome(&self) -> Outcome {
        DropBoard::outcome(self)
    }

    fn legal_moves(&self, moves: &mut Vec<usize>) {
        moves.extend((0..DROP_WIDTH).filter(|column| self.column_open(*column)));
    }

    fn play(&mut self, mv: usize, side: Cell) {
        self.drop_piece(mv, side);
    }

    fn take_back(&mut self, mv: usize) {
        self.lift_piece(mv);
    }

    fn horizon_score(&self, side: Cell) -> i32 {
        eval::evaluate(self, side)
    }

    fn line_coverage(&self, mv: usize) -> u32 {
        DROP_COVERAGE[self.landing_index(mv)]
    }
}
