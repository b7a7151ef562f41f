//! Winning-line catalogs
//!
//! A line catalog enumerates every group of cell indices that ends the game
//! when uniformly occupied by one side. Both catalogs are process-wide,
//! read-only tables: the 3×3 catalog is small enough to write out as a
//! constant, the 7×6 catalog is enumerated once at startup. The per-cell
//! coverage tables (how many catalog lines pass through each cell) drive the
//! deterministic tie-breaking in the search.

use once_cell::sync::Lazy;

use crate::board::{DROP_CELLS, DROP_HEIGHT, DROP_WIDTH, GRID_CELLS};

/// The 8 winning lines of the 3×3 grid: 3 rows, 3 columns, 2 diagonals.
pub const GRID_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Every run of 4 consecutive cells on the 7×6 board.
///
/// 24 horizontal, 21 vertical and 12 + 12 diagonal runs, 69 in total.
pub static DROP_LINES: Lazy<Vec<[usize; 4]>> = Lazy::new(|| {
    let mut lines = Vec::with_capacity(69);

    for row in 0..DROP_HEIGHT {
        for col in 0..DROP_WIDTH {
            let cell = row * DROP_WIDTH + col;

            // Rightwards
            if col + 3 < DROP_WIDTH {
                lines.push([cell, cell + 1, cell + 2, cell + 3]);
            }

            // Downwards
            if row + 3 < DROP_HEIGHT {
                let step = DROP_WIDTH;
                lines.push([cell, cell + step, cell + 2 * step, cell + 3 * step]);
            }

            // Down-right
            if col + 3 < DROP_WIDTH && row + 3 < DROP_HEIGHT {
                let step = DROP_WIDTH + 1;
                lines.push([cell, cell + step, cell + 2 * step, cell + 3 * step]);
            }

            // Down-left
            if col >= 3 && row + 3 < DROP_HEIGHT {
                let step = DROP_WIDTH - 1;
                lines.push([cell, cell + step, cell + 2 * step, cell + 3 * step]);
            }
        }
    }

    lines
});

/// Number of grid lines passing through each 3×3 cell. Highest for the
/// center, which is why the empty-board search resolves to cell 4.
pub static GRID_COVERAGE: Lazy<[u32; GRID_CELLS]> = Lazy::new(|| coverage(&GRID_LINES));

/// Number of drop-game lines passing through each 7×6 cell.
pub static DROP_COVERAGE: Lazy<[u32; DROP_CELLS]> = Lazy::new(|| coverage(&DROP_LINES));

fn coverage<const N: usize, const L: usize>(lines: &[[usize; L]]) -> [u32; N] {
    let mut counts = [0u32; N];
    for line in lines {
        for &cell in line {
            counts[cell] += 1;
        }
    }
    counts
}
