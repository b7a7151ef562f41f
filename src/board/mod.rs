//! Board representations for both supported games

pub mod drop;
pub mod grid;

use serde::{Deserialize, Serialize};

// Re-exports
pub use drop::{DropBoard, DROP_CELLS, DROP_HEIGHT, DROP_WIDTH};
pub use grid::{GridBoard, GRID_CELLS, GRID_SIDE};

/// Cell values
///
/// Boards arrive as flat buffers encoding `0 = Empty`, `1 = One`, `2 = Two`.
/// `One` is conventionally the human side and `Two` the machine side the
/// engine recommends moves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Get the opposing side
    #[inline]
    #[must_use]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::One => Cell::Two,
            Cell::Two => Cell::One,
            Cell::Empty => Cell::Empty,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl TryFrom<u8> for Cell {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::One),
            2 => Ok(Cell::Two),
            _ => Err("cells only accept 0, 1, or 2"),
        }
    }
}
