//! Engine facade: decode a buffer, search, return a move index

use thiserror::Error;
use tracing::debug;

use crate::board::{Cell, DropBoard, GridBoard, DROP_CELLS, GRID_CELLS};
use crate::search::Searcher;

/// Sentinel returned for boards that are already won or drawn.
pub const NO_MOVE: i64 = -1;

/// Look-ahead used for the drop game when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: u8 = 6;

/// Errors raised while decoding a board buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The buffer length does not match the board.
    #[error("expected a {expected}-cell board, got {actual} bytes")]
    BadLength { expected: usize, actual: usize },
    /// A byte is outside the cell encoding.
    #[error("cell {index} holds {value}; cells only accept 0, 1, or 2")]
    BadCell { index: usize, value: u8 },
}

/// Decode a raw buffer into a fixed-size cell array.
fn decode<const N: usize>(buffer: &[u8]) -> Result<[Cell; N], EngineError> {
    if buffer.len() != N {
        return Err(EngineError::BadLength {
            expected: N,
            actual: buffer.len(),
        });
    }

    let mut cells = [Cell::Empty; N];
    for (index, &value) in buffer.iter().enumerate() {
        cells[index] =
            Cell::try_from(value).map_err(|_| EngineError::BadCell { index, value })?;
    }
    Ok(cells)
}

/// Move-selection engine for both games.
///
/// The engine always recommends a move for [`Cell::Two`], the machine side.
/// Boards arrive as flat row-major byte buffers; the reply is the chosen
/// cell index for the grid game, the chosen column index for the drop game,
/// or [`NO_MOVE`] when the position is already terminal.
///
/// An engine is cheap to construct and holds no mutable state, so separate
/// requests may each use their own.
#[derive(Debug, Clone)]
pub struct Engine {
    max_depth: u8,
}

impl Engine {
    /// Engine with the default drop-game look-ahead.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Engine with a custom drop-game look-ahead, clamped to at least one
    /// ply.
    #[must_use]
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Pick a cell for the machine on a 3x3 board.
    ///
    /// The search runs to the end of the game, so the reply is exact
    /// minimax. Returns [`NO_MOVE`] for a board that is already won or
    /// drawn.
    pub fn tic_tac_toe(&self, buffer: &[u8]) -> Result<i64, EngineError> {
        let cells = decode::<GRID_CELLS>(buffer)?;
        let mut board = GridBoard::from_cells(cells);

        if board.outcome().is_terminal() {
            debug!(outcome = ?board.outcome(), "grid board is terminal");
            return Ok(NO_MOVE);
        }

        let depth = board.empty_count() as u8;
        let result = Searcher::new().search(&mut board, Cell::Two, depth);
        debug!(
            best = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            depth,
            "grid search complete"
        );

        Ok(result.best_move.map_or(NO_MOVE, |mv| mv as i64))
    }

    /// Pick a column for the machine on a 7x6 board.
    ///
    /// `max_depth` overrides the engine's configured look-ahead for this
    /// call. The effective depth never exceeds the number of empty cells.
    /// Returns [`NO_MOVE`] for a board that is already won or drawn.
    pub fn connect_four(
        &self,
        buffer: &[u8],
        max_depth: Option<u8>,
    ) -> Result<i64, EngineError> {
        let cells = decode::<DROP_CELLS>(buffer)?;
        let mut board = DropBoard::from_cells(cells);

        if board.outcome().is_terminal() {
            debug!(outcome = ?board.outcome(), "drop board is terminal");
            return Ok(NO_MOVE);
        }

        let empty = board.empty_count() as u8;
        let depth = max_depth.unwrap_or(self.max_depth).min(empty).max(1);
        let result = Searcher::new().search(&mut board, Cell::Two, depth);
        debug!(
            best = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            depth,
            "drop search complete"
        );

        Ok(result.best_move.map_or(NO_MOVE, |mv| mv as i64))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
