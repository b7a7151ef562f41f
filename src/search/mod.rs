//! Adversarial search

pub mod alphabeta;

use crate::board::Cell;
use crate::rules::Outcome;

// Re-exports
pub use alphabeta::{SearchResult, Searcher};

/// Score of a won game at the root. Terminal scores are biased by the ply at
/// which they occur (`WIN - ply`), so faster wins and slower losses rank
/// higher. Heuristic horizon scores must stay well inside `±(WIN - MAX_PLY)`.
pub const WIN: i32 = 1_000_000;

/// Deepest possible game: every cell of the larger board.
pub const MAX_PLY: i32 = 42;

/// A game the searcher can walk.
///
/// Both boards share one negamax tree-walk; this trait is the seam between
/// them. Implementations supply their own geometry: terminal classification
/// against their line catalog, legal move generation in ascending order,
/// reversible move application, and a horizon score for positions the search
/// cannot resolve. [`line_coverage`](Game::line_coverage) feeds the
/// deterministic tie-break: among equally scored moves the one whose filled
/// cell sits on the most winning lines is preferred.
pub trait Game {
    /// A legal move: a cell index for the grid game, a column index for the
    /// drop game.
    type Move: Copy + Eq + std::fmt::Debug;

    /// Terminal classification of the current position.
    fn outcome(&self) -> Outcome;

    /// Append every legal move in ascending index order.
    fn legal_moves(&self, moves: &mut Vec<Self::Move>);

    /// Apply `mv` for `side`. Must be reversible via
    /// [`take_back`](Game::take_back).
    fn play(&mut self, mv: Self::Move, side: Cell);

    /// Undo the most recent [`play`](Game::play) of `mv`.
    fn take_back(&mut self, mv: Self::Move);

    /// Score a non-terminal position at the search horizon, from `side`'s
    /// perspective. Must be zero-sum-consistent and bounded well below
    /// [`WIN`].
    fn horizon_score(&self, side: Cell) -> i32;

    /// Number of catalog lines through the cell `mv` would fill.
    fn line_coverage(&self, mv: Self::Move) -> u32;
}
