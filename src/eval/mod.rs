//! Static position evaluation for the drop game

pub mod heuristic;
pub mod weights;

// Re-exports
pub use heuristic::evaluate;
pub use weights::LineScore;
