//! Move-selection engine for two classic grid games
//!
//! Given a board encoded as a flat byte buffer, the engine searches the game
//! tree and returns the best move for the machine side:
//! - 3x3 grid (tic-tac-toe): exhaustive minimax, reply is a cell index
//! - 7x6 drop board (connect four): depth-bounded alpha-beta with a static
//!   evaluator, reply is a column index
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representations and the cell encoding
//! - [`rules`]: Line catalogs and terminal classification
//! - [`eval`]: Static evaluation for the drop game
//! - [`search`]: Negamax with alpha-beta pruning over the [`search::Game`] trait
//! - [`engine`]: Buffer-facing facade integrating all components
//!
//! # Quick Start
//!
//! ```
//! use gridline::Engine;
//!
//! let engine = Engine::new();
//!
//! // The machine opens the grid game in the center.
//! let reply = engine.tic_tac_toe(&[0u8; 9]).unwrap();
//! assert_eq!(reply, 4);
//!
//! // On the drop board it opens in the center column.
//! let reply = engine.connect_four(&[0u8; 42], None).unwrap();
//! assert_eq!(reply, 3);
//! ```
//!
//! # Determinism
//!
//! Replies are a pure function of the board (and, for the drop game, the
//! depth): equally scored moves are broken by immediate wins first, then by
//! how many winning lines the filled cell sits on, then by lowest index.
//! A board that is already won or drawn gets the [`NO_MOVE`] sentinel
//! instead of a move.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Cell, DropBoard, GridBoard, DROP_CELLS, GRID_CELLS};
pub use engine::{Engine, EngineError, DEFAULT_MAX_DEPTH, NO_MOVE};
pub use rules::Outcome;
pub use search::{SearchResult, Searcher};
