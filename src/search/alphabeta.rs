//! Negamax search with alpha-beta pruning
//!
//! One tree-walk serves both games. The grid game is searched to the full
//! move count, so every leaf is terminal and the result is exact minimax.
//! The drop game stops at a caller-supplied depth and scores non-terminal
//! horizon nodes with the board's static evaluator.
//!
//! # Determinism
//!
//! Root moves are ranked before searching: immediate winning moves first,
//! then by line coverage of the filled cell, then lowest index (the stable
//! sort keeps the ascending generation order for full ties). A later move
//! replaces the incumbent only on a strictly greater score, and pruning can
//! only under-report the score of a later sibling, so the ranking order
//! decides every tie. The same board and depth always select the same move.
//!
//! # Example
//!
//! ```
//! use gridline::board::{Cell, GridBoard};
//! use gridline::search::Searcher;
//!
//! let mut board = GridBoard::new();
//! let mut searcher = Searcher::new();
//!
//! // Exhaustive search of the empty grid: every move draws, the
//! // tie-break picks the center.
//! let result = searcher.search(&mut board, Cell::Two, 9);
//! assert_eq!(result.best_move, Some(4));
//! ```

use crate::board::Cell;
use crate::rules::Outcome;

use super::{Game, WIN};

/// Infinity for the alpha-beta bounds, strictly above any reachable score.
const INF: i32 = WIN + 1;

/// Search result with the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// Best move found, `None` when the position has no legal moves.
    pub best_move: Option<M>,
    /// Score of the best move from the searched side's perspective.
    pub score: i32,
    /// Depth the search was run at.
    pub depth: u8,
    /// Total nodes visited.
    pub nodes: u64,
}

/// Negamax searcher.
///
/// Holds nothing but a node counter: every call owns its own recursion, so
/// independent searches may run concurrently on separate searchers.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search for the best move for `side`, looking `max_depth` plies ahead.
    ///
    /// The position must be non-terminal; callers classify first. A depth of
    /// at least the number of remaining moves makes the search exhaustive.
    #[must_use]
    pub fn search<G: Game>(&mut self, game: &mut G, side: Cell, max_depth: u8) -> SearchResult<G::Move> {
        self.nodes = 0;
        let depth = max_depth.max(1);

        let mut moves = Vec::new();
        game.legal_moves(&mut moves);

        // Rank for tie-breaking: immediate wins, then line coverage, then
        // the ascending generation order preserved by the stable sort.
        let mut ranked: Vec<(G::Move, bool, u32)> = moves
            .into_iter()
            .map(|mv| {
                let coverage = game.line_coverage(mv);
                game.play(mv, side);
                let wins = matches!(game.outcome(), Outcome::Win(winner) if winner == side);
                game.take_back(mv);
                (mv, wins, coverage)
            })
            .collect();
        ranked.sort_by(|a, b| (b.1, b.2).cmp(&(a.1, a.2)));

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for (mv, _, _) in ranked {
            game.play(mv, side);
            let score = -self.negamax(game, side.opponent(), depth - 1, 1, -beta, -alpha);
            game.take_back(mv);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }

            alpha = alpha.max(best_score);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive negamax with alpha-beta pruning.
    ///
    /// Terminal positions are classified before the depth check, so a win on
    /// the horizon is still scored as a win. `ply` biases terminal scores
    /// towards faster wins.
    fn negamax<G: Game>(
        &mut self,
        game: &mut G,
        side: Cell,
        depth: u8,
        ply: i32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;

        match game.outcome() {
            // The previous mover completed a line; `side` never wins here.
            Outcome::Win(winner) => {
                return if winner == side { WIN - ply } else { ply - WIN };
            }
            Outcome::Draw => return 0,
            Outcome::Ongoing => {}
        }

        if depth == 0 {
            return game.horizon_score(side);
        }

        let mut moves = Vec::new();
        game.legal_moves(&mut moves);

        // Center-first ordering tightens the bounds early. It cannot change
        // the selected root move, only how much gets pruned.
        moves.sort_by(|a, b| game.line_coverage(*b).cmp(&game.line_coverage(*a)));

        let mut best = -INF;

        for mv in moves {
            game.play(mv, side);
            let score = -self.negamax(game, side.opponent(), depth - 1, ply + 1, -beta, -alpha);
            game.take_back(mv);

            if score > best {
                best = score;
            }

            if best >= beta {
                break;
            }

            if best > alpha {
                alpha = best;
            }
        }

        best
    }
}
