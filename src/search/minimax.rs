//! Depth-limited minimax search with alpha-beta pruning
//!
//! The searcher never holds board data of its own. It borrows the one game
//! board and explores hypothetical futures by applying a candidate move,
//! recursing, and unconditionally undoing before the next candidate, so the
//! board comes back from every probe exactly as it went in.
//!
//! # Candidate generation
//!
//! The grid is unbounded, so the searcher only considers empty cells within
//! a Chebyshev distance of 2 from some placed stone. That locality window
//! is what keeps the branching factor finite; on an empty board the sole
//! candidate is the origin.
//!
//! # Example
//!
//! ```
//! use caro::board::{Board, Stone};
//! use caro::search::Searcher;
//!
//! let mut board = Board::new();
//! board.apply(0, 0, Stone::First);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, Stone::Second, 2);
//! assert!(result.best_move.is_some());
//! ```

use std::collections::BTreeSet;

use tracing::debug;

use crate::board::{Board, Point, Stone};
use crate::eval::evaluate;

/// Score bound for the alpha-beta window, above any reachable evaluation.
const INF: i32 = i32::MAX;

/// Chebyshev radius around placed stones inside which moves are generated.
const CANDIDATE_RADIUS: i64 = 2;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any candidate could be probed
    pub best_move: Option<Point>,
    /// Evaluation score of the best move
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher.
///
/// Maximizes for the stone it is asked to play and minimizes for the
/// opponent. Holds no position data between calls, only node statistics.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search for the best move for `stone` at the given depth.
    ///
    /// Every candidate is probed through the board's apply/undo pair; the
    /// board is guaranteed to be in its original state on return. A
    /// candidate that cannot be applied (the position is already terminal)
    /// is skipped, which is how `best_move` can come back `None`.
    #[must_use]
    pub fn search(&mut self, board: &mut Board, stone: Stone, depth: u8) -> SearchResult {
        self.nodes = 0;

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        let candidates = generate_moves(board);

        for candidate in &candidates {
            if !board.apply(candidate.x, candidate.y, stone) {
                continue;
            }
            let score = self.minimax(board, stone, depth.saturating_sub(1), false, alpha, beta);
            board.undo();

            if score > best_score {
                best_score = score;
                best_move = Some(*candidate);
            }
            alpha = alpha.max(score);
        }

        debug!(
            depth,
            nodes = self.nodes,
            candidates = candidates.len(),
            score = best_score,
            best_move = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax with alpha-beta cutoffs.
    ///
    /// `stone` is the side the searcher plays for throughout the whole
    /// tree; `maximizing` flips each ply and decides which side's stone is
    /// speculatively placed.
    fn minimax(
        &mut self,
        board: &mut Board,
        stone: Stone,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.status().is_terminal() {
            return evaluate(board, stone);
        }

        let to_play = if maximizing { stone } else { stone.opponent() };
        let mut best = if maximizing { -INF } else { INF };

        for candidate in generate_moves(board) {
            if !board.apply(candidate.x, candidate.y, to_play) {
                continue;
            }
            let score = self.minimax(board, stone, depth - 1, !maximizing, alpha, beta);
            board.undo();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break; // Remaining siblings cannot affect the result
            }
        }

        best
    }
}

/// Generate candidate moves near placed stones.
///
/// Returns every empty cell within [`CANDIDATE_RADIUS`] (Chebyshev) of an
/// occupied cell, sorted by coordinate so the search visits candidates in a
/// deterministic order. An empty board yields only the origin.
#[must_use]
pub fn generate_moves(board: &Board) -> Vec<Point> {
    if board.is_board_empty() {
        return vec![Point::ORIGIN];
    }

    let mut candidates = BTreeSet::new();

    for &point in board.cells().keys() {
        for dx in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dy in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let neighbor = point.offset(dx, dy);
                if board.is_empty(neighbor) {
                    candidates.insert(neighbor);
                }
            }
        }
    }

    candidates.into_iter().collect()
}
