//! Search module for the caro opponent
//!
//! Contains:
//! - Candidate generation restricted to the neighborhood of placed stones
//! - Depth-limited minimax with alpha-beta pruning

pub mod minimax;

pub use minimax::{generate_moves, SearchResult, Searcher};
