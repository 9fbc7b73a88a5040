//! Evaluation module for caro positions
//!
//! Provides the leaf evaluation for the minimax search:
//! - Terminal positions score a fixed win/loss/draw value
//! - Non-terminal positions are scored by counting open runs of
//!   2/3/4/5 same-stone cells along the four axes

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::RunScore;
