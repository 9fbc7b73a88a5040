//! Caro (five-in-a-row) engine on an unbounded board
//!
//! A game-state engine and search-based computer opponent for caro, the
//! freestyle five-in-a-row family played on a grid with no fixed edges:
//! - Sparse board: only occupied cells are stored, coordinates are signed
//!   and unbounded in both directions
//! - LIFO move history with exact undo (cells, turn, status, bounds)
//! - Local win detection anchored at the last placement
//! - Depth-limited minimax opponent with alpha-beta pruning and an
//!   open-run heuristic evaluation
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Sparse board state, move history and terminal detection
//! - [`rules`]: Win condition checking
//! - [`eval`]: Position evaluation weights and heuristics
//! - [`search`]: Minimax search with alpha-beta pruning
//! - [`engine`]: Computer opponent configuration (stone + difficulty)
//!
//! # Quick Start
//!
//! ```
//! use caro::{Board, Difficulty, Engine, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::new(Stone::Second, Difficulty::Easy);
//!
//! // Human opens at the origin
//! assert!(board.apply(0, 0, Stone::First));
//!
//! // Computer responds
//! let reply = engine.recommend_move(&mut board);
//! assert!(board.apply(reply.x, reply.y, Stone::Second));
//! ```
//!
//! # Transport and presentation
//!
//! The crate deliberately exposes nothing beyond the four-call surface
//! (`apply`, `undo`, `snapshot`, `recommend_move`). Rendering, wire
//! encoding and session management belong to the caller; [`board::Snapshot`]
//! derives `serde::Serialize` so a presentation layer can encode it without
//! reaching into board internals.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoundingBox, GameStatus, Point, Snapshot, Stone};
pub use engine::{Difficulty, Engine};
pub use search::{SearchResult, Searcher};
