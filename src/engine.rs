//! Computer opponent configuration
//!
//! Wraps the searcher with the two pieces of configuration a game session
//! chooses up front: which stone the computer plays and how deep it looks.
//! Neither is hardcoded; the classic setup gives the computer
//! [`Stone::Second`] so the human opens, but nothing here assumes that.
//!
//! # Example
//!
//! ```
//! use caro::{Board, Difficulty, Engine, Stone};
//!
//! let mut engine = Engine::new(Stone::Second, Difficulty::Medium);
//! let mut board = Board::new();
//! board.apply(0, 0, Stone::First);
//!
//! let reply = engine.recommend_move(&mut board);
//! assert!(board.apply(reply.x, reply.y, Stone::Second));
//! ```

use tracing::debug;

use crate::board::{Board, Point, Stone};
use crate::search::{generate_moves, Searcher};

/// Difficulty levels, each mapping to a fixed search depth.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies for this level.
    #[inline]
    #[must_use]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Parse a difficulty label, case-insensitively.
    ///
    /// Unrecognized labels fall back to [`Difficulty::Easy`] (depth 2)
    /// rather than failing; a session layer passing through user input
    /// always gets a playable opponent.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

/// The search-based opponent.
///
/// Owns no board data; it borrows the single game board for the duration
/// of each [`recommend_move`](Engine::recommend_move) call and returns it
/// untouched.
#[derive(Debug)]
pub struct Engine {
    stone: Stone,
    difficulty: Difficulty,
    searcher: Searcher,
}

impl Engine {
    /// Create an opponent playing `stone` at the given difficulty.
    #[must_use]
    pub fn new(stone: Stone, difficulty: Difficulty) -> Self {
        Self {
            stone,
            difficulty,
            searcher: Searcher::new(),
        }
    }

    /// Recommend a move for the engine's stone.
    ///
    /// Never fails outright: when the search produces nothing (every
    /// candidate probe was rejected, which only happens in terminal
    /// positions), it degrades to the first generated candidate, and to
    /// the origin on an empty board.
    pub fn recommend_move(&mut self, board: &mut Board) -> Point {
        let result = self
            .searcher
            .search(board, self.stone, self.difficulty.depth());

        if let Some(best) = result.best_move {
            debug!(
                stone = ?self.stone,
                difficulty = %self.difficulty,
                score = result.score,
                nodes = result.nodes,
                "recommending searched move"
            );
            return best;
        }

        let fallback = generate_moves(board)
            .first()
            .copied()
            .unwrap_or(Point::ORIGIN);
        debug!(stone = ?self.stone, fallback = ?fallback, "search found nothing, using fallback");
        fallback
    }

    /// Stone this engine plays.
    #[must_use]
    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Configured difficulty level.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
