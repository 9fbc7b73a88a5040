//! Sparse board representation for caro
//!
//! The grid has no fixed origin or size limit, so the board stores a map of
//! occupied cells rather than a dense array. Coordinates are signed 64-bit
//! integers in both directions.

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, Snapshot};

/// Maximum number of placed stones before the game is declared drawn.
///
/// Matches a classic 15x15 playing field even though the coordinate space
/// itself is unbounded.
pub const DRAW_CEILING: usize = 225;

/// Stone marks for the two players. A cell holds at most one stone;
/// absence from the cell map means the cell is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Stone {
    /// The starting player (X in the classic notation).
    First,
    /// The non-starting player (O in the classic notation).
    Second,
}

impl Stone {
    /// Get the opposing stone
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::First => Stone::Second,
            Stone::Second => Stone::First,
        }
    }
}

/// Overall state of a game. Transitions only on a successful placement;
/// undoing a terminal placement returns the status to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A cell coordinate on the unbounded grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Point shifted by (dx, dy).
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Smallest axis-aligned rectangle containing all occupied cells.
///
/// Degenerates to all zeros on an empty board. After an undo it is always
/// recomputed from the remaining cells; the removed cell may have been the
/// one defining an extreme, so incremental shrinking is not sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl BoundingBox {
    pub const EMPTY: BoundingBox = BoundingBox {
        min_x: 0,
        max_x: 0,
        min_y: 0,
        max_y: 0,
    };

    /// Degenerate box containing exactly one point.
    #[inline]
    pub const fn at(p: Point) -> Self {
        BoundingBox {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    /// Grow the box to include a point.
    #[inline]
    pub fn expand(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Recompute the box over a set of points from scratch.
    pub fn recompute<'a, I: IntoIterator<Item = &'a Point>>(points: I) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::EMPTY;
        };
        let mut bounds = BoundingBox::at(*first);
        for p in iter {
            bounds.expand(*p);
        }
        bounds
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}
