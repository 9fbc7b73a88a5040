//! Board state: occupied cells, move history, turn order and status

use std::collections::HashMap;

use crate::rules::win::creates_five;

use super::{BoundingBox, GameStatus, Point, Stone, DRAW_CEILING};

/// Game board over the unbounded grid.
///
/// Owns all game state: the sparse cell map, the LIFO move history, whose
/// turn it is, the terminal status and the bounding box of occupied cells.
/// The search engine borrows a board mutably during a search and drives it
/// through speculative [`apply`](Board::apply) / [`undo`](Board::undo)
/// cycles; the pair must leave the board exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupied cells. A key's presence means the cell holds that stone;
    /// keys are never overwritten.
    cells: HashMap<Point, Stone>,
    /// Move history for undo, strictly LIFO.
    history: Vec<(Point, Stone)>,
    /// Stone to move next.
    turn: Stone,
    /// Current game status.
    status: GameStatus,
    /// Bounding box over occupied cells.
    bounds: BoundingBox,
}

/// Read-only view of the board suitable for rendering or serialization.
///
/// Cells are sorted by coordinate so output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub cells: Vec<(Point, Stone)>,
    pub turn: Stone,
    pub status: GameStatus,
    pub bounds: BoundingBox,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            history: Vec::with_capacity(DRAW_CEILING),
            turn: Stone::First,
            status: GameStatus::InProgress,
            bounds: BoundingBox::EMPTY,
        }
    }

    /// Place a stone at (x, y).
    ///
    /// Returns `false` without any state change if the cell is occupied or
    /// the game has already ended. On success the move is recorded, the
    /// bounding box expanded, the win/draw checks run, and the turn
    /// advances to the opposing stone.
    pub fn apply(&mut self, x: i64, y: i64, stone: Stone) -> bool {
        let point = Point::new(x, y);
        if self.status.is_terminal() || self.cells.contains_key(&point) {
            return false;
        }

        let first_stone = self.cells.is_empty();
        self.cells.insert(point, stone);
        self.history.push((point, stone));
        if first_stone {
            // The all-zeros empty box is a sentinel, not a real extreme;
            // the first stone anchors the box at its own cell.
            self.bounds = BoundingBox::at(point);
        } else {
            self.bounds.expand(point);
        }

        if creates_five(self, point, stone) {
            self.status = GameStatus::Won(stone);
        } else if self.cells.len() >= DRAW_CEILING {
            self.status = GameStatus::Draw;
        }

        self.turn = stone.opponent();
        true
    }

    /// Revert the most recent move.
    ///
    /// Returns `false` if no moves have been made. On success the cell is
    /// emptied, the turn goes back to the stone that was undone, any
    /// terminal status is cleared, and the bounding box is recomputed from
    /// the remaining cells.
    pub fn undo(&mut self) -> bool {
        let Some((point, stone)) = self.history.pop() else {
            return false;
        };

        self.cells.remove(&point);
        self.turn = stone;
        self.status = GameStatus::InProgress;
        self.bounds = BoundingBox::recompute(self.cells.keys());
        true
    }

    /// Read-only view of cells, turn, status and bounding box.
    pub fn snapshot(&self) -> Snapshot {
        let mut cells: Vec<(Point, Stone)> =
            self.cells.iter().map(|(&p, &s)| (p, s)).collect();
        cells.sort_unstable_by_key(|&(p, _)| p);
        Snapshot {
            cells,
            turn: self.turn,
            status: self.status,
            bounds: self.bounds,
        }
    }

    /// Stone at a cell, or `None` when the cell is empty.
    #[inline]
    pub fn get(&self, point: Point) -> Option<Stone> {
        self.cells.get(&point).copied()
    }

    /// Check if a cell is unoccupied
    #[inline]
    pub fn is_empty(&self, point: Point) -> bool {
        !self.cells.contains_key(&point)
    }

    /// Occupied cell map, for candidate generation and evaluation.
    #[inline]
    pub fn cells(&self) -> &HashMap<Point, Stone> {
        &self.cells
    }

    /// Total stones on the board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if no stones have been placed
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stone to move next.
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Current game status.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Bounding box over occupied cells.
    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
