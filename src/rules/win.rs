//! Win condition checking anchored at the last placement
//!
//! A placement can only complete a line that passes through the placed
//! cell, so the check never rescans the whole board: it walks outward from
//! the placed cell along each of the four axes, at most 4 steps per
//! direction. That keeps it O(1) in board size (at most 8 probes per axis)
//! and is why it runs once per placement.

use crate::board::{Board, Point, Stone};

/// Axis step vectors for line checking (4 axes, walked both ways)
pub const DIRECTIONS: [(i64, i64); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal /
    (1, -1), // Diagonal \
];

/// Check whether placing `stone` at `at` completed a line of five or more.
///
/// The placed cell itself counts, so the walk extends up to 4 steps in each
/// of the two opposite directions per axis and stops at the first empty or
/// opposing cell.
pub fn creates_five(board: &Board, at: Point, stone: Stone) -> bool {
    for &(dx, dy) in &DIRECTIONS {
        let run = 1 + run_length(board, at, dx, dy, stone) + run_length(board, at, -dx, -dy, stone);
        if run >= 5 {
            return true;
        }
    }
    false
}

/// Consecutive same-stone cells from `at` exclusive, walking (dx, dy),
/// capped at 4 steps.
fn run_length(board: &Board, at: Point, dx: i64, dy: i64, stone: Stone) -> i64 {
    let mut count = 0;
    let mut cursor = at;
    for _ in 0..4 {
        cursor = cursor.offset(dx, dy);
        if board.get(cursor) == Some(stone) {
            count += 1;
        } else {
            break;
        }
    }
    count
}
