//! Heuristic evaluation for the minimax search
//!
//! Scores a position from the perspective of one side. Terminal positions
//! get a fixed win/loss/draw score; everything else is the signed sum of
//! open-run weights over both sides' stones.

use crate::board::{Board, GameStatus, Point, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::RunScore;

/// Evaluate the board from the perspective of `stone`.
///
/// Returns `RunScore::FIVE` for a win by `stone`, the negation for a win by
/// the opponent and 0 for a draw. Non-terminal positions score each side's
/// open runs with the [`RunScore`] weights, opponent runs counting
/// negatively.
#[must_use]
pub fn evaluate(board: &Board, stone: Stone) -> i32 {
    match board.status() {
        GameStatus::Won(winner) => {
            return if winner == stone {
                RunScore::FIVE
            } else {
                -RunScore::FIVE
            };
        }
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    score_runs(board, stone) - score_runs(board, stone.opponent())
}

/// Sum of run weights for one side.
///
/// Every occupied cell is visited once per axis, but a run only scores from
/// its starting cell (no same-stone cell behind it along the axis), so each
/// run is counted exactly once.
fn score_runs(board: &Board, stone: Stone) -> i32 {
    let mut score = 0;

    for (&point, &cell) in board.cells() {
        if cell != stone {
            continue;
        }
        for &(dx, dy) in &DIRECTIONS {
            score += score_run_from(board, point, dx, dy, stone);
        }
    }

    score
}

/// Weight of the run starting at `start` along (dx, dy), or 0 if `start`
/// is not the first cell of a run.
fn score_run_from(board: &Board, start: Point, dx: i64, dy: i64, stone: Stone) -> i32 {
    let behind = start.offset(-dx, -dy);
    if board.get(behind) == Some(stone) {
        return 0; // Not the start of this run
    }

    let mut len = 1;
    let mut cursor = start.offset(dx, dy);
    while board.get(cursor) == Some(stone) {
        len += 1;
        cursor = cursor.offset(dx, dy);
    }

    // The grid is unbounded, so an end is open exactly when the adjacent
    // cell is unoccupied.
    let mut open_ends = 0;
    if board.is_empty(behind) {
        open_ends += 1;
    }
    if board.is_empty(cursor) {
        open_ends += 1;
    }

    RunScore::for_run(len, open_ends)
}
