use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::First.opponent(), Stone::Second);
    assert_eq!(Stone::Second.opponent(), Stone::First);
}

#[test]
fn test_point_ordering() {
    let a = Point::new(-1, 5);
    let b = Point::new(0, -3);
    let c = Point::new(0, 0);

    assert!(a < b);
    assert!(b < c);
    assert_eq!(Point::ORIGIN, Point::new(0, 0));
    assert_eq!(Point::new(3, -2).offset(-3, 2), Point::ORIGIN);
}

#[test]
fn test_apply_succeeds_then_repeat_fails() {
    let mut board = Board::new();
    assert!(board.apply(7, -3, Stone::First));
    assert!(!board.apply(7, -3, Stone::First));
    assert!(!board.apply(7, -3, Stone::Second));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_rejected_apply_changes_nothing() {
    let mut board = Board::new();
    assert!(board.apply(0, 0, Stone::First));
    let before = board.snapshot();

    assert!(!board.apply(0, 0, Stone::Second));
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_turn_alternates_per_placement() {
    let mut board = Board::new();
    assert_eq!(board.turn(), Stone::First);

    assert!(board.apply(0, 0, Stone::First));
    assert_eq!(board.turn(), Stone::Second);

    assert!(board.apply(1, 0, Stone::Second));
    assert_eq!(board.turn(), Stone::First);
}

#[test]
fn test_apply_fails_after_win() {
    let mut board = Board::new();
    for x in 0..5 {
        assert!(board.apply(x, 0, Stone::First));
    }
    assert_eq!(board.status(), GameStatus::Won(Stone::First));
    assert!(!board.apply(100, 100, Stone::Second));
}

#[test]
fn test_undo_on_empty_board_fails() {
    let mut board = Board::new();
    assert!(!board.undo());
}

#[test]
fn test_apply_undo_round_trip() {
    let mut board = Board::new();
    assert!(board.apply(0, 0, Stone::First));
    assert!(board.apply(5, 5, Stone::Second));

    let before = board.clone();
    assert!(board.apply(-3, 2, Stone::First));
    assert!(board.undo());

    assert_eq!(board, before);
    assert_eq!(board.snapshot(), before.snapshot());
}

#[test]
fn test_undo_gives_turn_back_to_undone_player() {
    let mut board = Board::new();
    assert!(board.apply(0, 0, Stone::First));
    assert!(board.apply(1, 0, Stone::Second));
    assert_eq!(board.turn(), Stone::First);

    assert!(board.undo());
    // Second's move was taken back, so Second moves again
    assert_eq!(board.turn(), Stone::Second);
}

#[test]
fn test_undo_clears_win() {
    let mut board = Board::new();
    for x in 0..5 {
        assert!(board.apply(x, 0, Stone::First));
    }
    assert_eq!(board.status(), GameStatus::Won(Stone::First));

    assert!(board.undo());
    assert_eq!(board.status(), GameStatus::InProgress);
    assert!(board.is_empty(Point::new(4, 0)));
    assert_eq!(board.turn(), Stone::First);
}

#[test]
fn test_spec_vertical_five_scenario() {
    // First builds a vertical line at x=0 while Second answers at x=1;
    // First's fifth stone at (0, 4) wins, and one undo takes it back.
    let mut board = Board::new();
    for y in 0..4 {
        assert!(board.apply(0, y, Stone::First));
        assert!(board.apply(1, y, Stone::Second));
    }
    assert_eq!(board.status(), GameStatus::InProgress);

    assert!(board.apply(0, 4, Stone::First));
    assert_eq!(board.status(), GameStatus::Won(Stone::First));

    assert!(board.undo());
    assert_eq!(board.status(), GameStatus::InProgress);
    assert!(board.is_empty(Point::new(0, 4)));
    assert_eq!(board.turn(), Stone::First);
}

#[test]
fn test_bounds_empty_board() {
    let board = Board::new();
    assert_eq!(board.bounds(), BoundingBox::EMPTY);
}

#[test]
fn test_bounds_expand_on_apply() {
    let mut board = Board::new();
    assert!(board.apply(3, -7, Stone::First));
    assert!(board.apply(-2, 10, Stone::Second));

    let b = board.bounds();
    assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (-2, 3, -7, 10));
}

#[test]
fn test_first_stone_anchors_bounds_at_its_cell() {
    // A first stone away from the origin must not drag (0, 0) into the
    // box: the box is the true min/max of occupied cells, nothing more.
    let mut board = Board::new();
    assert!(board.apply(5, 5, Stone::First));
    assert_eq!(board.bounds(), BoundingBox::at(Point::new(5, 5)));

    // Back to empty and into the opposite quadrant: same rule applies
    assert!(board.undo());
    assert_eq!(board.bounds(), BoundingBox::EMPTY);
    assert!(board.apply(-4, -9, Stone::Second));
    assert_eq!(board.bounds(), BoundingBox::at(Point::new(-4, -9)));
}

#[test]
fn test_bounds_recomputed_after_undo() {
    let mut board = Board::new();
    assert!(board.apply(0, 0, Stone::First));
    assert!(board.apply(10, 10, Stone::Second));
    assert!(board.apply(-5, 3, Stone::First));

    // (-5, 3) defined min_x; undoing it must restore the previous extremes
    assert!(board.undo());
    let b = board.bounds();
    assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (0, 10, 0, 10));

    assert!(board.undo());
    let b = board.bounds();
    assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (0, 0, 0, 0));
}

#[test]
fn test_bounds_match_true_extremes_after_mixed_sequence() {
    let mut board = Board::new();
    let moves = [(4, -1), (-3, 8), (7, 7), (0, -9), (2, 2)];
    for (i, &(x, y)) in moves.iter().enumerate() {
        let stone = if i % 2 == 0 { Stone::First } else { Stone::Second };
        assert!(board.apply(x, y, stone));
    }
    assert!(board.undo());
    assert!(board.undo());
    assert!(board.apply(-20, 1, Stone::First));

    let cells = board.snapshot().cells;
    let expected = BoundingBox::recompute(cells.iter().map(|(p, _)| p));
    assert_eq!(board.bounds(), expected);
}

/// Tile stone colors so no axis ever carries more than two alike in a row:
/// color by (x + 2y) mod 4. Lets a full 15x15 region fill without a win.
fn drawn_pattern_stone(x: i64, y: i64) -> Stone {
    if (x + 2 * y).rem_euclid(4) < 2 {
        Stone::First
    } else {
        Stone::Second
    }
}

#[test]
fn test_draw_exactly_at_ceiling() {
    let mut board = Board::new();
    let mut placed = 0;
    for y in 0..15 {
        for x in 0..15 {
            assert_eq!(board.status(), GameStatus::InProgress);
            assert!(board.apply(x, y, drawn_pattern_stone(x, y)));
            placed += 1;
        }
    }
    assert_eq!(placed, DRAW_CEILING);
    assert_eq!(board.status(), GameStatus::Draw);
    assert!(!board.apply(100, 100, Stone::First));
}

#[test]
fn test_undo_clears_draw() {
    let mut board = Board::new();
    for y in 0..15 {
        for x in 0..15 {
            assert!(board.apply(x, y, drawn_pattern_stone(x, y)));
        }
    }
    assert_eq!(board.status(), GameStatus::Draw);

    assert!(board.undo());
    assert_eq!(board.status(), GameStatus::InProgress);
    assert_eq!(board.stone_count(), DRAW_CEILING - 1);
}

#[test]
fn test_win_on_ceiling_placement_beats_draw() {
    // The 225th stone both fills the ceiling and completes a five:
    // the win must be reported, not the draw.
    let mut board = Board::new();
    for y in 0..15 {
        for x in 0..15 {
            if (x, y) == (14, 14) {
                continue;
            }
            // Keep the drawn tiling except the top of the last column:
            // First claims (14, 10..=13) and Second blocks at (14, 9), so
            // only the final cell can complete a five.
            let stone = match (x, y) {
                (14, 9) => Stone::Second,
                (14, 10..=13) => Stone::First,
                _ => drawn_pattern_stone(x, y),
            };
            assert!(board.apply(x, y, stone));
            assert_eq!(board.status(), GameStatus::InProgress);
        }
    }
    assert_eq!(board.stone_count(), DRAW_CEILING - 1);

    assert!(board.apply(14, 14, Stone::First));
    assert_eq!(board.status(), GameStatus::Won(Stone::First));
}

#[test]
fn test_snapshot_contents() {
    let mut board = Board::new();
    assert!(board.apply(2, 2, Stone::First));
    assert!(board.apply(-1, 0, Stone::Second));

    let snap = board.snapshot();
    assert_eq!(
        snap.cells,
        vec![
            (Point::new(-1, 0), Stone::Second),
            (Point::new(2, 2), Stone::First),
        ]
    );
    assert_eq!(snap.turn, Stone::First);
    assert_eq!(snap.status, GameStatus::InProgress);
    assert_eq!(snap.bounds, board.bounds());
}

#[test]
fn test_snapshot_serializes() {
    let mut board = Board::new();
    assert!(board.apply(0, 0, Stone::First));
    assert!(board.apply(3, -4, Stone::Second));

    let json = serde_json::to_string(&board.snapshot()).expect("snapshot should serialize");
    let back: Snapshot = serde_json::from_str(&json).expect("snapshot should deserialize");
    assert_eq!(back, board.snapshot());
}
