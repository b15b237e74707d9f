//! Property-based tests for move resolution.
//!
//! Run with: cargo test --release prop_resolve

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]

use proptest::prelude::*;

use slide48::game::{Board, CELLS, Coord, Direction, Game, Tile, resolve};

/// Strategy for an arbitrary board: each cell independently empty or holding
/// a small power-of-two tile.
fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::option::of(1u32..=11), CELLS).prop_map(|cells| {
        Board::from_tiles(cells.iter().enumerate().filter_map(|(i, exp)| {
            exp.map(|exp| {
                let row = (i / 4) as u8;
                let col = (i % 4) as u8;
                Tile::new(1 << exp, row, col)
            })
        }))
    })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// After a move every tile sits in bounds, at rest, and alone in its cell.
    #[test]
    fn prop_tiles_in_bounds_no_overlap(board in arb_board(), direction in arb_direction()) {
        let (after, _) = resolve(&board, direction);

        let mut seen = [false; CELLS];
        for (coord, tile) in after.iter() {
            prop_assert!(coord.in_bounds());
            prop_assert!(tile.at_rest());
            let index = usize::from(tile.row) * 4 + usize::from(tile.col);
            prop_assert!(!seen[index], "two tiles in one cell");
            seen[index] = true;
        }
    }

    /// Merging doubles in place: total value is conserved by a move.
    #[test]
    fn prop_value_conserved(board in arb_board(), direction in arb_direction()) {
        let (after, _) = resolve(&board, direction);
        prop_assert_eq!(after.total_value(), board.total_value());
    }

    /// Each merge removes exactly one tile.
    #[test]
    fn prop_tile_count_tracks_merges(board in arb_board(), direction in arb_direction()) {
        let (after, outcome) = resolve(&board, direction);
        let merged = usize::try_from(outcome.merges).unwrap();
        prop_assert_eq!(after.count_tiles(), board.count_tiles() - merged);
    }

    /// At most half the tiles can merge in one move.
    #[test]
    fn prop_merges_bounded(board in arb_board(), direction in arb_direction()) {
        let (_, outcome) = resolve(&board, direction);
        prop_assert!(usize::try_from(outcome.merges).unwrap() <= board.count_tiles() / 2);
    }

    /// A move that reports no change really changed nothing, and resolving
    /// a settled board again is a no-op.
    #[test]
    fn prop_noop_is_identity(board in arb_board(), direction in arb_direction()) {
        let (after, outcome) = resolve(&board, direction);
        if !outcome.moved {
            prop_assert_eq!(&after, &board);
        }

        let (again, second) = resolve(&after, direction);
        prop_assert!(!second.moved);
        prop_assert_eq!(again, after);
    }

    /// `has_moves` agrees with exhaustive resolution over all directions.
    #[test]
    fn prop_has_moves_matches_resolver(board in arb_board()) {
        let any_effective = Direction::ALL
            .into_iter()
            .any(|d| resolve(&board, d).1.moved);
        if board.count_tiles() > 0 {
            prop_assert_eq!(board.has_moves(), any_effective);
        }
    }

    /// Whole games replay identically from the same seed and move script.
    #[test]
    fn prop_game_deterministic(seed in any::<u64>(), script in prop::collection::vec(0usize..4, 1..60)) {
        let play = |seed: u64| {
            let mut game = Game::new(seed);
            for &i in &script {
                if game.is_over() {
                    break;
                }
                game.shift(Direction::ALL[i]);
            }
            game
        };

        let a = play(seed);
        let b = play(seed);
        prop_assert_eq!(a.board(), b.board());
        prop_assert_eq!(a.score(), b.score());
        prop_assert_eq!(a.moves(), b.moves());
    }

    /// Score only grows, and only when a move reports merges.
    #[test]
    fn prop_score_monotonic(seed in any::<u64>(), script in prop::collection::vec(0usize..4, 1..60)) {
        let mut game = Game::new(seed);
        let mut last_score = 0u64;
        for &i in &script {
            if game.is_over() {
                break;
            }
            let outcome = game.shift(Direction::ALL[i]);
            prop_assert!(game.score() >= last_score);
            prop_assert_eq!(game.score(), last_score + outcome.score);
            last_score = game.score();
        }
    }
}

/// Empty boards never move.
#[test]
fn empty_board_is_inert() {
    for direction in Direction::ALL {
        let (after, outcome) = resolve(&Board::EMPTY, direction);
        assert_eq!(after, Board::EMPTY);
        assert!(!outcome.moved);
    }
}

/// A single tile slides to the target edge in every direction.
#[test]
fn single_tile_reaches_edge() {
    let board = Board::from_tiles([Tile::new(8, 1, 2)]);

    let expect = [
        (Direction::Up, Coord::new(0, 2)),
        (Direction::Down, Coord::new(3, 2)),
        (Direction::Left, Coord::new(1, 0)),
        (Direction::Right, Coord::new(1, 3)),
    ];
    for (direction, coord) in expect {
        let (after, outcome) = resolve(&board, direction);
        assert_eq!(after.get(coord).map(|t| t.value), Some(8));
        assert_eq!(after.count_tiles(), 1);
        assert!(outcome.moved);
    }
}
