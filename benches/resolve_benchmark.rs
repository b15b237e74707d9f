//! Benchmarks for move resolution and whole games.
//!
//! Resolution is the hot path of mass simulation - one call per attempted
//! move, each running the pass loop to completion.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use slide48::game::{Board, Direction, Game, Tile, resolve};

/// A dense board that produces long slides and several merges per move.
#[allow(clippy::cast_possible_truncation)]
fn dense_board() -> Board {
    let values = [
        [2, 2, 4, 4],
        [0, 8, 8, 0],
        [2, 0, 2, 4],
        [16, 16, 0, 2],
    ];
    Board::from_tiles(values.iter().enumerate().flat_map(|(row, line)| {
        line.iter().enumerate().filter_map(move |(col, &value)| {
            if value == 0 {
                None
            } else {
                Some(Tile::new(value, row as u8, col as u8))
            }
        })
    }))
}

fn bench_resolve_per_direction(c: &mut Criterion) {
    let board = dense_board();

    for direction in Direction::ALL {
        let name = format!("resolve_{}", direction.letter());
        c.bench_function(&name, |b| {
            b.iter(|| {
                let result = resolve(black_box(&board), black_box(direction));
                black_box(result)
            });
        });
    }
}

fn bench_full_game(c: &mut Criterion) {
    // A whole random-policy game, the unit of work the simulator parallelizes.
    c.bench_function("full_random_game", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(42));
            let mut policy = slide48::Rng::new(black_box(7));
            let mut attempts = 0u32;
            while !game.is_over() && attempts < 10_000 {
                let direction = Direction::ALL[policy.next_u32(4) as usize];
                game.shift(direction);
                attempts += 1;
            }
            black_box(game.score())
        });
    });
}

fn bench_game_batch(c: &mut Criterion) {
    // Ten games sequentially, without parallel overhead.
    c.bench_function("10_games_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let mut game = Game::new(black_box(seed));
                let mut policy = slide48::Rng::new(seed ^ 0x9e37_79b9_7f4a_7c15);
                let mut attempts = 0u32;
                while !game.is_over() && attempts < 10_000 {
                    let direction = Direction::ALL[policy.next_u32(4) as usize];
                    game.shift(direction);
                    attempts += 1;
                }
                let _ = black_box(game.score());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_per_direction,
    bench_full_game,
    bench_game_batch
);
criterion_main!(benches);
