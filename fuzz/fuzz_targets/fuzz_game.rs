#![no_main]

//! Whole-game fuzzer.
//!
//! Plays an arbitrary move script against a seeded game and checks the
//! aggregate invariants: score accounting, tile count accounting, and
//! termination consistency.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slide48::game::{Direction, Game};

/// Structured input for whole-game fuzzing.
#[derive(Arbitrary, Debug)]
struct GameInput {
    /// Spawn RNG seed.
    seed: u64,
    /// Direction selectors, one per attempted move.
    script: Vec<u8>,
}

fuzz_target!(|input: GameInput| {
    // Cap script length to bound runtime
    let script = input.script.iter().take(500);

    let mut game = Game::new(input.seed);
    assert_eq!(game.board().count_tiles(), 2);

    let mut score = 0u64;
    let mut moves = 0u32;

    for &selector in script {
        if game.is_over() {
            break;
        }
        let direction = Direction::ALL[usize::from(selector) % 4];

        let before = game.board().count_tiles();
        let outcome = game.shift(direction);

        if outcome.moved {
            moves += 1;
            score += outcome.score;
            // Merges remove tiles, the post-move spawn adds one back
            assert_eq!(
                game.board().count_tiles(),
                before - outcome.merges as usize + 1
            );
        } else {
            assert_eq!(outcome.merges, 0);
            assert_eq!(outcome.score, 0);
            assert_eq!(game.board().count_tiles(), before);
        }

        assert_eq!(game.score(), score);
        assert_eq!(game.moves(), moves);
        assert!(game.board().count_tiles() <= 16);
    }

    // A finished game has a full board with no adjacent equal pair
    if game.is_over() {
        assert!(game.board().is_full());
        assert!(!game.board().has_moves());
    }
});
