//! Sim command implementation - mass random-policy games.

use super::output::{JsonSimResult, SimStats, format_sim_csv, format_sim_text};
use super::{CliError, SimFormat, seed_or_clock};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use slide48::{Direction, Game, Rng};
use std::time::Instant;

/// Policy RNG stream is decorrelated from the game's spawn stream.
const POLICY_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Execute the sim command.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub(crate) fn execute(
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    max_moves: u32,
    format: SimFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let base_seed = seed_or_clock(seed);

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    // Run games in parallel using lock-free fold/reduce: each thread
    // accumulates into its own SimStats, merged at the end.
    let stats = (0..games)
        .into_par_iter()
        .fold(SimStats::default, |mut local_stats, i| {
            let game_seed = base_seed.wrapping_add(i);
            let game = play_random_game(game_seed, max_moves);
            local_stats.add_game(&game);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            local_stats
        })
        .reduce(SimStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    #[allow(clippy::cast_precision_loss)]
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        SimFormat::Text => {
            println!();
            print!("{}", format_sim_text(&stats));
            println!();
            println!(
                "Duration: {:.2}s ({games_per_sec:.0} games/sec)",
                duration.as_secs_f64()
            );
        }
        SimFormat::Json => {
            let json_result = JsonSimResult::from_stats(&stats);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        SimFormat::Csv => {
            print!("{}", format_sim_csv(&stats));
        }
    }

    Ok(())
}

/// Play one full game choosing uniformly random directions.
///
/// `max_moves` bounds the number of direction attempts, so a game always
/// terminates even if the policy keeps picking no-op directions.
fn play_random_game(seed: u64, max_moves: u32) -> Game {
    let mut game = Game::new(seed);
    let mut policy = Rng::new(seed ^ POLICY_SALT);

    for _ in 0..max_moves {
        if game.is_over() {
            break;
        }
        let direction = Direction::ALL[policy.next_u32(4) as usize];
        game.shift(direction);
    }

    game
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_game_is_deterministic() {
        let g1 = play_random_game(42, 5000);
        let g2 = play_random_game(42, 5000);
        assert_eq!(g1.board(), g2.board());
        assert_eq!(g1.score(), g2.score());
    }

    #[test]
    fn test_random_game_makes_progress() {
        let game = play_random_game(7, 5000);
        assert!(game.moves() > 0);
        assert!(game.score() > 0);
    }
}
