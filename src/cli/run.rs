//! Run command implementation - headless scripted game.

use super::output::{JsonRunResult, format_text};
use super::{CliError, OutputFormat, seed_or_clock};
use slide48::{Direction, Game};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the move script contains an unknown letter or the
/// output fails to serialize.
pub(crate) fn execute(
    moves: &str,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let script = parse_moves(moves)?;
    let seed = seed_or_clock(seed);

    if !quiet {
        println!("Running {} moves with seed {seed}...", script.len());
        println!();
    }

    let mut game = Game::new(seed);
    for direction in script {
        if game.is_over() {
            break;
        }
        let outcome = game.shift(direction);
        if !quiet {
            println!(
                "{} moved={} merges={} score=+{}",
                direction.letter(),
                outcome.moved,
                outcome.merges,
                outcome.score
            );
        }
    }
    if !quiet {
        println!();
    }

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&game, seed));
        }
        OutputFormat::Json => {
            let json_result = JsonRunResult::from_game(&game, seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Parse a move script such as `LLUR` into directions.
fn parse_moves(moves: &str) -> Result<Vec<Direction>, CliError> {
    moves
        .chars()
        .map(|c| {
            Direction::from_char(c)
                .ok_or_else(|| CliError::new(format!("Unknown move '{c}' (expected U, D, L or R)")))
        })
        .collect()
}
