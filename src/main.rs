//! Slide48 CLI - Command-line interface for playing and simulating 2048.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Slide48 - A deterministic 2048 game engine
#[derive(Parser, Debug)]
#[command(name = "slide48")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive TUI game
    Play {
        /// Random seed (default: clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Animation frames per second (default: 60)
        #[arg(long, default_value = "60")]
        fps: u64,
    },

    /// Run a scripted game headless
    Run {
        /// Move script, one letter per move: U, D, L, R
        #[arg(required = true)]
        moves: String,

        /// Random seed (default: clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress move-by-move output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run mass parallel random-policy games and aggregate statistics
    Sim {
        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Maximum moves per game (default: 10000)
        #[arg(short, long, default_value = "10000")]
        max_moves: u32,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SimFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { seed, fps } => cli::play::execute(seed, fps),

        Commands::Run {
            moves,
            seed,
            format,
            quiet,
        } => cli::run::execute(&moves, seed, format, quiet),

        Commands::Sim {
            games,
            seed,
            threads,
            max_moves,
            format,
            progress,
        } => cli::sim::execute(games, seed, threads, max_moves, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
