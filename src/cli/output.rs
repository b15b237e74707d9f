//! Output formatting utilities for CLI.

use serde::Serialize;
use slide48::game::{COLS, ROWS};
use slide48::{Board, Coord, Game};
use std::collections::BTreeMap;

/// Board tile values as a row-major grid, 0 for empty cells.
pub(super) fn board_values(board: &Board) -> Vec<Vec<u32>> {
    (0..ROWS)
        .map(|row| {
            (0..COLS)
                .map(|col| board.get(Coord::new(row, col)).map_or(0, |t| t.value))
                .collect()
        })
        .collect()
}

/// Format a board as a human-readable text grid.
pub(super) fn format_board(board: &Board) -> String {
    let rule = "+------".repeat(usize::from(COLS)) + "+\n";
    let mut output = String::new();

    for row in 0..ROWS {
        output.push_str(&rule);
        for col in 0..COLS {
            match board.get(Coord::new(row, col)) {
                Some(tile) => output.push_str(&format!("|{:>5} ", tile.value)),
                None => output.push_str("|      "),
            }
        }
        output.push_str("|\n");
    }
    output.push_str(&rule);
    output
}

/// JSON-serializable result of a scripted game.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Final score.
    pub(super) score: u64,
    /// Moves that changed the board.
    pub(super) moves: u32,
    /// Largest tile reached.
    pub(super) highest_tile: u32,
    /// Whether a 2048 tile was reached.
    pub(super) won: bool,
    /// Whether no further move is possible.
    pub(super) over: bool,
    /// Final board, row-major, 0 for empty.
    pub(super) board: Vec<Vec<u32>>,
}

impl JsonRunResult {
    /// Capture the final state of a game.
    pub(super) fn from_game(game: &Game, seed: u64) -> Self {
        Self {
            seed,
            score: game.score(),
            moves: game.moves(),
            highest_tile: game.highest_tile(),
            won: game.is_won(),
            over: game.is_over(),
            board: board_values(game.board()),
        }
    }
}

/// Format a finished game as human-readable text.
pub(super) fn format_text(game: &Game, seed: u64) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {seed})\n"));
    output.push_str(&format!("  Score: {}\n", game.score()));
    output.push_str(&format!("  Moves: {}\n", game.moves()));
    output.push_str(&format!("  Highest tile: {}\n", game.highest_tile()));
    let status = if game.is_over() {
        "game over"
    } else if game.is_won() {
        "won, moves remain"
    } else {
        "in progress"
    };
    output.push_str(&format!("  Status: {status}\n\n"));
    output.push_str(&format_board(game.board()));

    output
}

/// Aggregated statistics over many simulated games.
#[derive(Debug, Default)]
pub(super) struct SimStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Games that reached a 2048 tile.
    pub(super) wins: u64,
    /// Total score across games.
    total_score: f64,
    /// Score sum of squares for std dev calculation.
    score_sq_sum: f64,
    /// Total moves across games.
    total_moves: u64,
    /// Count of games per highest tile reached.
    pub(super) highest_tiles: BTreeMap<u32, u64>,
}

impl SimStats {
    /// Add a finished game to the stats.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn add_game(&mut self, game: &Game) {
        self.games_played += 1;
        if game.is_won() {
            self.wins += 1;
        }
        let score = game.score() as f64;
        self.total_score += score;
        self.score_sq_sum += score * score;
        self.total_moves += u64::from(game.moves());
        *self.highest_tiles.entry(game.highest_tile()).or_insert(0) += 1;
    }

    /// Merge another accumulator into this one.
    pub(super) fn merge(&mut self, other: &SimStats) {
        self.games_played += other.games_played;
        self.wins += other.wins;
        self.total_score += other.total_score;
        self.score_sq_sum += other.score_sq_sum;
        self.total_moves += other.total_moves;
        for (&tile, &count) in &other.highest_tiles {
            *self.highest_tiles.entry(tile).or_insert(0) += count;
        }
    }

    /// Fraction of games that reached 2048.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games_played as f64
    }

    /// Mean final score.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn avg_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_score / self.games_played as f64
    }

    /// Standard deviation of final scores.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn score_std_dev(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let n = self.games_played as f64;
        let mean = self.avg_score();
        let variance = (self.score_sq_sum / n) - (mean * mean);
        if variance < 0.0 { 0.0 } else { variance.sqrt() }
    }

    /// Mean number of effective moves per game.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn avg_moves(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games_played as f64
    }
}

/// JSON-serializable simulation result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimResult {
    /// Total games played.
    games_played: u64,
    /// Games that reached 2048.
    wins: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
    /// Mean final score.
    avg_score: f64,
    /// Score standard deviation.
    score_std_dev: f64,
    /// Mean effective moves per game.
    avg_moves: f64,
    /// Games per highest tile reached.
    highest_tiles: BTreeMap<u32, u64>,
}

impl JsonSimResult {
    /// Create from accumulated stats.
    pub(super) fn from_stats(stats: &SimStats) -> Self {
        Self {
            games_played: stats.games_played,
            wins: stats.wins,
            win_rate: stats.win_rate(),
            avg_score: stats.avg_score(),
            score_std_dev: stats.score_std_dev(),
            avg_moves: stats.avg_moves(),
            highest_tiles: stats.highest_tiles.clone(),
        }
    }
}

/// Format simulation stats as human-readable text.
#[allow(clippy::cast_precision_loss)]
pub(super) fn format_sim_text(stats: &SimStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Simulation Results ({} games)\n", stats.games_played));
    output.push_str("========================================\n\n");

    output.push_str(&format!(
        "  2048 reached: {} ({:.1}%)\n",
        stats.wins,
        stats.win_rate() * 100.0
    ));
    output.push_str(&format!(
        "  Average score: {:.1} (+/- {:.1})\n",
        stats.avg_score(),
        stats.score_std_dev()
    ));
    output.push_str(&format!("  Average moves: {:.0}\n\n", stats.avg_moves()));

    output.push_str("Highest tile reached:\n");
    for (&tile, &count) in stats.highest_tiles.iter().rev() {
        let pct = if stats.games_played == 0 {
            0.0
        } else {
            count as f64 / stats.games_played as f64 * 100.0
        };
        output.push_str(&format!("  {tile:>6}: {count} games ({pct:.1}%)\n"));
    }

    output
}

/// Format simulation stats as CSV (one row per highest tile reached).
#[allow(clippy::cast_precision_loss)]
pub(super) fn format_sim_csv(stats: &SimStats) -> String {
    let mut output = String::new();

    output.push_str("highest_tile,games,fraction\n");
    for (&tile, &count) in stats.highest_tiles.iter().rev() {
        let fraction = if stats.games_played == 0 {
            0.0
        } else {
            count as f64 / stats.games_played as f64
        };
        output.push_str(&format!("{tile},{count},{fraction:.4}\n"));
    }

    output
}
