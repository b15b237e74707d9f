//! Error types for the game core.

use std::fmt;

/// Errors produced by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A tile spawn was requested but no empty cell exists.
    ///
    /// Spawning on a full board would otherwise loop forever in the
    /// rejection sampler, so the condition is surfaced explicitly.
    BoardFull,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BoardFull => write!(f, "no empty cell to spawn a tile"),
        }
    }
}

impl std::error::Error for GameError {}
