// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Slide48: an animated 2048 sliding-tile engine.
//!
//! This crate provides the complete game core plus a terminal front end:
//! - Deterministic, seedable gameplay (one xorshift64 generator per game)
//! - Pass-by-pass move animation, resolvable headlessly or paced by a UI
//! - Score, win, and game-over tracking
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI (play / run / sim)          │
//! ├─────────────────────────────────────┤
//! │     Game (score, spawn, endgame)    │
//! ├─────────────────────────────────────┤
//! │     Move Resolver (slide + merge)   │
//! ├─────────────────────────────────────┤
//! │     Board (4x4 grid of tiles)       │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;

pub use error::GameError;

// Re-export key game types at crate root for convenience
pub use game::{Board, Coord, Direction, Game, MoveOutcome, MoveSession, Rng, Tile};
