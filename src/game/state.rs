//! Game state: board, score, and endgame detection.

use crate::game::board::Board;
use crate::game::resolver::{Direction, MoveOutcome, MoveSession, resolve};
use crate::game::spawn::{Rng, seed_board, spawn};

/// The tile value that counts as winning.
pub const WIN_VALUE: u32 = 2048;

/// A complete game: board, score, and the deterministic RNG driving spawns.
#[derive(Debug, Clone, Copy)]
pub struct Game {
    board: Board,
    score: u64,
    moves: u32,
    rng: Rng,
    won: bool,
}

impl Game {
    /// Start a new game from a seed: two tiles of value 2 on distinct
    /// random cells.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let board = seed_board(&mut rng);
        Self {
            board,
            score: 0,
            moves: 0,
            rng,
            won: false,
        }
    }

    /// The current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Total score from merges.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the board.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Largest tile value reached.
    #[must_use]
    pub fn highest_tile(&self) -> u32 {
        self.board.max_value()
    }

    /// True once a tile of [`WIN_VALUE`] has appeared. Play continues
    /// after winning until no move is possible.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// True when no direction would change the board.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.board.has_moves()
    }

    /// Apply one directional move, running its animation to completion.
    ///
    /// If the move changed the board, a new tile is spawned and the score
    /// updated. A no-op move spawns nothing.
    pub fn shift(&mut self, direction: Direction) -> MoveOutcome {
        let session = MoveSession::new(&self.board, direction);
        self.commit(session)
    }

    /// Begin an animated move from the current board.
    ///
    /// The caller steps the session at its own pace and hands it back to
    /// [`Game::commit`] once settled. The game itself is unchanged until
    /// then; directional commands arriving in between are the caller's to
    /// drop.
    #[must_use]
    pub fn begin_shift(&self, direction: Direction) -> MoveSession {
        MoveSession::new(&self.board, direction)
    }

    /// Commit a move session started from the current board.
    ///
    /// Runs any remaining passes, then applies the settled board, score,
    /// and post-move spawn.
    pub fn commit(&mut self, session: MoveSession) -> MoveOutcome {
        let mut session = session;
        while session.step() {}
        let outcome = session.outcome();
        let board = session.into_board();
        if outcome.moved {
            self.board = board;
            self.score += outcome.score;
            self.moves += 1;
            // A changed board always has an empty cell; a failed spawn here
            // would be an upstream bug and is ignored in release.
            let spawned = spawn(&mut self.board, &mut self.rng);
            debug_assert!(spawned.is_ok());
            if self.board.max_value() >= WIN_VALUE {
                self.won = true;
            }
        }
        outcome
    }

    /// True if sliding in `direction` would change the board.
    #[must_use]
    pub fn can_shift(&self, direction: Direction) -> bool {
        resolve(&self.board, direction).1.moved
    }
}
