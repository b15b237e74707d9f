//! Game core for the 2048 sliding-tile puzzle:
//! - Board of numbered tiles on a fixed 4x4 grid
//! - Directional move resolution with per-step animation state
//! - Deterministic tile spawning
//! - Score, win, and game-over tracking

mod board;
mod resolver;
mod spawn;
mod state;
mod tile;

pub use board::{BOARD_PX, Board, CELLS, COLS, Coord, ROWS};
pub use resolver::{Direction, MoveOutcome, MoveSession, resolve};
pub use spawn::{Rng, seed_board, spawn};
pub use state::{Game, WIN_VALUE};
pub use tile::{CELL_PX, STEP_PX, Tile};
