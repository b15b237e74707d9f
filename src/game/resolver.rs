//! Directional move resolution.
//!
//! A move is a sequence of animation steps. Each step is one full pass over
//! the tiles in scan order: every tile either advances one step vector
//! toward the target edge, completes a merge, or holds still. The move ends
//! when a pass changes nothing. [`MoveSession`] exposes the pass-by-pass
//! state so a game loop can pace rendering; [`resolve`] runs a session to
//! completion headlessly.

use crate::game::board::{Board, COLS, Coord, ROWS};
use crate::game::tile::{CELL_PX, Rounding, STEP_PX, Tile};

/// A directional move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slide tiles toward row 0.
    Up,
    /// Slide tiles toward the last row.
    Down,
    /// Slide tiles toward column 0.
    Left,
    /// Slide tiles toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a single-letter direction (`U`, `D`, `L`, `R`, case-insensitive).
    #[must_use]
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Single-letter name used in move scripts and output.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// The fixed behavioral parameters for this direction.
    const fn profile(self) -> Profile {
        match self {
            Direction::Up => Profile {
                dx: 0,
                dy: -STEP_PX,
                drow: -1,
                dcol: 0,
                reverse_scan: false,
                rounding: Rounding::Ceil,
            },
            Direction::Down => Profile {
                dx: 0,
                dy: STEP_PX,
                drow: 1,
                dcol: 0,
                reverse_scan: true,
                rounding: Rounding::Floor,
            },
            Direction::Left => Profile {
                dx: -STEP_PX,
                dy: 0,
                drow: 0,
                dcol: -1,
                reverse_scan: false,
                rounding: Rounding::Ceil,
            },
            Direction::Right => Profile {
                dx: STEP_PX,
                dy: 0,
                drow: 0,
                dcol: 1,
                reverse_scan: true,
                rounding: Rounding::Floor,
            },
        }
    }
}

/// Per-direction behavior of the resolver: step vector, neighbor offset,
/// scan order, and discrete rounding. One record per direction keeps the
/// pass logic a single parametrized algorithm.
#[derive(Debug, Clone, Copy)]
struct Profile {
    dx: i32,
    dy: i32,
    drow: i8,
    dcol: i8,
    reverse_scan: bool,
    rounding: Rounding,
}

impl Profile {
    /// Tiles already at the target edge never move.
    fn at_edge(&self, tile: &Tile) -> bool {
        match (self.drow, self.dcol) {
            (-1, _) => tile.row == 0,
            (1, _) => tile.row == ROWS - 1,
            (_, -1) => tile.col == 0,
            _ => tile.col == COLS - 1,
        }
    }

    /// The cell one step closer to the target edge.
    ///
    /// Callers must rule out edge tiles first.
    fn neighbor(&self, tile: &Tile) -> Coord {
        Coord::new(
            tile.row.wrapping_add_signed(self.drow),
            tile.col.wrapping_add_signed(self.dcol),
        )
    }

    /// Sort key ordering tiles closest to the target edge first.
    fn scan_key(&self, tile: &Tile) -> u8 {
        if self.dcol == 0 { tile.row } else { tile.col }
    }

    /// Pixel gap between two tiles along the move axis.
    fn gap(&self, tile: &Tile, next: &Tile) -> i32 {
        if self.dcol == 0 {
            (tile.y - next.y).abs()
        } else {
            (tile.x - next.x).abs()
        }
    }
}

/// Summary of a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any tile moved or merged.
    pub moved: bool,
    /// Number of merges performed.
    pub merges: u32,
    /// Score gained: the sum of the values produced by merges.
    pub score: u64,
}

/// One tile's transient state within a move.
#[derive(Debug, Clone, Copy)]
struct Slot {
    tile: Tile,
    /// False once the tile has been absorbed by a merge.
    alive: bool,
    /// True once the tile has absorbed a merge; it may not merge again
    /// this move.
    blocked: bool,
}

/// The transient state of one directional move.
///
/// Created from a board snapshot, stepped one pass at a time, and finally
/// turned back into a settled board. Intermediate tile positions are
/// available between steps for rendering.
#[derive(Debug, Clone)]
pub struct MoveSession {
    direction: Direction,
    slots: Vec<Slot>,
    merges: u32,
    score: u64,
    moved: bool,
    settled: bool,
}

impl MoveSession {
    /// Begin a move of `direction` from the given board.
    #[must_use]
    pub fn new(board: &Board, direction: Direction) -> Self {
        let slots = board
            .tiles()
            .map(|&tile| Slot {
                tile,
                alive: true,
                blocked: false,
            })
            .collect();
        Self {
            direction,
            slots,
            merges: 0,
            score: 0,
            moved: false,
            settled: false,
        }
    }

    /// Advance the move by one animation step (one full pass).
    ///
    /// Returns `true` if any tile moved or merged; `false` once the move has
    /// settled. Calling `step` on a settled session is a no-op.
    pub fn step(&mut self) -> bool {
        if self.settled {
            return false;
        }
        let profile = self.direction.profile();

        // Occupancy as of the start of the pass. Lookups within a pass do
        // not see positions updated during the same pass; the index is
        // rebuilt when the next pass begins.
        let mut index = [[None::<usize>; COLS as usize]; ROWS as usize];
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.alive {
                index[usize::from(slot.tile.row)][usize::from(slot.tile.col)] = Some(i);
            }
        }

        // Tiles closest to the target edge are processed first, so a tile is
        // never held up by one that has not yet had its turn.
        let mut order: Vec<usize> = (0..self.slots.len())
            .filter(|&i| self.slots[i].alive)
            .collect();
        order.sort_by_key(|&i| profile.scan_key(&self.slots[i].tile));
        if profile.reverse_scan {
            order.reverse();
        }

        let mut changed = false;
        for i in order {
            let tile = self.slots[i].tile;
            if profile.at_edge(&tile) {
                continue;
            }

            let target = profile.neighbor(&tile);
            let occupant = index[usize::from(target.row)][usize::from(target.col)]
                .filter(|&j| self.slots[j].alive);

            match occupant {
                None => self.slots[i].tile.shift_by(profile.dx, profile.dy),
                Some(j) => {
                    let next = self.slots[j].tile;
                    let gap = profile.gap(&tile, &next);
                    if next.value == tile.value
                        && !self.slots[i].blocked
                        && !self.slots[j].blocked
                    {
                        if gap > STEP_PX {
                            // Equal pair, not yet touching: close in.
                            self.slots[i].tile.shift_by(profile.dx, profile.dy);
                        } else {
                            // Merge: the occupant absorbs this tile and is
                            // locked out of further merges this move.
                            self.slots[j].tile.value *= 2;
                            self.slots[j].blocked = true;
                            self.slots[i].alive = false;
                            self.merges += 1;
                            self.score += u64::from(self.slots[j].tile.value);
                        }
                    } else if gap > CELL_PX + STEP_PX {
                        // Unequal (or already-merged) occupant with open
                        // space before it: keep sliding.
                        self.slots[i].tile.shift_by(profile.dx, profile.dy);
                    } else {
                        continue;
                    }
                }
            }

            if self.slots[i].alive {
                self.slots[i].tile.snap(profile.rounding);
            }
            changed = true;
        }

        if changed {
            self.moved = true;
        } else {
            self.settled = true;
        }
        changed
    }

    /// The direction being processed.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// True once a full pass has produced no movement.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Live tiles at their current (possibly mid-animation) positions.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.slots
            .iter()
            .filter(|slot| slot.alive)
            .map(|slot| &slot.tile)
    }

    /// Summary of the move so far.
    #[must_use]
    pub const fn outcome(&self) -> MoveOutcome {
        MoveOutcome {
            moved: self.moved,
            merges: self.merges,
            score: self.score,
        }
    }

    /// Run any remaining passes and rebuild the settled board.
    #[must_use]
    pub fn into_board(mut self) -> Board {
        while self.step() {}
        Board::from_tiles(self.slots.iter().filter(|s| s.alive).map(|s| s.tile))
    }
}

/// Slide and merge `board` in `direction`, running all animation steps to
/// completion. Pure with respect to its inputs: no spawn, no randomness.
#[must_use]
pub fn resolve(board: &Board, direction: Direction) -> (Board, MoveOutcome) {
    let mut session = MoveSession::new(board, direction);
    while session.step() {}
    let outcome = session.outcome();
    (session.into_board(), outcome)
}
