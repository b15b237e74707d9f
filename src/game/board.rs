//! Board coordinates and grid state.

use crate::game::tile::{CELL_PX, Tile};

/// Number of rows on the board.
pub const ROWS: u8 = 4;

/// Number of columns on the board.
pub const COLS: u8 = 4;

/// Total number of cells.
pub const CELLS: usize = ROWS as usize * COLS as usize;

/// Board edge length in logical pixels.
pub const BOARD_PX: i32 = COLS as i32 * CELL_PX;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row, 0-indexed from the top.
    pub row: u8,
    /// Column, 0-indexed from the left.
    pub col: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check whether the coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }
}

/// The grid state: at most one tile per cell.
///
/// Storage is a fixed row-major array keyed by [`Coord`]. While a move
/// animation is in flight, tile positions live in the move session; the
/// board is rebuilt from the surviving tiles once each pass settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Tile>; CELLS],
}

impl Board {
    /// A constant empty board.
    pub const EMPTY: Board = Board {
        cells: [None; CELLS],
    };

    /// Convert a coordinate to an index into the cell array.
    fn coord_to_index(coord: Coord) -> Option<usize> {
        if coord.in_bounds() {
            Some(usize::from(coord.row) * usize::from(COLS) + usize::from(coord.col))
        } else {
            None
        }
    }

    /// Get a reference to the tile at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        Self::coord_to_index(coord).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Place a tile at the given coordinate, replacing any occupant.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, tile: Tile) -> bool {
        if let Some(idx) = Self::coord_to_index(coord) {
            self.cells[idx] = Some(tile);
            true
        } else {
            false
        }
    }

    /// Remove and return the tile at the given coordinate.
    pub fn remove(&mut self, coord: Coord) -> Option<Tile> {
        Self::coord_to_index(coord).and_then(|idx| self.cells[idx].take())
    }

    /// Rebuild a board from a set of settled tiles.
    ///
    /// Each tile lands in the cell given by its discrete coordinates. Two
    /// tiles claiming the same cell is an upstream bug; in release the later
    /// tile wins.
    #[must_use]
    pub fn from_tiles<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut board = Board::EMPTY;
        for tile in tiles {
            let coord = Coord::new(tile.row, tile.col);
            debug_assert!(coord.in_bounds(), "tile out of bounds at {coord:?}");
            debug_assert!(
                board.get(coord).is_none(),
                "two tiles share cell {coord:?}"
            );
            board.set(coord, tile);
        }
        board
    }

    /// Iterate over all occupied cells.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.as_ref().map(|tile| {
                #[allow(clippy::cast_possible_truncation)]
                let coord = Coord::new(
                    (idx / usize::from(COLS)) as u8,
                    (idx % usize::from(COLS)) as u8,
                );
                (coord, tile)
            })
        })
    }

    /// Iterate over all tiles.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().filter_map(Option::as_ref)
    }

    /// Count occupied cells.
    #[must_use]
    pub fn count_tiles(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Count empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        CELLS - self.count_tiles()
    }

    /// True if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.tiles().map(|t| u64::from(t.value)).sum()
    }

    /// Largest tile value on the board, or 0 when empty.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// True if any direction would change the board.
    ///
    /// Holds exactly when there is an empty cell or an adjacent equal pair;
    /// the negation is the game-over condition.
    #[must_use]
    pub fn has_moves(&self) -> bool {
        if !self.is_full() {
            return true;
        }
        for (coord, tile) in self.iter() {
            let right = Coord::new(coord.row, coord.col + 1);
            if self.get(right).is_some_and(|n| n.value == tile.value) {
                return true;
            }
            let down = Coord::new(coord.row + 1, coord.col);
            if self.get(down).is_some_and(|n| n.value == tile.value) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(3, 3).in_bounds());
        assert!(!Coord::new(4, 0).in_bounds());
        assert!(!Coord::new(0, 4).in_bounds());
    }

    #[test]
    fn test_get_set_remove() {
        let mut board = Board::EMPTY;
        let coord = Coord::new(2, 1);

        assert!(board.get(coord).is_none());
        assert!(board.set(coord, Tile::new(4, 2, 1)));
        assert_eq!(board.get(coord).unwrap().value, 4);

        let removed = board.remove(coord).unwrap();
        assert_eq!(removed.value, 4);
        assert!(board.get(coord).is_none());
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::EMPTY;
        assert!(!board.set(Coord::new(4, 0), Tile::new(2, 4, 0)));
        assert_eq!(board.count_tiles(), 0);
    }

    #[test]
    fn test_counts() {
        let mut board = Board::EMPTY;
        assert_eq!(board.count_empty(), CELLS);
        board.set(Coord::new(0, 0), Tile::new(2, 0, 0));
        board.set(Coord::new(3, 3), Tile::new(8, 3, 3));
        assert_eq!(board.count_tiles(), 2);
        assert_eq!(board.count_empty(), CELLS - 2);
        assert_eq!(board.total_value(), 10);
        assert_eq!(board.max_value(), 8);
    }

    #[test]
    fn test_from_tiles_round_trips() {
        let tiles = [Tile::new(2, 0, 0), Tile::new(4, 1, 2), Tile::new(8, 3, 3)];
        let board = Board::from_tiles(tiles);
        assert_eq!(board.count_tiles(), 3);
        assert_eq!(board.get(Coord::new(1, 2)).unwrap().value, 4);
    }

    #[test]
    fn test_has_moves_with_empty_cell() {
        let mut board = Board::EMPTY;
        board.set(Coord::new(0, 0), Tile::new(2, 0, 0));
        assert!(board.has_moves());
    }

    #[test]
    fn test_has_moves_full_with_merge() {
        // Full board, one horizontal equal pair.
        let mut tiles = Vec::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let value = if (row + col) % 2 == 0 { 2 } else { 4 };
                tiles.push(Tile::new(value, row, col));
            }
        }
        // Checkerboard of 2s and 4s has no adjacent equal pair.
        let board = Board::from_tiles(tiles.iter().copied());
        assert!(!board.has_moves());

        // Make one pair equal.
        tiles[1].value = 2;
        let board = Board::from_tiles(tiles);
        assert!(board.has_moves());
    }
}
