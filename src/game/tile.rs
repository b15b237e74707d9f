//! Tile type and value palette.

// Pixel-to-cell conversions use intentional casts
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

/// Side length of one grid cell in logical pixels.
pub const CELL_PX: i32 = 200;

/// Displacement applied to a sliding tile per animation step, in pixels.
///
/// Divides `CELL_PX` evenly, so a tile crosses one cell in exactly ten steps
/// and pixel positions stay on a fixed lattice.
pub const STEP_PX: i32 = 20;

/// Rounding applied when re-deriving a tile's discrete cell from its
/// pixel position.
///
/// A tile sliding toward decreasing pixel values rounds up, one sliding
/// toward increasing values rounds down. This keeps the tile attributed to
/// its source cell until it has fully arrived, so it cannot jitter back
/// mid-animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rounding {
    /// Round up (moving left or up).
    Ceil,
    /// Round down (moving right or down).
    Floor,
}

/// A single numbered tile.
///
/// Carries both the discrete grid cell (`row`, `col`) and the continuous
/// pixel position (`x`, `y`) used while a move animates. When no move is in
/// flight the two agree: `x == col * CELL_PX` and `y == row * CELL_PX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Tile value, always a power of two >= 2.
    pub value: u32,
    /// Grid row, 0-indexed from the top.
    pub row: u8,
    /// Grid column, 0-indexed from the left.
    pub col: u8,
    /// Horizontal pixel position of the tile's left edge.
    pub x: i32,
    /// Vertical pixel position of the tile's top edge.
    pub y: i32,
}

impl Tile {
    /// Create a tile at rest in the given cell.
    #[must_use]
    pub fn new(value: u32, row: u8, col: u8) -> Self {
        debug_assert!(value >= 2 && value.is_power_of_two());
        Self {
            value,
            row,
            col,
            x: i32::from(col) * CELL_PX,
            y: i32::from(row) * CELL_PX,
        }
    }

    /// Displace the tile by one step vector.
    pub(crate) fn shift_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Re-derive the discrete cell from the pixel position.
    pub(crate) fn snap(&mut self, rounding: Rounding) {
        match rounding {
            Rounding::Ceil => {
                self.row = ((self.y + CELL_PX - 1) / CELL_PX) as u8;
                self.col = ((self.x + CELL_PX - 1) / CELL_PX) as u8;
            }
            Rounding::Floor => {
                self.row = (self.y / CELL_PX) as u8;
                self.col = (self.x / CELL_PX) as u8;
            }
        }
    }

    /// True when the pixel position sits exactly on the tile's cell.
    #[must_use]
    pub fn at_rest(&self) -> bool {
        self.x == i32::from(self.col) * CELL_PX && self.y == i32::from(self.row) * CELL_PX
    }

    /// Background color for this tile's value as an RGB triple.
    ///
    /// The palette covers 2 through 2048; larger values all render as the
    /// dark "super tile" color.
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self.value {
            2 => (238, 228, 218),
            4 => (237, 224, 200),
            8 => (242, 177, 121),
            16 => (245, 149, 99),
            32 => (246, 124, 95),
            64 => (246, 94, 59),
            128 => (237, 207, 114),
            256 => (237, 204, 97),
            512 => (237, 200, 80),
            1024 => (237, 197, 63),
            2048 => (237, 194, 46),
            _ => (60, 58, 50),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_at_rest() {
        let tile = Tile::new(2, 1, 3);
        assert_eq!(tile.x, 600);
        assert_eq!(tile.y, 200);
        assert!(tile.at_rest());
    }

    #[test]
    fn test_snap_ceil_keeps_source_cell() {
        // Sliding left: one step out of column 3 still rounds to column 3.
        let mut tile = Tile::new(2, 0, 3);
        tile.shift_by(-STEP_PX, 0);
        tile.snap(Rounding::Ceil);
        assert_eq!(tile.col, 3);

        // Only a full arrival lands in column 2.
        tile.x = 2 * CELL_PX;
        tile.snap(Rounding::Ceil);
        assert_eq!(tile.col, 2);
    }

    #[test]
    fn test_snap_floor_keeps_source_cell() {
        // Sliding right: one step out of column 0 still rounds to column 0.
        let mut tile = Tile::new(2, 0, 0);
        tile.shift_by(STEP_PX, 0);
        tile.snap(Rounding::Floor);
        assert_eq!(tile.col, 0);

        tile.x = CELL_PX;
        tile.snap(Rounding::Floor);
        assert_eq!(tile.col, 1);
    }

    #[test]
    fn test_palette_known_values() {
        assert_eq!(Tile::new(2, 0, 0).color(), (238, 228, 218));
        assert_eq!(Tile::new(2048, 0, 0).color(), (237, 194, 46));
    }

    #[test]
    fn test_palette_fallback_beyond_2048() {
        assert_eq!(Tile::new(4096, 0, 0).color(), (60, 58, 50));
        assert_eq!(Tile::new(65536, 0, 0).color(), (60, 58, 50));
    }
}
