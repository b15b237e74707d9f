#![no_main]

//! Move resolver fuzzer.
//!
//! Builds an arbitrary (possibly sparse) board, resolves it in an arbitrary
//! direction, and checks the structural invariants that every move must
//! preserve: tiles in bounds, one tile per cell, total value conserved, and
//! every merge accounted for in the outcome.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slide48::game::{Board, CELLS, Direction, Tile, resolve};

/// Structured input: one optional value exponent per cell plus a direction.
#[derive(Arbitrary, Debug)]
struct ResolveInput {
    /// Value exponent per cell; `None` leaves the cell empty. Exponents are
    /// capped so values stay within the supported range.
    cells: [Option<u8>; CELLS],
    /// Direction selector.
    direction: u8,
}

fuzz_target!(|input: ResolveInput| {
    let board = Board::from_tiles(input.cells.iter().enumerate().filter_map(|(i, exp)| {
        exp.map(|exp| {
            let exp = u32::from(exp % 16) + 1; // 2 through 65536
            let row = (i / 4) as u8;
            let col = (i % 4) as u8;
            Tile::new(1 << exp, row, col)
        })
    }));
    let direction = Direction::ALL[usize::from(input.direction) % 4];

    let (after, outcome) = resolve(&board, direction);

    // Tiles stay in bounds, at rest, one per cell
    let mut seen = [false; CELLS];
    for (coord, tile) in after.iter() {
        assert!(coord.in_bounds());
        assert!(tile.at_rest(), "tile not settled: {tile:?}");
        let index = usize::from(tile.row) * 4 + usize::from(tile.col);
        assert!(!seen[index], "two tiles share cell {coord:?}");
        seen[index] = true;
    }

    // A merge doubles in place: no value created or destroyed
    assert_eq!(after.total_value(), board.total_value());

    // Each merge removes exactly one tile
    assert_eq!(
        after.count_tiles(),
        board.count_tiles() - outcome.merges as usize
    );

    // Resolving a settled board again changes nothing
    let (again, second) = resolve(&after, direction);
    assert!(!second.moved, "resolution did not reach a fixed point");
    assert_eq!(again, after);
});
