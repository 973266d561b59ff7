//! Birth System
//!
//! A dead cell with exactly three live neighbours comes alive and takes the
//! majority colour of its neighbourhood.

use crate::components::CellState;
use crate::grid::GridState;

/// Live neighbours required for a birth
pub const BIRTH_NEIGHBORS: usize = 3;

pub fn is_birth(neighbors: usize) -> bool {
    neighbors == BIRTH_NEIGHBORS
}

/// Colour a newborn at (row, column) inherits.
///
/// Sums the colour values of the eight neighbours. A positive sum gives
/// ColorA; anything else, ties included, gives ColorB. The result is fully
/// deterministic.
pub fn majority_color(grid: &GridState, row: usize, column: usize) -> CellState {
    let sum: i32 = grid.neighbors(row, column).map(CellState::color_value).sum();
    if sum > 0 {
        CellState::ColorA
    } else {
        CellState::ColorB
    }
}
