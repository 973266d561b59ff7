//! Death System
//!
//! Live cells die of isolation or overcrowding. Colour plays no part.

/// Fewest live neighbours a live cell needs to survive
const MIN_NEIGHBORS: usize = 2;
/// Most live neighbours a live cell tolerates
const MAX_NEIGHBORS: usize = 3;

/// Whether a live cell with `neighbors` live neighbours stays alive.
pub fn survives(neighbors: usize) -> bool {
    (MIN_NEIGHBORS..=MAX_NEIGHBORS).contains(&neighbors)
}
