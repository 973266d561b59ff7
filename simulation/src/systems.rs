//! Rule systems - evaluate one generation
//!
//! Each cell's next state is computed from a read-only view of the current
//! grid and written into a separate buffer, so evaluation order never matters.

pub mod birth;
pub mod death;

pub use birth::{is_birth, majority_color};
pub use death::survives;

use crate::components::CellState;
use crate::grid::GridState;

/// Births and deaths produced by one pass of [`generation_system`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub births: usize,
    pub deaths: usize,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// Next state of the cell at (row, column).
pub fn next_state(grid: &GridState, row: usize, column: usize) -> CellState {
    let current = grid.cell(row, column);
    let neighbors = grid.live_neighbors(row, column);

    if current.is_alive() {
        if survives(neighbors) {
            current
        } else {
            CellState::Dead
        }
    } else if is_birth(neighbors) {
        majority_color(grid, row, column)
    } else {
        CellState::Dead
    }
}

/// Fill `next` with the generation that follows `current`.
///
/// `next` must have the same size as `current`; its previous contents are
/// overwritten entirely.
pub fn generation_system(current: &GridState, next: &mut GridState) -> Changes {
    debug_assert_eq!(current.size(), next.size());

    let mut changes = Changes::default();
    for (row, column, state) in current.iter() {
        let updated = next_state(current, row, column);
        match (state.is_alive(), updated.is_alive()) {
            (false, true) => changes.births += 1,
            (true, false) => changes.deaths += 1,
            _ => {}
        }
        next.set_unchecked(row, column, updated);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5x5 grid with the centre cell set and `count` of its neighbours alive.
    fn centre_with_neighbors(centre: CellState, count: usize) -> GridState {
        let mut grid = GridState::new(5);
        grid.set(2, 2, centre).unwrap();
        for &(dr, dc) in crate::grid::NEIGHBOR_OFFSETS.iter().take(count) {
            let row = (2 + dr) as usize;
            let column = (2 + dc) as usize;
            grid.set(row, column, CellState::ColorB).unwrap();
        }
        grid
    }

    #[test]
    fn test_survival_boundary() {
        for count in 0..=8 {
            let grid = centre_with_neighbors(CellState::ColorA, count);
            let expected = if count == 2 || count == 3 {
                CellState::ColorA
            } else {
                CellState::Dead
            };
            assert_eq!(next_state(&grid, 2, 2), expected, "{} neighbours", count);
        }
    }

    #[test]
    fn test_birth_only_at_three() {
        for count in 0..=8 {
            let grid = centre_with_neighbors(CellState::Dead, count);
            let born = next_state(&grid, 2, 2).is_alive();
            assert_eq!(born, count == 3, "{} neighbours", count);
        }
    }

    #[test]
    fn test_generation_system_uses_snapshot() {
        // Horizontal blinker becomes vertical; in-place updates would not.
        let current: GridState = ".....\n.....\n.AAA.\n.....\n.....".parse().unwrap();
        let mut next = GridState::new(5);

        let changes = generation_system(&current, &mut next);

        let expected: GridState = ".....\n..A..\n..A..\n..A..\n.....".parse().unwrap();
        assert_eq!(next, expected);
        assert_eq!(changes, Changes { births: 2, deaths: 2 });
    }

    #[test]
    fn test_stable_block_has_no_changes() {
        let current: GridState = "....\n.AB.\n.BA.\n....".parse().unwrap();
        let mut next = GridState::new(4);

        let changes = generation_system(&current, &mut next);
        assert!(changes.is_empty());
        assert_eq!(next, current);
    }
}
