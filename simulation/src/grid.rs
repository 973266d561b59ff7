//! Toroidal grid storage
//!
//! A square grid of [`CellState`] whose edges wrap to the opposite side, so
//! every cell has exactly eight neighbours. Pure storage: no rules live here.

use std::fmt;
use std::str::FromStr;

use crate::components::CellState;
use crate::error::{LifeError, Result};

/// Smallest grid the engine accepts
pub const MIN_SIZE: usize = 4;

/// Row/column offsets of the eight neighbours around a cell
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// N×N grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    size: usize,
    cells: Vec<CellState>,
}

impl GridState {
    /// All-dead grid with `size` rows and columns. `size` must be non-zero.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0, "grid size must be non-zero");
        Self {
            size,
            cells: vec![CellState::Dead; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, column: usize) -> Result<CellState> {
        let index = self.index(row, column)?;
        Ok(self.cells[index])
    }

    /// Overwrite a single cell. No neighbour or rule checks.
    pub fn set(&mut self, row: usize, column: usize, state: CellState) -> Result<()> {
        let index = self.index(row, column)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Map any row or column index, including negative ones, onto the torus.
    pub fn wrap(&self, n: isize) -> usize {
        n.rem_euclid(self.size as isize) as usize
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// States of the eight wrapped neighbours of (row, column).
    pub fn neighbors(&self, row: usize, column: usize) -> impl Iterator<Item = CellState> + '_ {
        let (row, column) = (row as isize, column as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| self.cell(self.wrap(row + dr), self.wrap(column + dc)))
    }

    pub fn live_neighbors(&self, row: usize, column: usize) -> usize {
        self.neighbors(row, column).filter(|n| n.is_alive()).count()
    }

    /// Number of live cells of either colour
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate `(row, column, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i / self.size, i % self.size, state))
    }

    /// Unchecked lookup for coordinates already wrapped into range.
    pub(crate) fn cell(&self, row: usize, column: usize) -> CellState {
        self.cells[row * self.size + column]
    }

    pub(crate) fn set_unchecked(&mut self, row: usize, column: usize, state: CellState) {
        self.cells[row * self.size + column] = state;
    }

    fn index(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.size || column >= self.size {
            return Err(LifeError::IndexOutOfRange {
                row,
                column,
                size: self.size,
            });
        }
        Ok(row * self.size + column)
    }
}

// ============================================================================
// Text format: one line per row, `.` dead, `A`/`B` live
// ============================================================================

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for GridState {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(LifeError::NotSquare {
                row: 0,
                columns: 0,
                expected: 0,
            });
        }

        let mut grid = GridState::new(size);
        for (row, line) in rows.iter().enumerate() {
            let columns = line.chars().count();
            if columns != size {
                return Err(LifeError::NotSquare {
                    row,
                    columns,
                    expected: size,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                let state = CellState::from_char(ch).ok_or(LifeError::InvalidCell { ch, row })?;
                grid.cells[row * size + column] = state;
            }
        }
        Ok(grid)
    }
}
