//! Simulation Engine - main orchestrator
//!
//! Owns the grid, applies edits and generations, and tells a single observer
//! whenever the visible grid changed. All operations are synchronous and the
//! observer runs on the caller's thread before the operation returns.

use std::fmt;
use std::mem;

use rand::Rng;
use tracing::{debug, trace};

use crate::components::{CellState, GenerationResult};
use crate::error::{LifeError, Result};
use crate::grid::{GridState, MIN_SIZE};
use crate::systems;

type Observer = Box<dyn FnMut()>;

pub struct SimulationEngine {
    current: GridState,
    /// Scratch buffer the next generation is built into
    next: GridState,
    generation: u64,
    observer: Option<Observer>,
}

impl SimulationEngine {
    /// All-dead engine with a `size`×`size` grid.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(LifeError::InvalidSize { size, min: MIN_SIZE });
        }
        Ok(Self {
            current: GridState::new(size),
            next: GridState::new(size),
            generation: 0,
            observer: None,
        })
    }

    pub fn with_observer<F>(size: usize, observer: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let mut engine = Self::new(size)?;
        engine.set_observer(observer);
        Ok(engine)
    }

    /// Register the change observer, replacing any previous one.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut() + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn size(&self) -> usize {
        self.current.size()
    }

    pub fn cell_state(&self, row: usize, column: usize) -> Result<CellState> {
        self.current.get(row, column)
    }

    /// Read-only view of the current grid for rendering
    pub fn grid(&self) -> &GridState {
        &self.current
    }

    /// Committed generations since the last reset or seeding
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Set a cell directly, bypassing the rules.
    ///
    /// The observer fires only if the stored state actually changed.
    pub fn edit_cell(&mut self, row: usize, column: usize, state: CellState) -> Result<()> {
        let previous = self.current.get(row, column)?;
        if previous == state {
            return Ok(());
        }
        self.current.set(row, column, state)?;
        trace!(row, column, ?previous, ?state, "cell edited");
        self.notify();
        Ok(())
    }

    /// Kill every cell and restart the generation count. Always notifies.
    pub fn reset(&mut self) {
        self.current.clear();
        self.generation = 0;
        debug!(size = self.size(), "grid reset");
        self.notify();
    }

    /// Apply the rules once to every cell.
    ///
    /// The next grid is built from the untouched current grid and only
    /// committed if it differs. A stable grid is left alone, the generation
    /// counter does not move and the observer is not called.
    pub fn advance_generation(&mut self) -> GenerationResult {
        let changes = systems::generation_system(&self.current, &mut self.next);

        if self.next == self.current {
            debug!(generation = self.generation, "population stable");
            return GenerationResult {
                changed: false,
                generation: self.generation,
                births: 0,
                deaths: 0,
                population: self.current.population(),
            };
        }

        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        let population = self.current.population();
        debug!(
            generation = self.generation,
            births = changes.births,
            deaths = changes.deaths,
            population,
            "generation advanced"
        );
        self.notify();

        GenerationResult {
            changed: true,
            generation: self.generation,
            births: changes.births,
            deaths: changes.deaths,
            population,
        }
    }

    /// Fill the grid at random: each cell is alive with probability
    /// `density`, split evenly between the two colours.
    ///
    /// Restarts the generation count. Returns the new population.
    pub fn seed_random<R: Rng>(&mut self, rng: &mut R, density: f64) -> Result<usize> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }

        let size = self.size();
        for row in 0..size {
            for column in 0..size {
                let state = if rng.gen_bool(density) {
                    if rng.gen::<bool>() {
                        CellState::ColorA
                    } else {
                        CellState::ColorB
                    }
                } else {
                    CellState::Dead
                };
                self.current.set_unchecked(row, column, state);
            }
        }
        self.generation = 0;

        let population = self.current.population();
        debug!(density, population, "grid seeded");
        self.notify();
        Ok(population)
    }

    /// Stamp `pattern` onto the grid with its top-left corner at
    /// (row, column), wrapping around the edges. Dead pattern cells are
    /// written too.
    ///
    /// Any anchor is valid; it is reduced onto the grid first. Patterns
    /// larger than the grid are rejected with `SizeMismatch`, so no cell is
    /// written twice.
    ///
    /// Returns how many cells changed; notifies once if any did.
    pub fn place_pattern(&mut self, pattern: &GridState, row: usize, column: usize) -> Result<usize> {
        let size = self.size();
        if pattern.size() > size {
            return Err(LifeError::SizeMismatch {
                expected: size,
                found: pattern.size(),
            });
        }

        let (row, column) = (row % size, column % size);
        let mut changed = 0;
        for (dr, dc, state) in pattern.iter() {
            // both terms are below `size`, so the sums cannot overflow
            let r = (row + dr) % size;
            let c = (column + dc) % size;
            if self.current.cell(r, c) != state {
                self.current.set_unchecked(r, c, state);
                changed += 1;
            }
        }

        if changed > 0 {
            debug!(row, column, changed, "pattern placed");
            self.notify();
        }
        Ok(changed)
    }

    /// Replace the whole grid and generation counter, notifying once.
    pub(crate) fn replace_grid(&mut self, grid: GridState, generation: u64) -> Result<()> {
        if grid.size() != self.size() {
            return Err(LifeError::SizeMismatch {
                expected: self.size(),
                found: grid.size(),
            });
        }
        self.current = grid;
        self.generation = generation;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer();
        }
    }
}

impl fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("size", &self.size())
            .field("generation", &self.generation)
            .field("population", &self.population())
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
