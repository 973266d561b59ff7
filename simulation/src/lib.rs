//! Life Simulation Engine
//!
//! Two-colour Game of Life on a toroidal grid. The engine owns the grid,
//! evaluates generations from an immutable snapshot and notifies a single
//! observer whenever the visible state changes.

pub mod components;
pub mod config;
pub mod error;
pub mod grid;
pub mod persistence;
pub mod systems;
pub mod world;

pub use components::*;
pub use error::LifeError;
pub use grid::{GridState, MIN_SIZE};
pub use persistence::{GridSnapshot, ImportResult, SaveStats};
pub use world::SimulationEngine;
