//! Persistence module for export/import of the current grid
//!
//! Serializes the grid and generation counter to JSON. Only the present
//! state is kept; earlier generations are never recorded.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LifeError, Result};
use crate::grid::GridState;
use crate::world::SimulationEngine;

/// Schema version written into every snapshot
pub const SNAPSHOT_VERSION: u8 = 1;

// ============================================================================
// Export Data Structures
// ============================================================================

/// Current grid state for persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub version: u8,
    pub size: usize,
    pub generation: u64,
    /// One string per row in the text grid format
    pub rows: Vec<String>,
}

/// Result of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    pub population: usize,
    pub generation: u64,
}

/// Result of a save to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveStats {
    pub population: usize,
    pub file_bytes: u64,
}

// ============================================================================
// Export / Import Implementation
// ============================================================================

impl SimulationEngine {
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            version: SNAPSHOT_VERSION,
            size: self.size(),
            generation: self.generation(),
            rows: self.grid().to_string().lines().map(String::from).collect(),
        }
    }

    /// Export the current grid to a JSON string
    pub fn export_snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Import a JSON snapshot, replacing the current grid.
    ///
    /// The snapshot must match this engine's size. Notifies once on success;
    /// on failure the grid is untouched.
    pub fn import_snapshot(&mut self, json: &str) -> Result<ImportResult> {
        let data: GridSnapshot = serde_json::from_str(json)?;

        if data.version != SNAPSHOT_VERSION {
            return Err(LifeError::UnsupportedVersion(data.version));
        }
        if data.size != self.size() {
            return Err(LifeError::SizeMismatch {
                expected: self.size(),
                found: data.size,
            });
        }

        let grid: GridState = data.rows.join("\n").parse()?;
        let population = grid.population();
        self.replace_grid(grid, data.generation)?;

        debug!(population, generation = data.generation, "snapshot imported");
        Ok(ImportResult {
            population,
            generation: data.generation,
        })
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<SaveStats> {
        let json = self.export_snapshot()?;
        fs::write(path.as_ref(), &json)?;

        debug!(path = %path.as_ref().display(), bytes = json.len(), "snapshot saved");
        Ok(SaveStats {
            population: self.population(),
            file_bytes: json.len() as u64,
        })
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<ImportResult> {
        let json = fs::read_to_string(path.as_ref())?;
        self.import_snapshot(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CellState;
    use std::cell::Cell;
    use std::rc::Rc;

    fn sample_engine() -> SimulationEngine {
        let mut engine = SimulationEngine::new(4).unwrap();
        engine.edit_cell(0, 1, CellState::ColorA).unwrap();
        engine.edit_cell(2, 3, CellState::ColorB).unwrap();
        engine
    }

    #[test]
    fn test_snapshot_rows() {
        let snapshot = sample_engine().snapshot();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.size, 4);
        assert_eq!(snapshot.rows, vec![".A..", "....", "...B", "...."]);
    }

    #[test]
    fn test_export_then_import() {
        let mut source = sample_engine();
        source.advance_generation();
        let json = source.export_snapshot().unwrap();

        let notified = Rc::new(Cell::new(0));
        let flag = Rc::clone(&notified);
        let mut target = SimulationEngine::with_observer(4, move || flag.set(flag.get() + 1)).unwrap();

        let result = target.import_snapshot(&json).unwrap();
        assert_eq!(result.generation, source.generation());
        assert_eq!(result.population, source.population());
        assert_eq!(target.grid(), source.grid());
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn test_import_rejects_wrong_size() {
        let json = sample_engine().export_snapshot().unwrap();
        let mut target = SimulationEngine::new(5).unwrap();

        assert!(matches!(
            target.import_snapshot(&json),
            Err(LifeError::SizeMismatch { expected: 5, found: 4 })
        ));
        assert_eq!(target.population(), 0);
    }

    #[test]
    fn test_import_rejects_bad_data() {
        let mut engine = SimulationEngine::new(4).unwrap();

        let future = r#"{"version":2,"size":4,"generation":0,"rows":["....","....","....","...."]}"#;
        assert!(matches!(
            engine.import_snapshot(future),
            Err(LifeError::UnsupportedVersion(2))
        ));

        let bad_cell = r#"{"version":1,"size":4,"generation":0,"rows":["..Z.","....","....","...."]}"#;
        assert!(matches!(
            engine.import_snapshot(bad_cell),
            Err(LifeError::InvalidCell { ch: 'Z', row: 0 })
        ));

        let short = r#"{"version":1,"size":4,"generation":0,"rows":["...","...","..."]}"#;
        assert!(engine.import_snapshot(short).is_err());

        assert!(matches!(engine.import_snapshot("not json"), Err(LifeError::Json(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("life-snapshot-{}.json", std::process::id()));
        let source = sample_engine();

        let stats = source.save_to_file(&path).unwrap();
        assert_eq!(stats.population, 2);
        assert!(stats.file_bytes > 0);

        let mut target = SimulationEngine::new(4).unwrap();
        let result = target.load_from_file(&path).unwrap();
        assert_eq!(result.population, 2);
        assert_eq!(target.grid(), source.grid());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let mut engine = SimulationEngine::new(4).unwrap();
        let path = std::env::temp_dir().join("life-snapshot-does-not-exist.json");
        assert!(matches!(engine.load_from_file(path), Err(LifeError::Io(_))));
    }
}
