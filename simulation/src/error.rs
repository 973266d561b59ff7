//! Error types for the simulation engine
//!
//! Every failure here is a contract violation by the caller or a bad input
//! file. Nothing is retried.

/// Errors surfaced by grid, engine and persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("grid size {size} is below the minimum of {min}")]
    InvalidSize { size: usize, min: usize },

    #[error("cell ({row}, {column}) is outside the {size}x{size} grid")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        size: usize,
    },

    #[error("seeding density {0} is not within 0.0..=1.0")]
    InvalidDensity(f64),

    #[error("invalid cell character {ch:?} on row {row}")]
    InvalidCell { ch: char, row: usize },

    #[error("grid is not square: row {row} has {columns} cells, expected {expected}")]
    NotSquare {
        row: usize,
        columns: usize,
        expected: usize,
    },

    #[error("grid is {found}x{found} but the engine is {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u8),

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
