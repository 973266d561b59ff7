//! Cell components and per-generation results
//!
//! Everything the grid stores and the engine reports lives here.

use serde::{Deserialize, Serialize};

// ============================================================================
// Cell State
// ============================================================================

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Dead,
    /// Hue inherited by births whose neighbourhood sums positive.
    ColorA,
    /// Hue inherited by births whose neighbourhood sums to zero or below.
    ColorB,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self != CellState::Dead
    }

    /// Colour value used when resolving the majority colour of a birth.
    /// ColorA = +1, ColorB = -1, Dead = 0
    pub fn color_value(self) -> i32 {
        match self {
            CellState::Dead => 0,
            CellState::ColorA => 1,
            CellState::ColorB => -1,
        }
    }

    /// Character used by the text grid format
    pub fn to_char(self) -> char {
        match self {
            CellState::Dead => '.',
            CellState::ColorA => 'A',
            CellState::ColorB => 'B',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '-' | '_' => Some(CellState::Dead),
            'A' | 'a' => Some(CellState::ColorA),
            'B' | 'b' => Some(CellState::ColorB),
            _ => None,
        }
    }
}

// ============================================================================
// Generation Result
// ============================================================================

/// Outcome of a single `advance_generation` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// False when the population was stable and nothing was committed
    pub changed: bool,
    /// Generation counter after the call
    pub generation: u64,
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_values() {
        assert_eq!(CellState::Dead.color_value(), 0);
        assert_eq!(CellState::ColorA.color_value(), 1);
        assert_eq!(CellState::ColorB.color_value(), -1);
        assert!(!CellState::Dead.is_alive());
        assert!(CellState::ColorB.is_alive());
    }

    #[test]
    fn test_char_encoding() {
        for state in [CellState::Dead, CellState::ColorA, CellState::ColorB] {
            assert_eq!(CellState::from_char(state.to_char()), Some(state));
        }
        assert_eq!(CellState::from_char('b'), Some(CellState::ColorB));
        assert_eq!(CellState::from_char('x'), None);
    }
}
