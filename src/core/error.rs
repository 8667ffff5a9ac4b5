//! Errors returned by engine commands.

use thiserror::Error;

use super::state::Phase;

/// Why a command was rejected. State is untouched whenever one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Command not allowed in the current phase.
    #[error("{operation} is not allowed in phase {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    /// Tile index outside the board.
    #[error("tile index {index} out of range (0..{max})", max = crate::core::tile::TILE_COUNT)]
    IndexOutOfRange { index: usize },

    /// Tile was closed by an earlier round.
    #[error("tile {index} is already accepted")]
    TileLocked { index: usize },

    /// Selection total differs from the dice total.
    #[error("selection does not match the roll (selected {selected}, rolled {rolled})")]
    SumMismatch { selected: u32, rolled: u32 },
}

impl EngineError {
    /// True for errors that only a buggy caller can produce.
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, EngineError::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::InvalidPhase {
            operation: "roll",
            phase: Phase::EndedWin,
        };
        assert_eq!(err.to_string(), "roll is not allowed in phase ENDED_WIN");

        let err = EngineError::IndexOutOfRange { index: 12 };
        assert_eq!(err.to_string(), "tile index 12 out of range (0..12)");

        let err = EngineError::SumMismatch { selected: 3, rolled: 7 };
        assert!(err.to_string().starts_with("selection does not match the roll"));
    }

    #[test]
    fn test_is_caller_bug() {
        assert!(EngineError::IndexOutOfRange { index: 99 }.is_caller_bug());
        assert!(!EngineError::TileLocked { index: 0 }.is_caller_bug());
        assert!(!EngineError::SumMismatch { selected: 1, rolled: 2 }.is_caller_bug());
    }
}
