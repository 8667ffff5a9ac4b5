//! Player intents and the history they leave behind.
//!
//! An [`Intent`] is one thing the presentation layer asks the engine to do.
//! The engine can dispatch them directly (`GameEngine::apply`) and can list
//! the ones that would currently succeed (`GameEngine::legal_intents`).

use serde::{Deserialize, Serialize};

/// A command from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Roll,
    CompleteRoll,
    /// Select (`on = true`) or deselect the tile at `index`.
    Toggle { index: usize, on: bool },
    Accept,
    Concede,
    Restart,
}

impl Intent {
    /// Name used in errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Intent::Roll => "roll",
            Intent::CompleteRoll => "complete_roll",
            Intent::Toggle { .. } => "toggle_tile",
            Intent::Accept => "accept",
            Intent::Concede => "concede",
            Intent::Restart => "restart",
        }
    }
}

/// A successful command with its position in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The command.
    pub intent: Intent,

    /// Round number when the command ran.
    pub round: u32,

    /// Position in the history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(intent: Intent, round: u32, sequence: u32) -> Self {
        Self {
            intent,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_names() {
        assert_eq!(Intent::Roll.name(), "roll");
        assert_eq!(Intent::Toggle { index: 3, on: true }.name(), "toggle_tile");
        assert_eq!(Intent::Restart.name(), "restart");
    }

    #[test]
    fn test_intent_equality() {
        let a = Intent::Toggle { index: 1, on: true };
        let b = Intent::Toggle { index: 1, on: true };
        let c = Intent::Toggle { index: 1, on: false };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Intent::Toggle { index: 4, on: true }, 2, 7);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
