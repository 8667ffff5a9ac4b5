//! Game state: phase, dice, tiles.
//!
//! ## RoundState
//!
//! Per-round information: last dice, running selection total, phase and
//! die orientations for display.
//!
//! ## GameState
//!
//! Complete state of a session: the board, the round in progress and the
//! round counter. The engine hands out clones of this as snapshots.

use serde::{Deserialize, Serialize};

use super::tile::{Board, Tile, TileSet, TOTAL_VALUE};
use crate::dice::{Dice, DieOrientation};

/// Engine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Waiting for a roll. Also covers "next round".
    #[default]
    Start,
    /// Dice are in the air; waiting for `complete_roll`.
    Rolling,
    /// Player is picking tiles.
    AwaitingSelection,
    /// Every tile closed.
    EndedWin,
    /// Player conceded.
    EndedLoss,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::EndedWin | Phase::EndedLoss)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Start => "START",
            Phase::Rolling => "ROLLING",
            Phase::AwaitingSelection => "AWAITING_SELECTION",
            Phase::EndedWin => "ENDED_WIN",
            Phase::EndedLoss => "ENDED_LOSS",
        };
        f.write_str(name)
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Box shut.
    Won,
    /// Conceded with `score` points still open.
    Lost { score: u32 },
}

/// State of the round in progress.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Most recent throw.
    pub cubes: Dice,

    /// Sum of selected tile values. Kept in step with the board by the engine.
    pub current_sum: u32,

    pub phase: Phase,

    /// Display orientation of each die for the most recent throw.
    pub orientations: [DieOrientation; 2],
}

/// Complete session state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tiles: Board,
    pub round: RoundState,

    /// 1-based number of the round in progress.
    pub round_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Initial state: all tiles open, sum 0, phase `Start`, round 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: Board::new(),
            round: RoundState::default(),
            round_number: 1,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    #[must_use]
    pub fn current_sum(&self) -> u32 {
        self.round.current_sum
    }

    /// Sum of the two dice.
    #[must_use]
    pub fn roll_total(&self) -> u32 {
        self.round.cubes.total()
    }

    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Indices of tiles not yet accepted.
    #[must_use]
    pub fn open_tiles(&self) -> TileSet {
        self.tiles.open_indices()
    }

    #[must_use]
    pub fn selected_tiles(&self) -> TileSet {
        self.tiles.selected_indices()
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.tiles.accepted_count()
    }

    /// Points left on the board. Lower is better; 0 means the box is shut.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.tiles.open_value()
    }

    /// Points closed so far.
    #[must_use]
    pub fn closed_value(&self) -> u32 {
        TOTAL_VALUE - self.score()
    }

    /// `None` while the game is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.round.phase {
            Phase::EndedWin => Some(Outcome::Won),
            Phase::EndedLoss => Some(Outcome::Lost { score: self.score() }),
            _ => None,
        }
    }

    /// True when the running sum agrees with the board.
    #[must_use]
    pub fn sum_is_consistent(&self) -> bool {
        self.round.current_sum == self.tiles.selected_sum()
    }
}
