//! The Shut the Box state machine.
//!
//! ```text
//! START --roll--> ROLLING --complete_roll--> AWAITING_SELECTION
//! AWAITING_SELECTION --toggle_tile--> AWAITING_SELECTION
//! AWAITING_SELECTION --accept [tiles remain]--> START
//! AWAITING_SELECTION --accept [all closed]--> ENDED_WIN
//! AWAITING_SELECTION --concede--> ENDED_LOSS
//! ANY --restart--> START
//! ```
//!
//! Every command validates before it mutates, so a rejected command leaves
//! the state exactly as it was.

use tracing::{debug, info};

use super::selection::{has_selection, selections_for};
use crate::core::action::{ActionRecord, Intent};
use crate::core::config::EngineConfig;
use crate::core::error::EngineError;
use crate::core::state::{GameState, Phase};
use crate::core::tile::{tile_value, TileSet, TileStatus};
use crate::dice::{RandomRolls, RollGenerator};

/// Owns the game state and applies commands to it.
///
/// ## Example
///
/// ```
/// use shut_the_box::{EngineConfig, FixedRolls, GameEngine, Phase};
///
/// let mut engine = GameEngine::with_generator(FixedRolls::always(3, 4), EngineConfig::default());
/// engine.roll().unwrap();
/// engine.complete_roll().unwrap();
/// engine.toggle_tile(6, true).unwrap();
/// assert!(engine.can_accept());
/// assert_eq!(engine.accept(), Ok(Phase::Start));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<R = RandomRolls> {
    state: GameState,
    dice: R,
    config: EngineConfig,
    history: Vec<ActionRecord>,
}

impl GameEngine<RandomRolls> {
    /// Create an engine with random dice, seeded from `config.seed`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => RandomRolls::new(seed),
            None => RandomRolls::from_entropy(),
        };
        Self::with_generator(dice, config)
    }
}

impl Default for GameEngine<RandomRolls> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RollGenerator> GameEngine<R> {
    /// Create an engine that draws dice from `dice`.
    #[must_use]
    pub fn with_generator(dice: R, config: EngineConfig) -> Self {
        Self {
            state: GameState::new(),
            dice,
            config,
            history: Vec::new(),
        }
    }

    // === Queries ===

    /// Owned snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// Borrowed view of the current state.
    #[must_use]
    pub fn view(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn generator(&self) -> &R {
        &self.dice
    }

    /// Successful commands since the last restart (empty if recording is off).
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// True iff the selected tiles add up to the dice.
    #[must_use]
    pub fn can_accept(&self) -> bool {
        self.state.current_sum() == self.state.roll_total()
    }

    /// Selections of open tiles that would match the current roll.
    ///
    /// Empty outside `AwaitingSelection`.
    #[must_use]
    pub fn candidate_selections(&self) -> Vec<TileSet> {
        if self.phase() != Phase::AwaitingSelection {
            return Vec::new();
        }
        selections_for(self.state.roll_total(), &self.state.open_tiles())
    }

    /// Whether any selection of open tiles can match the current roll.
    ///
    /// Always false outside `AwaitingSelection`.
    #[must_use]
    pub fn selection_possible(&self) -> bool {
        self.phase() == Phase::AwaitingSelection
            && has_selection(self.state.roll_total(), &self.state.open_tiles())
    }

    /// Every intent that would succeed right now.
    #[must_use]
    pub fn legal_intents(&self) -> Vec<Intent> {
        let mut intents = Vec::new();

        match self.phase() {
            Phase::Start => intents.push(Intent::Roll),
            Phase::Rolling => intents.push(Intent::CompleteRoll),
            Phase::AwaitingSelection => {
                for tile in self.state.tiles.iter().filter(|t| !t.is_accepted()) {
                    intents.push(Intent::Toggle {
                        index: tile.index(),
                        on: !tile.is_selected(),
                    });
                }
                if self.can_accept() {
                    intents.push(Intent::Accept);
                }
                intents.push(Intent::Concede);
            }
            Phase::EndedWin | Phase::EndedLoss => {}
        }

        intents.push(Intent::Restart);
        intents
    }

    // === Commands ===

    /// Run one intent. Equivalent to calling the matching method.
    pub fn apply(&mut self, intent: Intent) -> Result<Phase, EngineError> {
        let round = self.state.round_number;
        let result = match intent {
            Intent::Roll => self.roll_dice(),
            Intent::CompleteRoll => self.settle_dice(),
            Intent::Toggle { index, on } => self.set_tile(index, on),
            Intent::Accept => self.commit_selection(),
            Intent::Concede => self.give_up(),
            Intent::Restart => self.reset(),
        };

        match &result {
            Ok(_) => self.record(intent, round),
            Err(err) => debug!(command = intent.name(), %err, "command rejected"),
        }
        result
    }

    /// Throw the dice. `Start → Rolling`.
    pub fn roll(&mut self) -> Result<Phase, EngineError> {
        self.apply(Intent::Roll)
    }

    /// Let the dice land. `Rolling → AwaitingSelection`.
    pub fn complete_roll(&mut self) -> Result<Phase, EngineError> {
        self.apply(Intent::CompleteRoll)
    }

    /// Select or deselect a tile while picking.
    pub fn toggle_tile(&mut self, index: usize, on: bool) -> Result<Phase, EngineError> {
        self.apply(Intent::Toggle { index, on })
    }

    /// Close the selected tiles. Requires `can_accept()`.
    pub fn accept(&mut self) -> Result<Phase, EngineError> {
        self.apply(Intent::Accept)
    }

    /// Give up. `AwaitingSelection → EndedLoss`.
    pub fn concede(&mut self) -> Result<Phase, EngineError> {
        self.apply(Intent::Concede)
    }

    /// Start over from the initial state. Allowed in any phase.
    pub fn restart(&mut self) -> Result<Phase, EngineError> {
        self.apply(Intent::Restart)
    }

    // === Transitions ===

    fn require(&self, operation: &'static str, expected: Phase) -> Result<(), EngineError> {
        let phase = self.phase();
        if phase == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase { operation, phase })
        }
    }

    fn roll_dice(&mut self) -> Result<Phase, EngineError> {
        self.require(Intent::Roll.name(), Phase::Start)?;

        let throw = self.dice.throw();
        let [first, second] = throw.dice.values();
        debug!(first, second, round = self.state.round_number, "dice thrown");

        self.state.round.cubes = throw.dice;
        self.state.round.orientations = throw.orientations;
        self.state.round.phase = Phase::Rolling;
        Ok(Phase::Rolling)
    }

    fn settle_dice(&mut self) -> Result<Phase, EngineError> {
        self.require(Intent::CompleteRoll.name(), Phase::Rolling)?;

        self.state.round.phase = Phase::AwaitingSelection;
        debug!(total = self.state.roll_total(), "dice settled");
        Ok(Phase::AwaitingSelection)
    }

    fn set_tile(&mut self, index: usize, on: bool) -> Result<Phase, EngineError> {
        self.require("toggle_tile", Phase::AwaitingSelection)?;

        let tile = *self
            .state
            .tile(index)
            .ok_or(EngineError::IndexOutOfRange { index })?;
        if tile.is_accepted() {
            return Err(EngineError::TileLocked { index });
        }

        if tile.is_selected() != on {
            let value = tile_value(index);
            if on {
                self.state.tiles.set_status(index, TileStatus::Selected);
                self.state.round.current_sum += value;
            } else {
                self.state.tiles.set_status(index, TileStatus::Open);
                self.state.round.current_sum -= value;
            }
        }

        debug!(index, on, sum = self.state.current_sum(), "tile toggled");
        Ok(Phase::AwaitingSelection)
    }

    fn commit_selection(&mut self) -> Result<Phase, EngineError> {
        self.require(Intent::Accept.name(), Phase::AwaitingSelection)?;
        if !self.can_accept() {
            return Err(EngineError::SumMismatch {
                selected: self.state.current_sum(),
                rolled: self.state.roll_total(),
            });
        }

        let closed = self.state.tiles.commit_selection();
        self.state.round.current_sum = 0;

        let next = if self.state.tiles.all_accepted() {
            info!(rounds = self.state.round_number, "box shut");
            Phase::EndedWin
        } else {
            self.state.round_number += 1;
            Phase::Start
        };
        self.state.round.phase = next;

        debug!(closed = ?closed.as_slice(), score = self.state.score(), %next, "selection accepted");
        Ok(next)
    }

    fn give_up(&mut self) -> Result<Phase, EngineError> {
        self.require(Intent::Concede.name(), Phase::AwaitingSelection)?;

        self.state.round.phase = Phase::EndedLoss;

        info!(score = self.state.score(), rounds = self.state.round_number, "player conceded");
        Ok(Phase::EndedLoss)
    }

    fn reset(&mut self) -> Result<Phase, EngineError> {
        info!(from = %self.phase(), "game restarted");
        self.state = GameState::new();
        self.history.clear();
        Ok(Phase::Start)
    }

    fn record(&mut self, intent: Intent, round: u32) {
        if !self.config.record_history {
            return;
        }
        let sequence = self.history.len() as u32;
        self.history.push(ActionRecord::new(intent, round, sequence));
    }
}
