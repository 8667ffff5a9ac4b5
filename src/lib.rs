//! # shut-the-box
//!
//! State machine and scoring engine for the Shut the Box dice game.
//!
//! Roll two dice, close numbered tiles whose values add up to the roll,
//! repeat until every tile is closed (win) or you give up (loss).
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, timers or input handling.
//!    A UI sends intents and renders snapshots.
//!
//! 2. **All-or-Nothing Commands**: Every command validates before it
//!    mutates and reports failure as an `EngineError`.
//!
//! 3. **Deterministic Dice**: Throws come from a `RollGenerator`. Seeded
//!    ChaCha8 in production, scripted pairs in tests.
//!
//! ## Modules
//!
//! - `core`: Tiles, state, intents, errors, RNG, configuration
//! - `dice`: Dice values, generators, display orientation
//! - `rules`: The `GameEngine` state machine and selection analysis

pub mod core;
pub mod dice;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Board, EngineConfig, EngineError, GameRng, GameRngState, GameState, Intent,
    Outcome, Phase, RoundState, Tile, TileSet, TileStatus, TILE_COUNT,
};

pub use crate::dice::{Dice, DieOrientation, FixedRolls, RandomRolls, RollGenerator, Spin, Throw};

pub use crate::rules::GameEngine;
