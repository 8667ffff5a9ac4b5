//! Core types: tiles, state, intents, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod tile;

pub use action::{ActionRecord, Intent};
pub use config::EngineConfig;
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Outcome, Phase, RoundState};
pub use tile::{tile_value, Board, Tile, TileSet, TileStatus, TILE_COUNT, TOTAL_VALUE};
