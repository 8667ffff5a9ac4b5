//! Game rules: the engine state machine and selection analysis.
//!
//! `GameEngine` is the only writer of `GameState`. The presentation layer
//! sends it intents and renders the snapshots it hands back.

pub mod engine;
pub mod selection;

pub use engine::GameEngine;
pub use selection::{has_selection, selections_for};
