//! Property tests over random command sequences.
//!
//! Whatever the player does, the running sum must agree with the board,
//! accepted tiles must stay accepted, and accept may only succeed when the
//! selection matched the roll.

use proptest::prelude::*;

use shut_the_box::{
    EngineConfig, EngineError, GameEngine, GameState, Intent, Phase, RandomRolls, TILE_COUNT,
};

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        2 => Just(Intent::Roll),
        2 => Just(Intent::CompleteRoll),
        8 => (0..TILE_COUNT + 2, any::<bool>()).prop_map(|(index, on)| Intent::Toggle { index, on }),
        3 => Just(Intent::Accept),
        1 => Just(Intent::Concede),
        1 => Just(Intent::Restart),
    ]
}

fn engine(seed: u64) -> GameEngine<RandomRolls> {
    GameEngine::new(EngineConfig::default().with_seed(seed))
}

proptest! {
    /// The incremental sum always equals the sum of selected tiles.
    #[test]
    fn prop_sum_matches_selection(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent_strategy(), 0..200),
    ) {
        let mut engine = engine(seed);
        for intent in intents {
            let _ = engine.apply(intent);
            prop_assert!(engine.view().sum_is_consistent());
        }
    }

    /// Dice stay in range and accepted tiles are never reopened except by restart.
    #[test]
    fn prop_dice_and_locks(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent_strategy(), 0..200),
    ) {
        let mut engine = engine(seed);
        let mut before = engine.state();

        for intent in intents {
            let result = engine.apply(intent);
            let after = engine.state();

            let [a, b] = after.round.cubes.values();
            prop_assert!((1..=6).contains(&a) && (1..=6).contains(&b));

            if intent != Intent::Restart {
                for i in 0..TILE_COUNT {
                    if before.tile(i).unwrap().is_accepted() {
                        prop_assert!(after.tile(i).unwrap().is_accepted());
                    }
                }
            }

            if result.is_err() {
                prop_assert_eq!(&after, &before);
            }
            before = after;
        }
    }

    /// Accept succeeds exactly when the phase allows it and can_accept held.
    #[test]
    fn prop_accept_requires_match(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent_strategy(), 0..200),
    ) {
        let mut engine = engine(seed);
        for intent in intents {
            if intent == Intent::Accept {
                let allowed = engine.phase() == Phase::AwaitingSelection && engine.can_accept();
                let selected = engine.view().selected_tiles();
                let result = engine.accept();
                prop_assert_eq!(result.is_ok(), allowed);

                if result.is_ok() {
                    let state = engine.view();
                    prop_assert_eq!(state.current_sum(), 0);
                    prop_assert!(state.selected_tiles().is_empty());
                    for &i in &selected {
                        prop_assert!(state.tile(i).unwrap().is_accepted());
                    }
                } else if engine.phase() == Phase::AwaitingSelection {
                    let is_mismatch = matches!(result, Err(EngineError::SumMismatch { .. }));
                    prop_assert!(is_mismatch);
                }
            } else {
                let _ = engine.apply(intent);
            }
        }
    }

    /// Toggling the same tile on twice counts it once.
    #[test]
    fn prop_toggle_idempotent(seed in any::<u64>(), index in 0..TILE_COUNT) {
        let mut engine = engine(seed);
        engine.roll().unwrap();
        engine.complete_roll().unwrap();

        engine.toggle_tile(index, true).unwrap();
        let once = engine.view().current_sum();
        engine.toggle_tile(index, true).unwrap();
        prop_assert_eq!(engine.view().current_sum(), once);
        prop_assert_eq!(once, index as u32 + 1);
    }

    /// Restart always lands on the initial snapshot.
    #[test]
    fn prop_restart_resets(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent_strategy(), 0..100),
    ) {
        let mut engine = engine(seed);
        for intent in intents {
            let _ = engine.apply(intent);
        }
        prop_assert_eq!(engine.restart(), Ok(Phase::Start));
        prop_assert_eq!(engine.state(), GameState::new());
    }
}
