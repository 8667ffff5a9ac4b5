//! Dice sources.
//!
//! The engine draws every throw through [`RollGenerator`]. Production code
//! uses [`RandomRolls`]; tests inject [`FixedRolls`] to script a game.

use crate::core::rng::{GameRng, GameRngState, DIE_FACES};

use super::orientation::{DieOrientation, Spin};
use super::Dice;

/// Result of one throw: the values plus how to draw them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throw {
    pub dice: Dice,
    pub orientations: [DieOrientation; 2],
}

/// Source of dice values and display spins.
///
/// ## Implementation Notes
///
/// - `roll_die` must return a value in `1..=6`
/// - `spin` only affects display; it never reaches game logic
pub trait RollGenerator {
    /// Roll a single die.
    fn roll_die(&mut self) -> u8;

    /// Draw a display spin.
    fn spin(&mut self) -> Spin;

    /// Throw two dice and orient them.
    fn throw(&mut self) -> Throw {
        let first = self.roll_die();
        let second = self.roll_die();
        let orientations = [
            DieOrientation::for_value(first, self.spin()),
            DieOrientation::for_value(second, self.spin()),
        ];
        Throw {
            dice: Dice::new(first, second),
            orientations,
        }
    }
}

/// Uniformly random dice from a seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct RandomRolls {
    rng: GameRng,
}

impl RandomRolls {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seed from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Resume from a captured generator state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Capture the generator state so the same throws can be replayed.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl RollGenerator for RandomRolls {
    fn roll_die(&mut self) -> u8 {
        self.rng.roll_die()
    }

    fn spin(&mut self) -> Spin {
        // ALL is non-empty
        self.rng.choose(&Spin::ALL).copied().unwrap_or(Spin::Quarter)
    }
}

/// Scripted dice for tests and demos. Cycles through `pairs` forever.
#[derive(Clone, Debug)]
pub struct FixedRolls {
    pairs: Vec<[u8; 2]>,
    spin: Spin,
    next_die: usize,
}

impl FixedRolls {
    /// Create a generator that replays `pairs` in order.
    ///
    /// # Panics
    ///
    /// Panics if `pairs` is empty or contains a value outside `1..=6`.
    #[must_use]
    pub fn new(pairs: impl IntoIterator<Item = [u8; 2]>) -> Self {
        let pairs: Vec<_> = pairs.into_iter().collect();
        assert!(!pairs.is_empty(), "FixedRolls needs at least one pair");
        assert!(
            pairs.iter().flatten().all(|v| (1..=DIE_FACES).contains(v)),
            "die values must be in 1..=6"
        );
        Self {
            pairs,
            spin: Spin::Quarter,
            next_die: 0,
        }
    }

    /// Always throw the same pair.
    #[must_use]
    pub fn always(first: u8, second: u8) -> Self {
        Self::new([[first, second]])
    }

    /// Use a different display spin.
    #[must_use]
    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = spin;
        self
    }
}

impl RollGenerator for FixedRolls {
    fn roll_die(&mut self) -> u8 {
        let pair = self.pairs[(self.next_die / 2) % self.pairs.len()];
        let value = pair[self.next_die % 2];
        self.next_die += 1;
        value
    }

    fn spin(&mut self) -> Spin {
        self.spin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_rolls_in_range() {
        let mut source = RandomRolls::new(42);

        for _ in 0..500 {
            let throw = source.throw();
            let [a, b] = throw.dice.values();
            assert!((1..=6).contains(&a));
            assert!((1..=6).contains(&b));
            assert!((2..=12).contains(&throw.dice.total()));
        }
    }

    #[test]
    fn test_random_rolls_deterministic() {
        let mut a = RandomRolls::new(9);
        let mut b = RandomRolls::new(9);

        for _ in 0..50 {
            assert_eq!(a.throw(), b.throw());
        }
    }

    #[test]
    fn test_random_rolls_resume_from_state() {
        let mut source = RandomRolls::new(3);
        for _ in 0..10 {
            source.throw();
        }

        let saved = source.rng_state();
        let expected: Vec<_> = (0..5).map(|_| source.throw()).collect();

        let mut resumed = RandomRolls::from_state(&saved);
        let actual: Vec<_> = (0..5).map(|_| resumed.throw()).collect();

        assert_eq!(expected, actual);
        assert_eq!(resumed.seed(), 3);
    }

    #[test]
    fn test_orientation_matches_value() {
        let mut source = FixedRolls::always(5, 2).with_spin(Spin::NegHalf);
        let throw = source.throw();

        assert_eq!(throw.dice.values(), [5, 2]);
        assert_eq!(throw.orientations[0], DieOrientation::for_value(5, Spin::NegHalf));
        assert_eq!(throw.orientations[1], DieOrientation::for_value(2, Spin::NegHalf));
    }

    #[test]
    fn test_fixed_rolls_cycle() {
        let mut source = FixedRolls::new([[1, 2], [6, 6]]);

        assert_eq!(source.throw().dice.values(), [1, 2]);
        assert_eq!(source.throw().dice.values(), [6, 6]);
        assert_eq!(source.throw().dice.values(), [1, 2]);
    }

    #[test]
    #[should_panic(expected = "at least one pair")]
    fn test_fixed_rolls_rejects_empty() {
        let _ = FixedRolls::new(Vec::new());
    }

    #[test]
    #[should_panic(expected = "1..=6")]
    fn test_fixed_rolls_rejects_bad_value() {
        let _ = FixedRolls::always(0, 7);
    }
}
