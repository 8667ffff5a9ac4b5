//! Dice: values, sources and display orientation.

pub mod generator;
pub mod orientation;

use serde::{Deserialize, Serialize};

pub use generator::{FixedRolls, RandomRolls, RollGenerator, Throw};
pub use orientation::{DieOrientation, Spin};

/// The two dice of the most recent throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice([u8; 2]);

impl Default for Dice {
    fn default() -> Self {
        Self([1, 1])
    }
}

impl Dice {
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        debug_assert!((1..=6).contains(&first) && (1..=6).contains(&second));
        Self([first, second])
    }

    #[must_use]
    pub const fn values(&self) -> [u8; 2] {
        self.0
    }

    /// Sum of both dice, in `2..=12`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.0[0] as u32 + self.0[1] as u32
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} = {}", self.0[0], self.0[1], self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dice() {
        assert_eq!(Dice::default().values(), [1, 1]);
        assert_eq!(Dice::default().total(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dice::new(3, 4).to_string(), "3 + 4 = 7");
    }
}
