//! Display orientation of a thrown die.
//!
//! A renderer needs to know which face points up. Each value has a fixed
//! base rotation and one axis carries a random right-angle spin so two
//! equal values don't look identical. None of this feeds back into the game.

use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

/// Right-angle spin around the die's free axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spin {
    /// -π/2
    NegQuarter,
    /// -π
    NegHalf,
    /// π/2
    Quarter,
    /// π
    Half,
}

impl Spin {
    /// Every spin, in draw order.
    pub const ALL: [Spin; 4] = [Spin::NegQuarter, Spin::NegHalf, Spin::Quarter, Spin::Half];

    #[must_use]
    pub fn radians(self) -> f32 {
        match self {
            Spin::NegQuarter => -FRAC_PI_2,
            Spin::NegHalf => -PI,
            Spin::Quarter => FRAC_PI_2,
            Spin::Half => PI,
        }
    }
}

/// Euler rotation (x, y, z) in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DieOrientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl DieOrientation {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Orientation that shows `value` face up, spun by `spin`.
    ///
    /// Values outside `1..=6` map to the identity rotation.
    #[must_use]
    pub fn for_value(value: u8, spin: Spin) -> Self {
        let s = spin.radians();
        match value {
            1 => Self::new(0.0, s, FRAC_PI_2),
            2 => Self::new(-PI, s, FRAC_PI_2),
            3 => Self::new(0.0, s, 0.0),
            4 => Self::new(PI, s, 0.0),
            5 => Self::new(-FRAC_PI_2, 0.0, s),
            6 => Self::new(FRAC_PI_2, 0.0, s),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}
