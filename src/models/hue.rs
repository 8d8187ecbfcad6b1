use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of discrete hues on the color wheel
pub const HUE_COUNT: u16 = 360;

/// Discrete hue in degrees, always within 0..360
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hue(u16);

impl Hue {
    /// Create a hue, wrapping any integer onto the wheel
    pub fn new(degrees: i64) -> Self {
        Self(degrees.rem_euclid(HUE_COUNT as i64) as u16)
    }

    /// Pick a hue uniformly at random
    pub fn random() -> Self {
        use rand::Rng;
        Self(rand::thread_rng().gen_range(0..HUE_COUNT))
    }

    /// The hue `steps` degrees further along the wheel
    pub fn offset(self, steps: usize) -> Self {
        let steps = (steps % HUE_COUNT as usize) as u16;
        Self((self.0 + steps) % HUE_COUNT)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
