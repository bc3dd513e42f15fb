use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_PROBABILITY, MAX_PROBABILITY, MIN_PROBABILITY};

/// Relative sampling weight clamped to [0.01, 10.0].
/// Not a probability: weights are normalized only at draw time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Weight of an unseen candidate.
    pub const DEFAULT: f64 = DEFAULT_PROBABILITY;
    /// Lowest representable weight.
    pub const MIN: f64 = MIN_PROBABILITY;
    /// Highest representable weight.
    pub const MAX: f64 = MAX_PROBABILITY;

    /// Create a new Weight, clamping to [MIN, MAX]. NaN becomes the default.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::DEFAULT);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// True while the weight sits below the baseline and may recover.
    pub fn is_below_default(self) -> bool {
        self.0 < Self::DEFAULT
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(w: Weight) -> Self {
        w.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(Weight::new(0.0).value(), MIN_PROBABILITY);
        assert_eq!(Weight::new(-3.0).value(), MIN_PROBABILITY);
        assert_eq!(Weight::new(50.0).value(), MAX_PROBABILITY);
        assert_eq!(Weight::new(2.5).value(), 2.5);
    }

    #[test]
    fn nan_falls_back_to_default() {
        assert_eq!(Weight::new(f64::NAN).value(), DEFAULT_PROBABILITY);
    }

    #[test]
    fn deserialization_goes_through_clamp() {
        let w: Weight = serde_json::from_str("123.0").unwrap();
        assert_eq!(w.value(), MAX_PROBABILITY);
        assert_eq!(serde_json::to_string(&Weight::new(0.5)).unwrap(), "0.5");
    }
}
