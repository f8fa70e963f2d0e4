//! Multiplier value object for scaling dashboard figures.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A positive scaling factor applied to sales and KPI figures.
///
/// Scaled results are rounded to two decimal places so that money
/// arithmetic on fixture values stays exact (`12000 × 1.3 = 15600`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(f64);

impl Multiplier {
    /// Largest accepted factor.
    pub const MAX: f64 = 10.0;

    /// Leaves values unchanged.
    pub const ONE: Self = Self(1.0);

    /// Creates a Multiplier, returning error if not a positive finite factor up to `MAX`.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 || value > Self::MAX {
            return Err(ValidationError::out_of_range(
                "multiplier",
                0.0,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw factor.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Scales `amount`, rounding to cents.
    pub fn apply(&self, amount: f64) -> f64 {
        round_cents(amount * self.0)
    }

    /// Returns true if applying this factor leaves values unchanged.
    pub fn is_identity(&self) -> bool {
        (self.0 - 1.0).abs() < f64::EPSILON
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Multiplier> for f64 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{}", self.0)
    }
}

/// Rounds to two decimal places.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
