//! Weight tables applied to the per-dimension scores.
#![forbid(unsafe_code)]

use crate::ScorerError;

/// Largest acceptable deviation of the weight sum from `1.0`.
const SUM_TOLERANCE: f64 = 1e-9;

/// Relative importance of each scoring dimension.
///
/// Weights must be finite, non-negative and sum to `1.0`; use
/// [`DimensionWeights::validate`] before scoring with a hand-built table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionWeights {
    /// Interest overlap.
    pub interests: f64,
    /// Personality fit.
    pub personality: f64,
    /// Occasion fit.
    pub occasion: f64,
    /// Age fit.
    pub age: f64,
    /// Budget fit.
    pub budget: f64,
    /// Gender fit; zero in the canonical table.
    pub gender: f64,
}

/// Five-dimension table without gender.
pub const CANONICAL_WEIGHTS: DimensionWeights = DimensionWeights {
    interests: 0.30,
    personality: 0.20,
    occasion: 0.20,
    age: 0.15,
    budget: 0.15,
    gender: 0.0,
};

/// Earlier six-dimension table that also weighs gender.
pub const LEGACY_WEIGHTS: DimensionWeights = DimensionWeights {
    interests: 0.25,
    personality: 0.10,
    occasion: 0.10,
    age: 0.20,
    budget: 0.25,
    gender: 0.10,
};

impl DimensionWeights {
    /// Sum of all weights.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation requires a simple sum of weights"
    )]
    #[must_use]
    pub fn sum(self) -> f64 {
        self.interests + self.personality + self.occasion + self.age + self.budget + self.gender
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when any weight is negative or
    /// not finite, or when the weights do not sum to `1.0`.
    pub fn validate(self) -> Result<Self, ScorerError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerError::InvalidWeights { sum: self.sum() })
        }
    }

    fn is_valid(self) -> bool {
        self.values()
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0)
            && self.sums_to_one()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the sum is compared against 1.0 within a tolerance"
    )]
    fn sums_to_one(self) -> bool {
        (self.sum() - 1.0).abs() <= SUM_TOLERANCE
    }

    const fn values(self) -> [f64; 6] {
        [
            self.interests,
            self.personality,
            self.occasion,
            self.age,
            self.budget,
            self.gender,
        ]
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        CANONICAL_WEIGHTS
    }
}
