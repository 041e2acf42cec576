//! Weighted multi-dimension scorer.
//!
//! The scorer evaluates every dimension rule in [`crate::dimension`], clamps
//! each result into `0.0..=1.0`, and blends them with an immutable
//! [`DimensionWeights`] table fixed at construction. Scorers built from
//! different tables can be used side by side.
#![forbid(unsafe_code)]

use giftmatch_core::{
    CatalogItem, Criteria, Evaluation, MatchDetails, ScoreError, Scorer, sanitise,
};

use crate::ScorerError;
use crate::dimension::{
    age_score, budget_score, gender_score, interest_score, occasion_score, personality_score,
};
use crate::weights::DimensionWeights;

/// Scorer blending per-dimension credit with a fixed weight table.
///
/// # Examples
/// ```
/// use giftmatch_core::{AgeRange, BudgetRange, CatalogItem, Criteria, Scorer};
/// use giftmatch_scorer::WeightedScorer;
///
/// let item = CatalogItem::new(1)
///     .with_age_range(AgeRange::new(10, 40).expect("range"))
///     .with_budget_range(BudgetRange::new(20.0, 100.0).expect("range"));
/// let criteria = Criteria::new().with_age(25).with_budget(50.0);
///
/// let evaluation = WeightedScorer::default()
///     .evaluate(&item, &criteria)
///     .expect("well-formed item");
/// assert!((evaluation.total - 0.74).abs() < 1e-9);
/// assert_eq!(evaluation.details.total_score, 74.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedScorer {
    weights: DimensionWeights,
}

/// Raw per-dimension credit before weighting.
#[derive(Debug, Clone, Copy)]
struct DimensionScores {
    interests: f64,
    personality: f64,
    occasion: f64,
    age: f64,
    budget: f64,
    gender: f64,
}

impl WeightedScorer {
    /// Construct a scorer from a weight table.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when the table fails
    /// [`DimensionWeights::validate`].
    pub fn new(weights: DimensionWeights) -> Result<Self, ScorerError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weight table in use.
    #[must_use]
    pub const fn weights(&self) -> DimensionWeights {
        self.weights
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a weighted sum of dimension scores"
    )]
    fn blend(&self, scores: DimensionScores) -> f64 {
        let weights = self.weights;
        sanitise(
            scores.interests * weights.interests
                + scores.personality * weights.personality
                + scores.occasion * weights.occasion
                + scores.age * weights.age
                + scores.budget * weights.budget
                + scores.gender * weights.gender,
        )
    }
}

impl Scorer for WeightedScorer {
    fn evaluate(&self, item: &CatalogItem, criteria: &Criteria) -> Result<Evaluation, ScoreError> {
        item.age_range
            .validate()
            .map_err(|source| ScoreError::InvalidAgeRange {
                item_id: item.id,
                source,
            })?;
        item.budget_range
            .validate()
            .map_err(|source| ScoreError::InvalidBudgetRange {
                item_id: item.id,
                source,
            })?;

        let (interests, common_interests) = interest_score(&item.interests, &criteria.interests);
        let scores = DimensionScores {
            interests: sanitise(interests),
            personality: sanitise(personality_score(
                item.personality_type.as_ref(),
                criteria.personality_type.as_ref(),
            )),
            occasion: sanitise(occasion_score(
                item.occasion.as_ref(),
                criteria.occasion.as_ref(),
            )),
            age: sanitise(age_score(item.age_range, criteria.age)),
            budget: sanitise(budget_score(item.budget_range, criteria.budget)),
            gender: sanitise(gender_score(item.gender, criteria.gender.as_ref())),
        };
        let total = self.blend(scores);

        let details = MatchDetails {
            interest: percent(scores.interests),
            personality: percent(scores.personality),
            occasion: percent(scores.occasion),
            age: percent(scores.age),
            budget: percent(scores.budget),
            gender: (self.weights.gender > 0.0).then(|| percent(scores.gender)),
            common_interests,
            total_score: percent(total),
        };
        Ok(Evaluation { total, details })
    }
}

/// Express a unit score on the `0..=100` scale, rounded to one decimal.
#[expect(
    clippy::float_arithmetic,
    reason = "reporting scales and rounds scores"
)]
pub(crate) fn percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

/// Round a unit score to two decimals.
#[expect(
    clippy::float_arithmetic,
    reason = "reporting rounds scores to two decimals"
)]
pub(crate) fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
