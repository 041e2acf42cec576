//! Score catalog items against a requester's criteria.
//!
//! The `Scorer` trait turns a [`CatalogItem`](crate::CatalogItem) and a
//! [`Criteria`](crate::Criteria) record into an [`Evaluation`].

use thiserror::Error;

use crate::{CatalogItem, Criteria, Evaluation, RangeError};

/// Reasons an individual item cannot be scored.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreError {
    /// The item's age range violates its invariants.
    #[error("item {item_id} has an invalid age range: {source}")]
    InvalidAgeRange {
        /// Identifier of the affected item.
        item_id: u64,
        /// Underlying range violation.
        #[source]
        source: RangeError,
    },
    /// The item's budget range violates its invariants.
    #[error("item {item_id} has an invalid budget range: {source}")]
    InvalidBudgetRange {
        /// Identifier of the affected item.
        item_id: u64,
        /// Underlying range violation.
        #[source]
        source: RangeError,
    },
}

/// Calculate how well a catalog item fits a set of criteria.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. Scoring is pure: inputs are never mutated and
/// no state is kept between calls.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) totals in `0.0..=1.0`.
/// - Return an error only for items that break their own invariants; absent
///   criteria are never an error.
///
/// Use [`Scorer::sanitise`] to clamp raw values.
///
/// # Examples
///
/// ```rust
/// use giftmatch_core::{CatalogItem, Criteria, Evaluation, MatchDetails, ScoreError, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn evaluate(&self, _item: &CatalogItem, _criteria: &Criteria) -> Result<Evaluation, ScoreError> {
///         Ok(Evaluation { total: 1.0, details: MatchDetails::default() })
///     }
/// }
///
/// let scorer = UnitScorer;
/// assert_eq!(scorer.score(&CatalogItem::new(1), &Criteria::new()), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Score `item` against `criteria`, returning the total and breakdown.
    ///
    /// # Errors
    /// Returns [`ScoreError`] when the item itself is malformed.
    fn evaluate(&self, item: &CatalogItem, criteria: &Criteria) -> Result<Evaluation, ScoreError>;

    /// Return the total alone, or `0.0` for items that cannot be scored.
    fn score(&self, item: &CatalogItem, criteria: &Criteria) -> f64 {
        self.evaluate(item, criteria)
            .map_or(0.0, |evaluation| sanitise(evaluation.total))
    }

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        sanitise(score)
    }
}

/// Free-standing form of [`Scorer::sanitise`] for callers without a scorer.
#[must_use]
pub fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}
