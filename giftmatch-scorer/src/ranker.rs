//! Rank a catalog against one set of criteria.
//!
//! Every item is scored independently. Items that cannot be scored, or fall
//! below an optional minimum, are reported as skipped rather than aborting
//! the batch. Survivors are sorted by descending score, with ties kept in
//! catalog order, and truncated to the configured limit.
#![forbid(unsafe_code)]

use giftmatch_core::{CatalogItem, Criteria, ScoreError, ScoredResult, Scorer};
use thiserror::Error;

use crate::WeightedScorer;
use crate::weighted::round_score;

/// Number of results returned by default.
pub const DEFAULT_LIMIT: usize = 4;
/// Number of results returned by the legacy profile.
pub const LEGACY_LIMIT: usize = 20;
/// Minimum total the legacy profile requires before ranking an item.
pub const LEGACY_MIN_SCORE: f64 = 0.2;

/// Truncation and filtering applied after scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Maximum number of results.
    pub limit: usize,
    /// Optional minimum total in `0.0..=1.0`; items below it are skipped.
    pub min_score: Option<f64>,
}

impl RankOptions {
    /// No floor, four results.
    pub const CANONICAL: Self = Self {
        limit: DEFAULT_LIMIT,
        min_score: None,
    };

    /// A `0.2` floor, twenty results.
    pub const LEGACY: Self = Self {
        limit: LEGACY_LIMIT,
        min_score: Some(LEGACY_MIN_SCORE),
    };

    /// Replace the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the minimum score.
    #[must_use]
    pub const fn with_min_score(mut self, min_score: Option<f64>) -> Self {
        self.min_score = min_score;
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Why an item was left out of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SkipReason {
    /// The item could not be scored.
    #[error(transparent)]
    Invalid(#[from] ScoreError),
    /// The item scored below the configured minimum.
    #[error("score {score:.3} is below the minimum {minimum:.3}")]
    BelowMinimum {
        /// Unrounded total the item achieved.
        score: f64,
        /// Configured minimum.
        minimum: f64,
    },
}

/// An item left out of the ranking, with the reason.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkippedItem {
    /// Identifier of the skipped item.
    pub item_id: u64,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Result of scoring one item for ranking.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// The item was scored and is eligible for ranking.
    Scored(ScoredResult),
    /// The item was left out.
    Skipped(SkippedItem),
}

/// Ranked results plus the items that were skipped along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankReport {
    /// Results in rank order, at most `limit` long.
    pub results: Vec<ScoredResult>,
    /// Skipped items in catalog order.
    pub skipped: Vec<SkippedItem>,
}

/// Ranks catalogs with a scorer and fixed [`RankOptions`].
///
/// The ranker holds no mutable state, so one instance can serve concurrent
/// requests.
///
/// # Examples
/// ```
/// use giftmatch_core::{CatalogItem, Criteria};
/// use giftmatch_scorer::{RankOptions, Ranker, WeightedScorer};
///
/// let catalog = vec![
///     CatalogItem::new(1).with_interests(["art"]),
///     CatalogItem::new(2).with_interests(["music"]),
/// ];
/// let criteria = Criteria::new().with_interests(["music"]);
/// let ranker = Ranker::new(WeightedScorer::default(), RankOptions::default().with_limit(1));
///
/// let report = ranker.rank(&catalog, &criteria);
/// assert_eq!(report.results.len(), 1);
/// assert_eq!(report.results[0].item.id, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ranker<S = WeightedScorer> {
    scorer: S,
    options: RankOptions,
}

impl<S: Scorer> Ranker<S> {
    /// Construct a ranker.
    #[must_use]
    pub const fn new(scorer: S, options: RankOptions) -> Self {
        Self { scorer, options }
    }

    /// The options in use.
    #[must_use]
    pub const fn options(&self) -> RankOptions {
        self.options
    }

    /// The scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score a single item, reporting whether it is eligible for ranking.
    #[must_use]
    pub fn outcome(&self, item: &CatalogItem, criteria: &Criteria) -> ItemOutcome {
        let evaluation = match self.scorer.evaluate(item, criteria) {
            Ok(evaluation) => evaluation,
            Err(err) => {
                return ItemOutcome::Skipped(SkippedItem {
                    item_id: item.id,
                    reason: SkipReason::Invalid(err),
                });
            }
        };
        if let Some(minimum) = self.options.min_score
            && evaluation.total < minimum
        {
            return ItemOutcome::Skipped(SkippedItem {
                item_id: item.id,
                reason: SkipReason::BelowMinimum {
                    score: evaluation.total,
                    minimum,
                },
            });
        }
        ItemOutcome::Scored(ScoredResult {
            item: item.clone(),
            score: round_score(evaluation.total),
            match_details: evaluation.details,
        })
    }

    /// Rank `items` against `criteria`.
    ///
    /// Never fails: an empty catalog yields an empty report, and items that
    /// cannot be scored are listed in [`RankReport::skipped`].
    #[must_use]
    pub fn rank<'a, I>(&self, items: I, criteria: &Criteria) -> RankReport
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        let mut report = RankReport::default();
        for item in items {
            match self.outcome(item, criteria) {
                ItemOutcome::Scored(result) => report.results.push(result),
                ItemOutcome::Skipped(skipped) => {
                    log_skip(&skipped);
                    report.skipped.push(skipped);
                }
            }
        }

        let candidates = report.results.len();
        // `sort_by` is stable, so equal scores keep catalog order.
        report
            .results
            .sort_by(|left, right| right.score.total_cmp(&left.score));
        report.results.truncate(self.options.limit);
        log::debug!(
            "ranked {candidates} candidates, returning {} and skipping {}",
            report.results.len(),
            report.skipped.len()
        );
        report
    }
}

/// Rank `items` with the default scorer, no floor, and the given limit.
///
/// ```
/// use giftmatch_core::{CatalogItem, Criteria};
///
/// let results = giftmatch_scorer::rank(&[], &Criteria::new(), 4);
/// assert!(results.is_empty());
///
/// let catalog: Vec<CatalogItem> = (1..=10).map(CatalogItem::new).collect();
/// assert_eq!(giftmatch_scorer::rank(&catalog, &Criteria::new(), 4).len(), 4);
/// ```
#[must_use]
pub fn rank(items: &[CatalogItem], criteria: &Criteria, limit: usize) -> Vec<ScoredResult> {
    Ranker::new(
        WeightedScorer::default(),
        RankOptions::default().with_limit(limit),
    )
    .rank(items, criteria)
    .results
}

fn log_skip(skipped: &SkippedItem) {
    match skipped.reason {
        SkipReason::Invalid(_) => log::warn!(
            "skipping catalog item {}: {}",
            skipped.item_id,
            skipped.reason
        ),
        SkipReason::BelowMinimum { .. } => log::debug!(
            "skipping catalog item {}: {}",
            skipped.item_id,
            skipped.reason
        ),
    }
}
