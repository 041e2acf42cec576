//! Scoring and ranking for gift recommendations.
//!
//! The crate provides two complementary capabilities:
//! - **Per-item scoring** with [`WeightedScorer`], which rates a
//!   [`CatalogItem`](giftmatch_core::CatalogItem) against a requester's
//!   [`Criteria`](giftmatch_core::Criteria) on interests, personality,
//!   occasion, age and budget (and optionally gender), blends the partial
//!   credit with a fixed [`DimensionWeights`] table, and reports a
//!   per-dimension breakdown.
//! - **Ranking** with [`Ranker`], which scores a whole catalog, reports the
//!   items it had to skip, sorts by descending score with ties in catalog
//!   order, and truncates to a limit.
//!
//! Weight tables, minimum scores and limits are plain values, bundled by
//! [`ScoringProfile`] for the two historical behaviours.
//!
//! # Examples
//!
//! ```
//! use giftmatch_core::{AgeRange, BudgetRange, CatalogItem, Criteria};
//! use giftmatch_scorer::ScoringProfile;
//!
//! let catalog = vec![
//!     CatalogItem::new(1)
//!         .with_age_range(AgeRange::new(13, 25).expect("range"))
//!         .with_budget_range(BudgetRange::new(20.0, 100.0).expect("range"))
//!         .with_interests(["gaming"]),
//!     CatalogItem::new(2).with_interests(["cooking"]),
//! ];
//! let criteria = Criteria::new().with_age(18).with_budget(60.0).with_interests(["gaming"]);
//!
//! let ranker = ScoringProfile::Canonical.ranker().expect("valid profile");
//! let report = ranker.rank(&catalog, &criteria);
//! assert_eq!(report.results[0].item.id, 1);
//! ```

#![forbid(unsafe_code)]

pub mod dimension;
mod error;
mod profile;
mod ranker;
mod weighted;
mod weights;

pub use error::ScorerError;
pub use profile::ScoringProfile;
pub use ranker::{
    DEFAULT_LIMIT, ItemOutcome, LEGACY_LIMIT, LEGACY_MIN_SCORE, RankOptions, RankReport, Ranker,
    SkipReason, SkippedItem, rank,
};
pub use weighted::WeightedScorer;
pub use weights::{CANONICAL_WEIGHTS, DimensionWeights, LEGACY_WEIGHTS};
