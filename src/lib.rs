//! Facade crate for the giftmatch scoring engine.
//!
//! This crate re-exports the catalog and criteria domain types together with
//! the weighted scorer and ranker.

#![forbid(unsafe_code)]

pub use giftmatch_core::{
    AgeRange, BudgetRange, CatalogItem, Criteria, CriteriaError, Evaluation, Gender, IngestError,
    MatchDetails, RangeError, ScoreError, ScoredResult, Scorer, Tag, catalog_interests,
    ingest_catalog, known_interests,
};

pub use giftmatch_scorer::{
    DimensionWeights, RankOptions, RankReport, Ranker, ScorerError, ScoringProfile, SkipReason,
    SkippedItem, WeightedScorer, rank,
};
