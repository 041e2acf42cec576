//! Core domain types for the gift matching engine.
//!
//! The crate models the two inputs of a matching request, a catalog of
//! [`CatalogItem`]s and the requester's [`Criteria`], together with the
//! [`ScoredResult`] records a ranking produces and the [`Scorer`] trait that
//! connects them. It performs no I/O: catalogs are handed in by the caller
//! and nothing is persisted.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod criteria;
pub mod ingest;
pub mod item;
pub mod result;
pub mod scorer;
pub mod tag;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use criteria::{Criteria, CriteriaError};
pub use ingest::{IngestError, KNOWN_INTERESTS, catalog_interests, ingest_catalog, known_interests};
pub use item::{
    AgeRange, BudgetRange, CatalogItem, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, DisplayFields,
    RangeError,
};
pub use result::{Evaluation, MatchDetails, ScoredResult};
pub use scorer::{ScoreError, Scorer, sanitise};
pub use tag::{Gender, Tag, UnknownGender, tag_set};
