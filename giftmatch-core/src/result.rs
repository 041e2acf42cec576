//! Scored output records.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{CatalogItem, Tag};

/// Per-dimension breakdown of a match, expressed on a `0..=100` scale.
///
/// Dimension values are rounded to one decimal place. `gender` is present
/// only when the scorer's weight table gives gender a non-zero weight.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    /// Interest overlap score.
    pub interest: f64,
    /// Personality fit score.
    pub personality: f64,
    /// Occasion fit score.
    pub occasion: f64,
    /// Age fit score.
    pub age: f64,
    /// Budget fit score.
    pub budget: f64,
    /// Gender fit score, reported only for weight tables that use it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<f64>,
    /// Interests shared by the item and the criteria, sorted.
    pub common_interests: Vec<Tag>,
    /// Weighted total on the `0..=100` scale, one decimal place.
    pub total_score: f64,
}

/// Outcome of scoring one item against one set of criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Weighted total in `0.0..=1.0`, unrounded.
    pub total: f64,
    /// Reporting breakdown.
    pub details: MatchDetails,
}

/// A ranked catalog item.
///
/// Serialises as `{ "item": <projection>, "score": 0.74, "matchDetails": {..} }`
/// where the item is written through [`CatalogItem::projection`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    /// The item that was scored.
    pub item: CatalogItem,
    /// Weighted total in `0.0..=1.0`, rounded to two decimals.
    pub score: f64,
    /// Reporting breakdown.
    pub match_details: MatchDetails,
}

impl Serialize for ScoredResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScoredResult", 3)?;
        state.serialize_field("item", &self.item.projection())?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("matchDetails", &self.match_details)?;
        state.end()
    }
}
