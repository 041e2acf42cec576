//! Named scoring profiles bundling a weight table with ranking options.
//!
//! # Examples
//! ```
//! use giftmatch_scorer::{RankOptions, ScoringProfile};
//!
//! let profile: ScoringProfile = "legacy".parse().expect("known profile");
//! assert_eq!(profile.rank_options(), RankOptions::LEGACY);
//! assert_eq!(ScoringProfile::default().to_string(), "canonical");
//! ```
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ranker::{RankOptions, Ranker};
use crate::weights::{CANONICAL_WEIGHTS, DimensionWeights, LEGACY_WEIGHTS};
use crate::{ScorerError, WeightedScorer};

/// Historical behaviours the engine can reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringProfile {
    /// Five dimensions, no minimum score, four results.
    #[default]
    Canonical,
    /// Six dimensions including gender, a `0.2` minimum, twenty results.
    Legacy,
}

impl ScoringProfile {
    /// Return the profile as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Legacy => "legacy",
        }
    }

    /// Weight table for the profile.
    #[must_use]
    pub const fn weights(self) -> DimensionWeights {
        match self {
            Self::Canonical => CANONICAL_WEIGHTS,
            Self::Legacy => LEGACY_WEIGHTS,
        }
    }

    /// Ranking options for the profile.
    #[must_use]
    pub const fn rank_options(self) -> RankOptions {
        match self {
            Self::Canonical => RankOptions::CANONICAL,
            Self::Legacy => RankOptions::LEGACY,
        }
    }

    /// Build a ranker configured for the profile.
    ///
    /// # Errors
    /// Propagates [`ScorerError::InvalidWeights`]; the built-in tables are
    /// valid, so this only fails if a table is edited incorrectly.
    pub fn ranker(self) -> Result<Ranker<WeightedScorer>, ScorerError> {
        let scorer = WeightedScorer::new(self.weights())?;
        Ok(Ranker::new(scorer, self.rank_options()))
    }
}

impl fmt::Display for ScoringProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringProfile {
    type Err = ScorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "legacy" => Ok(Self::Legacy),
            _ => Err(ScorerError::UnknownProfile(s.to_owned())),
        }
    }
}
