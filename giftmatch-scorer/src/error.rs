//! Error types raised while configuring scorers and rankers.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when building a scorer or resolving a scoring profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerError {
    /// The weight table was unusable.
    #[error("dimension weights must be finite, non-negative and sum to 1.0 (got {sum})")]
    InvalidWeights {
        /// Sum of the supplied weights.
        sum: f64,
    },
    /// A profile name did not match any known profile.
    #[error("unknown scoring profile '{0}'")]
    UnknownProfile(String),
}
