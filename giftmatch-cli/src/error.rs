//! Error types emitted by the giftmatch CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use giftmatch_core::CriteriaError;
use giftmatch_scorer::ScorerError;
use thiserror::Error;

/// Errors emitted by the giftmatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The minimum score lies outside `0.0..=1.0`.
    #[error("--min-score must lie between 0 and 1, got {value}")]
    InvalidMinScore { value: f64 },
    /// The requested scoring profile is unknown or unusable.
    #[error(transparent)]
    Profile(#[from] ScorerError),
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An input file did not contain valid JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The catalog file did not hold a JSON array.
    #[error("catalog at {path:?} must be a JSON array")]
    CatalogNotArray { path: Utf8PathBuf },
    /// The criteria lacked a field the command requires.
    #[error("criteria in {path:?} are incomplete: {source}")]
    InvalidCriteria {
        path: Utf8PathBuf,
        #[source]
        source: CriteriaError,
    },
    /// Serializing the command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
