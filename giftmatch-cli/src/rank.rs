//! Rank command implementation for the giftmatch CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use giftmatch_core::ScoredResult;
use giftmatch_scorer::{Ranker, ScoringProfile, WeightedScorer};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::io::{load_catalog, load_criteria, write_json};
use crate::{
    ARG_ALLOW_PARTIAL, ARG_CATALOG, ARG_CRITERIA, ARG_LIMIT, ARG_MIN_SCORE, ARG_PROFILE, CliError,
    ENV_CATALOG, ENV_CRITERIA,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every gift in a JSON catalog against the recipient \
                 criteria in a JSON file and print the best matches. \
                 Paths and options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Rank a gift catalog against recipient criteria"
)]
#[ortho_config(prefix = "GIFTMATCH")]
pub(crate) struct RankArgs {
    /// Path to a JSON file holding the recipient criteria.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) criteria_path: Option<Utf8PathBuf>,
    /// Path to a JSON array of catalog items.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of results; defaults to the profile's limit.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Drop items whose total falls below this value.
    #[arg(long = ARG_MIN_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) min_score: Option<f64>,
    /// Scoring profile: `canonical` or `legacy`.
    #[arg(long = ARG_PROFILE, value_name = "name")]
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// Accept criteria without an age or budget.
    #[arg(long = ARG_ALLOW_PARTIAL)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) allow_partial: bool,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the criteria JSON file.
    pub(crate) criteria_path: Utf8PathBuf,
    /// Path to the catalog JSON file.
    pub(crate) catalog_path: Utf8PathBuf,
    /// Profile supplying weights and default ranking options.
    pub(crate) profile: ScoringProfile,
    /// Limit overriding the profile's.
    pub(crate) limit: Option<usize>,
    /// Minimum score overriding the profile's.
    pub(crate) min_score: Option<f64>,
    /// Whether criteria may omit age or budget.
    pub(crate) allow_partial: bool,
}

impl RankConfig {
    /// Build the ranker for this invocation.
    pub(crate) fn ranker(&self) -> Result<Ranker<WeightedScorer>, CliError> {
        let mut options = self.profile.rank_options();
        if let Some(limit) = self.limit {
            options = options.with_limit(limit);
        }
        if let Some(min_score) = self.min_score {
            options = options.with_min_score(Some(min_score));
        }
        let scorer = WeightedScorer::new(self.profile.weights())?;
        Ok(Ranker::new(scorer, options))
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let criteria_path = args.criteria_path.ok_or(CliError::MissingArgument {
            field: ARG_CRITERIA,
            env: ENV_CRITERIA,
        })?;
        let catalog_path = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;
        let profile = args
            .profile
            .as_deref()
            .map_or(Ok(ScoringProfile::default()), str::parse)?;
        if let Some(value) = args.min_score
            && !(0.0..=1.0).contains(&value)
        {
            return Err(CliError::InvalidMinScore { value });
        }
        Ok(Self {
            criteria_path,
            catalog_path,
            profile,
            limit: args.limit,
            min_score: args.min_score,
            allow_partial: args.allow_partial,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let results = execute_rank(&config)?;
    write_json(writer, &results)
}

/// Load the inputs named by `config` and rank them.
pub(crate) fn execute_rank(config: &RankConfig) -> Result<Vec<ScoredResult>, CliError> {
    let criteria = load_criteria(&config.criteria_path)?;
    if !config.allow_partial {
        criteria
            .require_age_and_budget()
            .map_err(|source| CliError::InvalidCriteria {
                path: config.criteria_path.clone(),
                source,
            })?;
    }
    let catalog = load_catalog(&config.catalog_path)?;
    let ranker = config.ranker()?;
    log::info!(
        "ranking {} items with the {} profile",
        catalog.len(),
        config.profile
    );
    Ok(ranker.rank(&catalog, &criteria).results)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
